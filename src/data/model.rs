use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – opportunistic typing of one raw CSV cell
// ---------------------------------------------------------------------------

/// A raw cell after dynamic typing, before it is coerced into a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Guess the type of a raw cell.
    ///
    /// Numbers follow a plain decimal grammar (optional sign, digits with an
    /// optional fraction, optional exponent). Words such as `inf` or `NaN`
    /// stay text even though Rust would parse them.
    pub fn guess(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Null;
        }
        match raw {
            "true" | "TRUE" => return CellValue::Bool(true),
            "false" | "FALSE" => return CellValue::Bool(false),
            _ => {}
        }
        if is_decimal_literal(raw.trim()) {
            if let Ok(n) = raw.trim().parse::<f64>() {
                return CellValue::Number(n);
            }
        }
        CellValue::Text(raw.to_string())
    }

    /// The finite numeric value of the cell, if it holds one.
    pub fn as_finite_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }
}

fn is_decimal_literal(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (mantissa, None),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return false;
    }
    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one normalized row
// ---------------------------------------------------------------------------

/// One catalog entry. `name` is never empty and `price` is always finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub source: String,
}

// ---------------------------------------------------------------------------
// ParseReport – what happened to the rows on the way in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    TooFewFields,
    TooManyFields,
    Undecodable,
}

/// A non-fatal anomaly on one data row. `row` is 1-based over data rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowWarning {
    pub row: usize,
    pub kind: WarningKind,
    pub message: String,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseReport {
    /// Data rows seen, including dropped and undecodable ones.
    pub rows_read: usize,
    /// Rows dropped because their name was empty.
    pub rows_dropped: usize,
    /// Records whose id fell back to the row index.
    pub ids_defaulted: usize,
    /// Records whose price was missing or not a number and is shown as 0.
    pub prices_defaulted: usize,
    pub warnings: Vec<RowWarning>,
}

// ---------------------------------------------------------------------------
// Catalog – the result of one successful load
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub records: Vec<Record>,
    pub report: ParseReport,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

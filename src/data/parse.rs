use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

use super::model::{Catalog, CellValue, ParseReport, Record, RowWarning, WarningKind};

/// Raw field values of one data row, as found in the document.
/// `None` means the column is missing from the header or the row is short.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawRow<'a> {
    pub id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub price: Option<&'a str>,
    pub source: Option<&'a str>,
}

/// Column positions of the four known fields within the header.
#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    id: Option<usize>,
    name: Option<usize>,
    price: Option<usize>,
    source: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |field: &str| headers.iter().position(|h| h.trim() == field);
        Columns {
            id: find("id"),
            name: find("name"),
            price: find("price"),
            source: find("source"),
        }
    }

    fn pick<'a>(&self, record: &'a StringRecord) -> RawRow<'a> {
        let get = |idx: Option<usize>| idx.and_then(|i| record.get(i));
        RawRow {
            id: get(self.id),
            name: get(self.name),
            price: get(self.price),
            source: get(self.source),
        }
    }
}

/// Parse a whole CSV document into a [`Catalog`].
///
/// The first row is the header. Blank lines are skipped. Rows whose width
/// differs from the header are still normalized and reported as warnings.
/// A row that is not valid UTF-8 is reported as
/// [`WarningKind::Undecodable`] and skipped. Only a broken header fails the
/// whole document.
pub fn parse_bytes(bytes: &[u8]) -> Result<Catalog, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let columns = Columns::from_headers(&headers);
    let width = headers.len();

    let mut normalizer = Normalizer::default();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        match result {
            Ok(record) => {
                if record.len() != width {
                    normalizer.warn(width_warning(row, record.len(), width));
                }
                normalizer.push(row, columns.pick(&record));
            }
            Err(e) => {
                normalizer.warn(RowWarning {
                    row,
                    kind: WarningKind::Undecodable,
                    message: e.to_string(),
                });
                normalizer.report.rows_read += 1;
            }
        }
    }

    Ok(normalizer.finish())
}

/// Normalize a single row. `row` is the 1-based data row index used when
/// the id is blank. Returns `None` when the row has no name.
pub fn normalize_row(row: usize, raw: RawRow<'_>) -> Option<Record> {
    let name = trimmed(raw.name);
    if name.is_empty() {
        return None;
    }

    let id = match trimmed(raw.id) {
        "" => row.to_string(),
        id => id.to_string(),
    };

    Some(Record {
        id,
        name: name.to_string(),
        price: price_of(raw.price).unwrap_or(0.0),
        source: trimmed(raw.source).to_string(),
    })
}

fn price_of(raw: Option<&str>) -> Option<f64> {
    // `+ 0.0` turns -0 into 0.
    raw.map(CellValue::guess)
        .and_then(|cell| cell.as_finite_f64())
        .map(|price| price + 0.0)
}

fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or("")
}

#[derive(Default)]
struct Normalizer {
    records: Vec<Record>,
    report: ParseReport,
}

impl Normalizer {
    fn push(&mut self, row: usize, raw: RawRow<'_>) {
        self.report.rows_read += 1;
        let Some(record) = normalize_row(row, raw) else {
            debug!("row {row}: dropped, empty name");
            self.report.rows_dropped += 1;
            return;
        };
        if trimmed(raw.id).is_empty() {
            self.report.ids_defaulted += 1;
        }
        if price_of(raw.price).is_none() {
            debug!("row {row}: price {:?} shown as 0", raw.price.unwrap_or(""));
            self.report.prices_defaulted += 1;
        }
        self.records.push(record);
    }

    fn warn(&mut self, warning: RowWarning) {
        warn!("{warning}");
        self.report.warnings.push(warning);
    }

    fn finish(self) -> Catalog {
        Catalog {
            records: self.records,
            report: self.report,
        }
    }
}

fn width_warning(row: usize, found: usize, expected: usize) -> RowWarning {
    let kind = if found < expected {
        WarningKind::TooFewFields
    } else {
        WarningKind::TooManyFields
    };
    RowWarning {
        row,
        kind,
        message: format!("expected {expected} fields but found {found}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_text(text: &str) -> Result<Catalog, csv::Error> {
        parse_bytes(text.as_bytes())
    }

    const SCENARIO: &str = "id,name,price,source\n1,Apple,20,Market\n,Banana,,Farm\n3,,15,Shop\n";

    fn record(id: &str, name: &str, price: f64, source: &str) -> Record {
        Record {
            id: id.into(),
            name: name.into(),
            price,
            source: source.into(),
        }
    }

    #[test]
    fn scenario_drops_nameless_row_and_falls_back_to_row_index() {
        let catalog = parse_text(SCENARIO).unwrap();
        assert_eq!(
            catalog.records,
            vec![
                record("1", "Apple", 20.0, "Market"),
                record("2", "Banana", 0.0, "Farm"),
            ]
        );
        assert_eq!(catalog.report.rows_read, 3);
        assert_eq!(catalog.report.rows_dropped, 1);
        assert_eq!(catalog.report.ids_defaulted, 1);
        assert_eq!(catalog.report.prices_defaulted, 1);
        assert!(catalog.report.warnings.is_empty());
    }

    #[test]
    fn keeps_named_rows_once_in_order() {
        let text = "id,name,price,source\n9,Zucchini,1,A\n8,  ,2,B\n7,Yam,3,C\n6,Xigua,4,D\n";
        let catalog = parse_text(text).unwrap();
        let names: Vec<&str> = catalog.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Zucchini", "Yam", "Xigua"]);
    }

    #[test]
    fn header_order_and_extra_columns_do_not_matter() {
        let text = "source,extra,price, name ,id\nFarm,x,12.5,  Leek  ,  L1 \n";
        let catalog = parse_text(text).unwrap();
        assert_eq!(catalog.records, vec![record("L1", "Leek", 12.5, "Farm")]);
    }

    #[test]
    fn missing_columns_fall_back_to_defaults() {
        let catalog = parse_text("name\nOnion\nPepper\n").unwrap();
        assert_eq!(
            catalog.records,
            vec![record("1", "Onion", 0.0, ""), record("2", "Pepper", 0.0, "")]
        );
    }

    #[test]
    fn missing_name_column_drops_everything() {
        let catalog = parse_text("id,price\n1,2\n2,3\n").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.report.rows_dropped, 2);
    }

    #[test]
    fn unparsable_prices_become_zero() {
        let text = "id,name,price\n1,A,abc\n2,B,1e999\n3,C,TRUE\n4,D,NaN\n5,E,-3\n";
        let catalog = parse_text(text).unwrap();
        let prices: Vec<f64> = catalog.records.iter().map(|r| r.price).collect();
        assert_eq!(prices, [0.0, 0.0, 0.0, 0.0, -3.0]);
        assert!(prices.iter().all(|p| p.is_finite()));
        assert_eq!(catalog.report.prices_defaulted, 4);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "id,name\n\n1,A\n\n\n2,B\n";
        let catalog = parse_text(text).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.report.warnings.is_empty());
    }

    #[test]
    fn whitespace_only_line_is_a_row() {
        let catalog = parse_text("id,name\n,A\n   \n,B\n").unwrap();
        assert_eq!(catalog.records, vec![record("1", "A", 0.0, ""), record("3", "B", 0.0, "")]);
        assert_eq!(catalog.report.rows_dropped, 1);
        assert_eq!(catalog.report.warnings[0].row, 2);
        assert_eq!(catalog.report.warnings[0].kind, WarningKind::TooFewFields);
    }

    #[test]
    fn ragged_rows_are_kept_and_reported() {
        let text = "id,name,price,source\n1,Apple\n2,Banana,5,Farm,extra\n";
        let catalog = parse_text(text).unwrap();
        assert_eq!(
            catalog.records,
            vec![record("1", "Apple", 0.0, ""), record("2", "Banana", 5.0, "Farm")]
        );
        let kinds: Vec<&WarningKind> = catalog.report.warnings.iter().map(|w| &w.kind).collect();
        assert_eq!(kinds, [&WarningKind::TooFewFields, &WarningKind::TooManyFields]);
        assert_eq!(catalog.report.warnings[0].row, 1);
    }

    #[test]
    fn undecodable_row_is_warned_and_skipped() {
        let bytes = b"id,name,price,source\n1,Apple,20,Market\n2,Caf\xe9,5,Shop\n,Kiwi,7,Farm\n";
        let catalog = parse_bytes(bytes).unwrap();
        assert_eq!(
            catalog.records,
            vec![record("1", "Apple", 20.0, "Market"), record("3", "Kiwi", 7.0, "Farm")]
        );
        assert_eq!(catalog.report.rows_read, 3);
        assert_eq!(catalog.report.warnings.len(), 1);
        let warning = &catalog.report.warnings[0];
        assert_eq!(warning.row, 2);
        assert_eq!(warning.kind, WarningKind::Undecodable);
    }

    #[test]
    fn undecodable_header_fails_the_document() {
        assert!(parse_bytes(b"id,n\xe4me\n1,Cafe\n").is_err());
    }

    #[test]
    fn negative_zero_price_is_zero() {
        let catalog = parse_text("id,name,price\n1,A,-0\n2,B,-0.0\n").unwrap();
        for r in &catalog.records {
            assert_eq!(r.price.to_string(), "0");
            assert!(r.price.is_sign_positive());
        }
        assert_eq!(catalog.report.prices_defaulted, 0);
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let catalog = parse_text("").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.report.rows_read, 0);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let text = "id,name,price,source\n1,\"Rice, jasmine\",42,\"Farm, north\"\n";
        let catalog = parse_text(text).unwrap();
        assert_eq!(catalog.records[0].name, "Rice, jasmine");
        assert_eq!(catalog.records[0].source, "Farm, north");
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let text = "id,name,price,source\n 01 , Apple ,20.50,Market\n,Banana,,Farm\n3,,15,Shop\n4,\"Kale, curly\",x, \n";
        let first = parse_text(text).unwrap().records;

        let mut writer = csv::Writer::from_writer(Vec::new());
        for r in &first {
            writer.serialize(r).unwrap();
        }
        let again = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let second = parse_text(&again).unwrap().records;
        assert_eq!(first, second);

        for (i, r) in first.iter().enumerate() {
            let price = r.price.to_string();
            let raw = RawRow {
                id: Some(r.id.as_str()),
                name: Some(r.name.as_str()),
                price: Some(price.as_str()),
                source: Some(r.source.as_str()),
            };
            assert_eq!(normalize_row(i + 1, raw).as_ref(), Some(r));
        }
    }

    #[test]
    fn normalize_row_rejects_blank_name() {
        let raw = RawRow {
            id: Some("1"),
            name: Some("   "),
            ..RawRow::default()
        };
        assert_eq!(normalize_row(1, raw), None);

        let raw = RawRow {
            name: Some(" Mango "),
            ..RawRow::default()
        };
        assert_eq!(normalize_row(7, raw), Some(record("7", "Mango", 0.0, "")));
    }
}

use std::io::Write;

use anyhow::{Context, Result};

use crate::data::model::Record;

const HEADERS: [&str; 4] = ["ID", "Name", "Price", "Source"];
pub const NO_MATCHES: &str = "No matching items";

/// Write `records` as an aligned text table.
pub fn write_table(out: &mut impl Write, records: &[&Record]) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "{NO_MATCHES}")?;
        return Ok(());
    }

    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| [r.id.clone(), r.name.clone(), r.price.to_string(), r.source.clone()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS.map(String::from), &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row(out: &mut impl Write, cells: &[String; 4], widths: &[usize; 4]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (cell, &w))| {
            // Price column is right aligned.
            if col == 2 {
                format!("{cell:>w$}")
            } else {
                format!("{cell:<w$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// Write `records` as a JSON array.
pub fn write_json(out: &mut impl Write, records: &[&Record]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records).context("serializing records")?;
    writeln!(out)?;
    Ok(())
}

use crate::models::ohlc::OhlcBar;
use crate::models::symbol::SymbolRecord;

/// Column labels of the symbol overview, in render order
pub const SYMBOL_TABLE_HEADER: [&str; 5] = ["name", "open", "high", "low", "close"];

/// Column labels of the market history table, in render order
pub const OHLC_TABLE_HEADER: [&str; 5] = ["date", "open", "high", "low", "close"];

/// Fallback line rendered instead of a table when there is nothing to show
pub const NO_DATA_MESSAGE: &str = "Crypto Data Not Available";

/// Render the symbol overview table.
///
/// Pure function of its input: a fixed five-column header, one row per
/// record with cells in header order, or the fallback line when the
/// sequence is empty. Cell text is the display form of the field value.
pub fn render_symbol_table(records: &[SymbolRecord]) -> String {
    if records.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let rows: Vec<[String; 5]> = records.iter().map(record_cells).collect();
    render_grid(&SYMBOL_TABLE_HEADER, &rows)
}

/// Render daily market bars with the same grid layout.
pub fn render_ohlc_table(bars: &[OhlcBar]) -> String {
    if bars.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let rows: Vec<[String; 5]> = bars.iter().map(bar_cells).collect();
    render_grid(&OHLC_TABLE_HEADER, &rows)
}

// Cells are emitted in the fixed header order, never in record field order.
fn record_cells(record: &SymbolRecord) -> [String; 5] {
    [
        record.name.clone(),
        record.open.to_string(),
        record.high.to_string(),
        record.low.to_string(),
        record.close.to_string(),
    ]
}

fn bar_cells(bar: &OhlcBar) -> [String; 5] {
    [
        bar.date.format("%Y-%m-%d").to_string(),
        bar.open.to_string(),
        bar.high.to_string(),
        bar.low.to_string(),
        bar.close.to_string(),
    ]
}

fn render_grid(header: &[&str; 5], rows: &[[String; 5]]) -> String {
    let mut widths: [usize; 5] = [0; 5];
    for (width, label) in widths.iter_mut().zip(header) {
        *width = label.len();
    }
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &widths, header.iter().copied());
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in rows {
        push_line(&mut out, &widths, row.iter().map(String::as_str));
    }

    out
}

fn push_line<'a>(out: &mut String, widths: &[usize; 5], cells: impl Iterator<Item = &'a str>) {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{:<width$}", cell))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

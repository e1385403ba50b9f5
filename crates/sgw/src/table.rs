//! Aligned two-dimensional text tables for `get` output.

/// Format headers and rows into an aligned table.
///
/// Column width is the maximum of the header and every cell in that column.
/// Cells are left-justified and separated by a two-space gutter; the second
/// line is a run of dashes per column. Values are never truncated or
/// wrapped, a wide cell simply widens its column.
///
/// # Example
///
/// ```
/// use sgw::table::format_table;
///
/// let out = format_table(
///     &["Field", "Value"],
///     &[vec!["Backplane Gateway".into(), "192.168.1.1".into()]],
/// );
/// assert_eq!(out.lines().nth(1).unwrap(), "-----------------  -----------");
/// ```
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&widths, headers.iter().map(|h| h.to_string())));
    lines.push(format_row(&widths, widths.iter().map(|w| "-".repeat(*w))));
    for row in rows {
        lines.push(format_row(&widths, row.iter().cloned()));
    }

    lines.join("\n")
}

fn format_row(widths: &[usize], cells: impl Iterator<Item = String>) -> String {
    cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}

//! Plain-text tables for the summary and preview output.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::group::GroupedOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Renders `rows` under `headers`, two spaces between columns. Cells beyond
/// the header width are dropped; columns with no entry in `aligns` are
/// left-aligned.
pub fn render_table(headers: &[String], rows: &[Vec<String>], aligns: &[Align]) -> String {
    let mut widths = headers
        .iter()
        .map(|h| h.chars().count().max(1))
        .collect::<Vec<_>>();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(flatten(cell).chars().count());
        }
    }

    let mut output = String::new();
    let _ = writeln!(output, "{}", format_row(headers, &widths, aligns));
    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
    let _ = writeln!(output, "{}", format_row(&rule, &widths, &[]));
    for row in rows {
        let _ = writeln!(output, "{}", format_row(row, &widths, aligns));
    }
    output
}

/// One line per group with its row count, followed by a total line.
pub fn render_summary(output: &GroupedOutput, group_column: &str) -> String {
    let headers = vec![group_column.to_string(), "rows".to_string()];
    let mut rows = output
        .groups
        .iter()
        .map(|group| vec![group.key.clone(), group.rows.len().to_string()])
        .collect::<Vec<_>>();
    rows.push(vec![
        format!("({} groups)", output.group_count()),
        output.row_count().to_string(),
    ]);
    render_table(&headers, &rows, &[Align::Left, Align::Right])
}

/// The first `limit` rows in output order, prefixed by their group key.
pub fn render_preview(output: &GroupedOutput, limit: usize) -> String {
    let mut headers = Vec::with_capacity(output.header.len() + 1);
    headers.push("group".to_string());
    headers.extend(output.header.iter().cloned());
    let rows = output
        .rows()
        .take(limit)
        .map(|(key, row)| {
            let mut cells = Vec::with_capacity(row.len() + 1);
            cells.push(key.to_string());
            cells.extend(row.iter().cloned());
            cells
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows, &[])
}

fn format_row(values: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let mut line = values
        .iter()
        .zip(widths.iter().copied())
        .enumerate()
        .map(|(idx, (value, width))| {
            let cell = flatten(value);
            match aligns.get(idx).copied().unwrap_or(Align::Left) {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.truncate(line.trim_end().len());
    line
}

fn flatten(value: &str) -> Cow<'_, str> {
    if value.contains(['\n', '\r', '\t']) {
        Cow::Owned(value.replace(['\n', '\r', '\t'], " "))
    } else {
        Cow::Borrowed(value)
    }
}

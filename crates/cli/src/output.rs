//! Terminal output

use colored::Colorize;
use sitedesk_core::StatusLevel;
use sitedesk_schema::{Catalog, Column};
use std::io::{self, Write};

/// Longest cell shown before truncation
const MAX_CELL_WIDTH: usize = 40;

/// Print rows as an aligned table with a bold header
pub fn print_table(out: &mut impl Write, columns: &[Column], rows: &[Vec<String>]) -> io::Result<()> {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell_text(cell).chars().count())
                .chain(std::iter::once(column.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad(&column.label, *width))
        .collect();
    writeln!(out, "{}", header.join("  ").bold())?;

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(&cell_text(cell), *width))
            .collect();
        writeln!(out, "{}", cells.join("  ").trim_end())?;
    }

    writeln!(out, "{}", format!("{} rows", rows.len()).dimmed())
}

/// Print every collection with its capabilities
pub fn print_collections(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    for spec in catalog.iter() {
        let caps = spec.capabilities;
        let actions = if caps.is_read_only() {
            "read-only".to_string()
        } else {
            [("add", caps.add), ("edit", caps.edit), ("delete", caps.delete)]
                .iter()
                .filter(|(_, enabled)| *enabled)
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(
            out,
            "{}  {}  {}",
            pad(&spec.name, 22).cyan(),
            pad(&spec.title, 22),
            actions.dimmed()
        )?;
    }
    Ok(())
}

/// Print a one-line status message
pub fn print_status(out: &mut impl Write, level: StatusLevel, message: &str) -> io::Result<()> {
    let tag = match level {
        StatusLevel::Info => "info".blue(),
        StatusLevel::Success => "ok".green(),
        StatusLevel::Warning => "warning".yellow(),
        StatusLevel::Error => "error".red(),
    };
    writeln!(out, "{} {}", tag.bold(), message)
}

fn cell_text(cell: &str) -> String {
    let single_line = cell.replace(['\n', '\r'], " ");
    if single_line.chars().count() > MAX_CELL_WIDTH {
        let cut: String = single_line.chars().take(MAX_CELL_WIDTH - 1).collect();
        format!("{}…", cut)
    } else {
        single_line
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_table_alignment() {
        let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];
        let rows = vec![
            vec!["1".to_string(), "Cement".to_string()],
            vec!["12".to_string(), "Sand".to_string()],
        ];
        let text = render(|out| print_table(out, &columns, &rows));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID  Name  ");
        assert_eq!(lines[1], "1   Cement");
        assert_eq!(lines[2], "12  Sand");
        assert_eq!(lines[3], "2 rows");
    }

    #[test]
    fn test_long_cells_truncated() {
        let long = "x".repeat(100);
        let text = cell_text(&long);
        assert_eq!(text.chars().count(), MAX_CELL_WIDTH);
        assert!(text.ends_with('…'));
        assert_eq!(cell_text("a\nb"), "a b");
    }

    #[test]
    fn test_collections_listing() {
        let text = render(|out| print_collections(out, &Catalog::builtin()));
        let materials = text.lines().find(|l| l.starts_with("materials")).unwrap();
        assert!(materials.contains("add, edit, delete"));
        let applications = text
            .lines()
            .find(|l| l.starts_with("applications"))
            .unwrap();
        assert!(applications.contains("edit"));
    }

    #[test]
    fn test_status_tags() {
        let text = render(|out| print_status(out, StatusLevel::Success, "Changes saved"));
        assert_eq!(text, "ok Changes saved\n");
    }
}

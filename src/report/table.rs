//! Plain tables
//!
//! Fixed-width text for the terminal and report files, CSV when the target
//! file ends in `.csv`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::ReportError;

/// Column alignment in text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
struct Column {
    title: String,
    align: Align,
}

/// A titled grid of preformatted cells with a leading row index
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[(&str, Align)]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|&(title, align)| Column {
                    title: title.to_string(),
                    align,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with blanks, long rows truncated.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.columns.len(), String::new());
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Aligned text, one line per row, numbered from 0
    pub fn render_text(&self) -> String {
        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(column.title.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&" ".repeat(index_width));
        for (column, width) in self.columns.iter().zip(&widths) {
            out.push_str("  ");
            pad(&mut out, &column.title, *width, column.align);
        }
        trim_line(&mut out);

        for (index, row) in self.rows.iter().enumerate() {
            let _ = write!(out, "{:>width$}", index, width = index_width);
            for ((cell, column), width) in row.iter().zip(&self.columns).zip(&widths) {
                out.push_str("  ");
                pad(&mut out, cell, *width, column.align);
            }
            trim_line(&mut out);
        }
        out
    }

    /// Comma separated values with a header row
    pub fn render_csv(&self) -> String {
        let mut out = String::new();
        let header: Vec<&str> = self.columns.iter().map(|c| c.title.as_str()).collect();
        push_csv_record(&mut out, &header);
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            push_csv_record(&mut out, &cells);
        }
        out
    }

    /// Write the table, as CSV when `path` ends in `.csv`
    pub fn write_to_path(&self, path: &Path) -> Result<(), ReportError> {
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let content = if is_csv {
            self.render_csv()
        } else {
            self.render_text()
        };
        fs::write(path, content).map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

fn pad(out: &mut String, text: &str, width: usize, align: Align) {
    let fill = width.saturating_sub(text.chars().count());
    match align {
        Align::Left => {
            out.push_str(text);
            out.push_str(&" ".repeat(fill));
        }
        Align::Right => {
            out.push_str(&" ".repeat(fill));
            out.push_str(text);
        }
    }
}

fn trim_line(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}

fn push_csv_record(out: &mut String, cells: &[&str]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if cell.contains([',', '"', '\n']) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(&[("name", Align::Left), ("DPT", Align::Right)]);
        table.push_row(vec!["Counter".to_string(), "4.00".to_string()]);
        table.push_row(vec!["Mud Shot".to_string(), "1.50".to_string()]);
        table.push_row(vec!["Rock, Smash".to_string()]);
        table
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let text = sample().render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "   name          DPT");
        assert_eq!(lines[1], "0  Counter      4.00");
        assert_eq!(lines[2], "1  Mud Shot     1.50");
        assert_eq!(lines[3], "2  Rock, Smash");
    }

    #[test]
    fn test_render_csv_quotes() {
        let csv = sample().render_csv();
        assert_eq!(
            csv,
            "name,DPT\nCounter,4.00\nMud Shot,1.50\n\"Rock, Smash\",\n"
        );
    }

    #[test]
    fn test_head() {
        let table = sample();
        assert_eq!(table.head(2).len(), 2);
        assert_eq!(table.head(10).len(), 3);
        assert_eq!(table.head(1).cell(0, 0), Some("Counter"));
        assert_eq!(table.cell(5, 0), None);
    }

    #[test]
    fn test_write_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample();

        let csv_path = dir.path().join("out.csv");
        table.write_to_path(&csv_path).unwrap();
        assert!(std::fs::read_to_string(&csv_path).unwrap().starts_with("name,DPT\n"));

        let txt_path = dir.path().join("out.txt");
        table.write_to_path(&txt_path).unwrap();
        assert!(std::fs::read_to_string(&txt_path).unwrap().starts_with("   name"));
    }
}

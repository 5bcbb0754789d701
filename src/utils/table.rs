//! Table rendering utilities for CLI outputs.
//!
//! Renders a bordered, left-aligned table:
//!
//! ```text
//! ----------------
//! | day | hour 1 |
//! |-----|--------|
//! | 01  | 09:00  |
//! ----------------
//! ```

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Total line width, borders included.
    pub fn line_width(&self) -> usize {
        1 + self.columns.iter().map(|c| c.width + 3).sum::<usize>()
    }

    fn push_cells<'a>(&self, out: &mut String, cells: impl Iterator<Item = &'a str>) {
        out.push('|');
        for (col, cell) in self.columns.iter().zip(cells) {
            out.push_str(&format!(" {:<width$} |", cell, width = col.width));
        }
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "-".repeat(self.line_width());

        out.push_str(&rule);
        out.push('\n');

        // Header
        self.push_cells(&mut out, self.columns.iter().map(|c| c.header.as_str()));

        out.push('|');
        for col in &self.columns {
            out.push_str(&"-".repeat(col.width + 2));
            out.push('|');
        }
        out.push('\n');

        // Rows; missing trailing cells render blank
        for row in &self.rows {
            let cells = (0..self.columns.len()).map(|i| row.get(i).map_or("", String::as_str));
            self.push_cells(&mut out, cells);
        }

        out.push_str(&rule);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_draws_borders_and_pads_cells() {
        let mut t = Table::new(vec![Column::new("a", 3), Column::new("bb", 2)]);
        t.add_row(vec!["x".into(), "yy".into()]);

        let expected = "\
------------
| a   | bb |
|-----|----|
| x   | yy |
------------
";
        assert_eq!(t.render(), expected);
    }

    #[test]
    fn short_rows_are_padded() {
        let mut t = Table::new(vec![Column::new("a", 1), Column::new("b", 1)]);
        t.add_row(vec!["1".into()]);
        assert!(t.render().contains("| 1 |   |\n"));
    }
}

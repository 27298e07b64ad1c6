// SPDX-License-Identifier: MIT
//
// Borderless column layout.
//
// The card's link sections are two columns of fixed width, no border
// characters, a little padding inside each cell, and a three-space gap
// between columns. Cells hold already-styled text (colours, hyperlinks) and
// may span several lines; every line is padded to the column width so
// columns stay aligned regardless of what escapes they carry.
//
//   |··content·····················|···|··content·····················|
//    pad                        pad  gap

use crate::text;

/// Layout parameters for a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    /// Total width of each column, padding included.
    pub col_widths: Vec<usize>,
    /// Spaces before the content in every cell.
    pub padding_left: usize,
    /// Spaces after the content in every cell.
    pub padding_right: usize,
    /// String placed between adjacent columns.
    pub separator: String,
}

impl TableStyle {
    /// Two columns of `width` each, padding 2/2, three-space separator.
    #[must_use]
    pub fn two_column(width: usize) -> Self {
        Self {
            col_widths: vec![width, width],
            padding_left: 2,
            padding_right: 2,
            separator: "   ".to_owned(),
        }
    }

    /// Columns available for content in a cell of `col_width`.
    #[must_use]
    pub const fn content_width(&self, col_width: usize) -> usize {
        col_width.saturating_sub(self.padding_left + self.padding_right)
    }

    /// Total rendered width of one row.
    #[must_use]
    pub fn row_width(&self) -> usize {
        let cols: usize = self.col_widths.iter().sum();
        let gaps = self.col_widths.len().saturating_sub(1) * text::display_width(&self.separator);
        cols + gaps
    }
}

/// Rows of styled cells laid out by a [`TableStyle`].
#[derive(Debug, Clone)]
pub struct Table {
    style: TableStyle,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// An empty table.
    #[must_use]
    pub const fn new(style: TableStyle) -> Self {
        Self {
            style,
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render blank; extra cells are ignored.
    pub fn push<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render every row into lines joined by `\n` (no trailing newline).
    #[must_use]
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }

    /// Render every row into individual lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        for row in &self.rows {
            self.render_row(row, &mut out);
        }
        out
    }

    fn render_row(&self, row: &[String], out: &mut Vec<String>) {
        let cells: Vec<Vec<&str>> = self
            .style
            .col_widths
            .iter()
            .enumerate()
            .map(|(i, _)| row.get(i).map_or_else(Vec::new, |c| c.lines().collect()))
            .collect();

        let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

        for line_idx in 0..height {
            let line: Vec<String> = self
                .style
                .col_widths
                .iter()
                .zip(&cells)
                .map(|(&width, cell)| self.render_cell_line(cell.get(line_idx).copied(), width))
                .collect();
            out.push(line.join(&self.style.separator));
        }
    }

    fn render_cell_line(&self, content: Option<&str>, width: usize) -> String {
        let inner = self.style.content_width(width);
        let body = text::truncate(content.unwrap_or(""), inner);
        let cell = format!("{}{body}", " ".repeat(self.style.padding_left));
        text::pad_right(&cell, width)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{display_width, strip_ansi};
    use pretty_assertions::assert_eq;

    #[test]
    fn two_column_geometry() {
        let style = TableStyle::two_column(44);
        assert_eq!(style.content_width(44), 40);
        assert_eq!(style.row_width(), 91);
    }

    #[test]
    fn single_row_layout() {
        let mut t = Table::new(TableStyle::two_column(10));
        t.push(["ab", "cd"]);
        assert_eq!(t.render(), format!("  ab{}cd{}", " ".repeat(11), " ".repeat(6)));
    }

    #[test]
    fn every_line_has_row_width() {
        let style = TableStyle::two_column(44);
        let expected = style.row_width();
        let mut t = Table::new(style);
        t.push(["\x1b[32mGitHub\x1b[0m", "\x1b]8;;https://dave.io/go/github\x07https://dave.io/go/github\x1b]8;;\x07"]);
        t.push(["Website", "https://dave.io"]);
        for line in t.lines() {
            assert_eq!(display_width(&line), expected);
        }
    }

    #[test]
    fn long_content_is_truncated() {
        let mut t = Table::new(TableStyle::two_column(10));
        t.push(["abcdefghijkl", "x"]);
        let line = t.render();
        assert!(line.starts_with("  abcde…  "), "got {line:?}");
    }

    #[test]
    fn multi_line_cells_extend_row() {
        let mut t = Table::new(TableStyle::two_column(8));
        t.push(["a\nb\nc", "x"]);
        let lines = t.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(strip_ansi(&lines[2]).trim(), "c");
    }

    #[test]
    fn missing_cells_render_blank() {
        let mut t = Table::new(TableStyle::two_column(8));
        t.push(["only"]);
        assert_eq!(t.render(), format!("  only{}", " ".repeat(13)));
    }

    #[test]
    fn empty_row_is_one_blank_line() {
        let mut t = Table::new(TableStyle::two_column(4));
        t.push(Vec::<String>::new());
        assert_eq!(t.render(), " ".repeat(11));
    }

    #[test]
    fn empty_table_renders_nothing() {
        let t = Table::new(TableStyle::two_column(4));
        assert!(t.is_empty());
        assert_eq!(t.render(), "");
    }

    #[test]
    fn push_counts_rows() {
        let mut t = Table::new(TableStyle::two_column(4));
        t.push(["a", "b"]);
        t.push(["c", "d"]);
        assert_eq!(t.len(), 2);
    }
}

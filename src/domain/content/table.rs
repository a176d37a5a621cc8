//! Appendix table decoding
//!
//! Models usually answer with a markdown pipe table, sometimes with
//! tab-separated rows. Lines before the first row are kept as title lines.

/// Appendix decoded into a rectangular grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppendixTable {
    /// Free text preceding the table (headings, captions)
    pub title_lines: Vec<String>,
    /// Rows of cells; the first row is the header. Every row has the same width.
    pub rows: Vec<Vec<String>>,
    /// Free text following the table
    pub trailing_lines: Vec<String>,
}

impl AppendixTable {
    /// Decode appendix text. Never fails; text without rows yields no rows.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::default();

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match split_row(line) {
                Some(cells) => table.rows.push(cells),
                None if is_separator_row(line) => {}
                None if table.rows.is_empty() => table.title_lines.push(strip_heading(line)),
                None => table.trailing_lines.push(line.to_string()),
            }
        }

        table.square_up();
        table
    }

    /// Number of columns (0 when there are no rows)
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    fn square_up(&mut self) {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
    }
}

/// Cells of a pipe or tab row, or None for prose lines.
fn split_row(line: &str) -> Option<Vec<String>> {
    if is_separator_row(line) {
        return None;
    }

    if line.starts_with('|') || line.matches('|').count() >= 2 {
        let inner = line.strip_prefix('|').unwrap_or(line);
        let inner = inner.strip_suffix('|').unwrap_or(inner);
        let cells = inner.split('|').map(clean_cell).collect();
        return Some(cells);
    }

    if line.contains('\t') {
        return Some(line.split('\t').map(clean_cell).collect());
    }

    None
}

/// Markdown alignment rows like `|---|:---:|`
fn is_separator_row(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | '+' | ' ' | '\t'))
}

fn clean_cell(cell: &str) -> String {
    cell.trim().replace("**", "")
}

fn strip_heading(line: &str) -> String {
    line.trim_start_matches('#').trim().replace("**", "")
}

//! Table rendering for alias listings.

use console::measure_text_width;

/// A simple box-drawn table.
///
/// Column widths use the visible width of each cell, so styled cells line
/// up with plain ones.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row. Cells beyond the header count are ignored.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();

        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }

        self.rows.push(row);
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.render_border('┌', '┬', '┐'));
        lines.push(self.render_row(&self.headers));
        lines.push(self.render_border('├', '┼', '┤'));
        lines.extend(self.rows.iter().map(|row| self.render_row(row)));
        lines.push(self.render_border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let padding = width.saturating_sub(measure_text_width(cell));
            s.push_str(&format!(" {}{} │", cell, " ".repeat(padding)));
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty_still_renders_headers() {
        let table = Table::new(["Alias", "Command"]);

        let output = table.render();
        assert!(output.contains("Alias"));
        assert!(output.contains("Command"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(["Alias", "Command"]);
        table.add_row(["ll", "ls -la"]);
        table.add_row(["up", "sudo apt-get update"]);

        let output = table.render();
        assert!(output.contains("ll"));
        assert!(output.contains("sudo apt-get update"));
    }

    #[test]
    fn table_rows_have_equal_width() {
        let mut table = Table::new(["Alias", "Command"]);
        table.add_row(["a", "a much longer command line"]);
        table.add_row(["longer_alias", "x"]);

        let output = table.render();
        let widths: Vec<_> = output.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn table_ignores_ansi_codes_in_width() {
        let styled = console::Style::new()
            .red()
            .force_styling(true)
            .apply_to("ll")
            .to_string();
        let mut plain = Table::new(["Alias"]);
        plain.add_row(["ll"]);
        let mut colored = Table::new(["Alias"]);
        colored.add_row([styled]);

        let plain_out = plain.render();
        let colored_out = colored.render();
        assert_eq!(
            plain_out.lines().nth(3).map(measure_text_width),
            colored_out.lines().nth(3).map(measure_text_width)
        );
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(["A", "B", "C"]);
        table.add_row(["only", "two"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn table_line_count() {
        let mut table = Table::new(["Alias", "Command", "Options"]);
        table.add_row(["ll", "ls", ""]);
        table.add_row(["gs", "git status", ""]);
        table.add_row(["up", "apt-get update", "root"]);

        // top border, header, separator, 3 rows, bottom border
        assert_eq!(table.render().lines().count(), 7);
    }
}

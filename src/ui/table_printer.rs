use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_GAP: &str = " | ";

/// One table to print: a title banner, an optional header line and rows of
/// already formatted (possibly ANSI-painted) cells.
#[derive(Debug, Clone)]
pub struct Table<'a> {
    title: &'a str,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    empty_message: Option<&'a str>,
    min_width: usize,
}

impl<'a> Table<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            headers: Vec::new(),
            rows: Vec::new(),
            empty_message: None,
            min_width: 0,
        }
    }

    pub fn headers<S: AsRef<str>>(mut self, headers: &[S]) -> Self {
        self.headers = headers.iter().map(|h| h.as_ref().to_string()).collect();
        self
    }

    pub fn rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    /// Printed instead of the header and rows when there are no rows.
    pub fn empty_message(mut self, msg: &'a str) -> Self {
        self.empty_message = Some(msg);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        Self {
            util: self.util.clone(),
            left_pad: pad,
        }
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let width = width.max(self.util.visible_width(title)).max(1);
        self.write_line(out, &"-".repeat(width))?;
        self.write_line(out, &title.to_uppercase())?;
        self.write_line(out, &"-".repeat(width))
    }

    /// Natural width of the table body, ignoring the title.
    pub fn table_width(&self, table: &Table<'_>) -> usize {
        let widths = self.column_widths(table);
        if widths.is_empty() {
            return 0;
        }
        widths.iter().sum::<usize>() + (widths.len() - 1) * COLUMN_GAP.len()
    }

    pub fn render<W: Write + ?Sized>(&self, table: &Table<'_>, out: &mut W) -> io::Result<()> {
        let widths = self.column_widths(table);
        let mut total = self
            .table_width(table)
            .max(table.min_width)
            .max(self.util.visible_width(table.title));

        if table.rows.is_empty() {
            if let Some(msg) = table.empty_message {
                total = total.max(self.util.visible_width(msg));
                self.render_banner(table.title, total, out)?;
                self.write_line(out, msg)?;
                return self.write_line(out, &"-".repeat(total));
            }
        }

        self.render_banner(table.title, total, out)?;
        if !table.headers.is_empty() {
            self.write_line(out, &self.join_padded(&table.headers, &widths))?;
            self.write_line(out, &"-".repeat(total))?;
        }
        for row in &table.rows {
            self.write_line(out, &self.join_padded(row, &widths))?;
        }
        self.write_line(out, &"-".repeat(total))
    }

    fn column_widths(&self, table: &Table<'_>) -> Vec<usize> {
        let cols = table
            .headers
            .len()
            .max(table.rows.iter().map(|r| r.len()).max().unwrap_or(0));
        let mut widths = vec![0usize; cols];
        for line in std::iter::once(&table.headers).chain(table.rows.iter()) {
            for (i, cell) in line.iter().enumerate() {
                widths[i] = widths[i].max(self.util.visible_width(cell));
            }
        }
        widths
    }

    fn join_padded(&self, cells: &[String], widths: &[usize]) -> String {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| self.util.pad_visible(cell, *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        line.trim_end().to_string()
    }

    fn write_line<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> io::Result<()> {
        writeln!(out, "{}{s}", " ".repeat(self.left_pad))
    }
}

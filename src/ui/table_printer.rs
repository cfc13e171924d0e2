use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_SEP: &str = " | ";

/// A titled table with a header row.
pub struct Table<'a, T: AsRef<str>> {
    pub title: &'a str,
    pub headers: &'a [&'a str],
    pub rows: &'a [Vec<T>],
    /// Printed under the title instead of the header when there are no rows.
    pub empty_message: &'a str,
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

    /// Return a clone that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        Self {
            left_pad: pad,
            ..self.clone()
        }
    }

    pub fn table_width<T: AsRef<str>>(&self, table: &Table<'_, T>) -> usize {
        let widths = self.column_widths(table.headers, table.rows);
        let natural = widths.iter().sum::<usize>()
            + COLUMN_SEP.len() * widths.len().saturating_sub(1);
        let title = self.util.visible_width(table.title);
        if table.rows.is_empty() {
            natural
                .max(title)
                .max(self.util.visible_width(table.empty_message))
        } else {
            natural.max(title)
        }
    }

    pub fn render<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table: &Table<'_, T>,
        out: &mut W,
    ) -> io::Result<()> {
        let width = self.table_width(table);
        let rule = "-".repeat(width.max(1));

        self.write_indented(out, &rule)?;
        self.write_indented(out, &table.title.to_uppercase())?;
        self.write_indented(out, &rule)?;

        if table.rows.is_empty() {
            self.write_indented(out, table.empty_message)?;
            return self.write_indented(out, &rule);
        }

        let widths = self.column_widths(table.headers, table.rows);
        self.write_indented(out, &self.join_padded(table.headers, &widths))?;
        self.write_indented(out, &rule)?;
        for row in table.rows {
            self.write_indented(out, &self.join_padded(row, &widths))?;
        }
        self.write_indented(out, &rule)
    }

    fn column_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers.iter().map(|h| self.util.visible_width(h)).collect();
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(self.util.visible_width(cell.as_ref()));
            }
        }
        widths
    }

    fn join_padded<T: AsRef<str>>(&self, cells: &[T], widths: &[usize]) -> String {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| self.util.pad_visible(cell.as_ref(), *w))
            .collect::<Vec<_>>()
            .join(COLUMN_SEP);
        line.trim_end().to_string()
    }

    fn write_indented<W: Write + ?Sized>(&self, out: &mut W, line: &str) -> io::Result<()> {
        writeln!(out, "{}{line}", " ".repeat(self.left_pad))
    }
}

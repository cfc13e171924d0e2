use crate::calendar::CalendarEngine;
use crate::config::Config;
use crate::ui::display_data::DisplayDataBuilder;
use crate::ui::grid_printer::GridPrinter;
use crate::ui::table_printer::{Table, TablePrinter};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const NO_SELECTION: &str = "No day selected. Use 'select <date>' or 'today'.";

#[derive(Debug, Clone)]
pub struct DisplayManager {
    printer: TablePrinter,
    pub grid: GridPrinter,
    util: WidthUtil,
    pub data: DisplayDataBuilder,
    centered: bool,
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self {
            printer: TablePrinter::new(),
            grid: GridPrinter::new(),
            util: WidthUtil::default(),
            data: DisplayDataBuilder::new(),
            centered: true,
        }
    }
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uncoloured, left-aligned output; stable across terminals.
    pub fn plain() -> Self {
        Self {
            grid: GridPrinter::plain(),
            data: DisplayDataBuilder::plain(),
            centered: false,
            ..Self::default()
        }
    }

    fn left_pad(&self, width: usize) -> usize {
        if self.centered {
            self.util.center_pad(width)
        } else {
            0
        }
    }

    pub fn render_calendar<W: Write + ?Sized>(
        &self,
        engine: &CalendarEngine,
        out: &mut W,
    ) -> io::Result<()> {
        let grid = self.grid.with_left_pad(self.left_pad(self.grid.row_width()));
        grid.render(engine.state(), &engine.visible_days(), out)
    }

    pub fn render_day_detail<W: Write + ?Sized>(
        &self,
        engine: &CalendarEngine,
        out: &mut W,
    ) -> io::Result<()> {
        let Some(day) = engine.state().selected() else {
            let pad = self.left_pad(self.grid.row_width());
            return writeln!(out, "{}{NO_SELECTION}", " ".repeat(pad));
        };
        let title = format!("Tasks on {day}");
        let rows = self.data.task_rows(engine.selected_tasks());
        let table = Table {
            title: &title,
            headers: &["ID", "PRIORITY", "DONE", "TITLE"],
            rows: &rows,
            empty_message: "No tasks on this day.",
        };
        let pad = self.left_pad(self.printer.table_width(&table));
        self.printer.with_left_pad(pad).render(&table, out)
    }

    pub fn render_config<W: Write + ?Sized>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let rows = self.data.config_rows(config);
        let table = Table {
            title: "Config",
            headers: &["ID", "KEY", "DESCRIPTION", "VALUE"],
            rows: &rows,
            empty_message: "No config items found.",
        };
        let pad = self.left_pad(self.printer.table_width(&table));
        self.printer.with_left_pad(pad).render(&table, out)
    }

    /// Grid followed by the selected day's tasks.
    pub fn display_calendar(&self, engine: &CalendarEngine) {
        let mut stdout = io::stdout();
        let _ = self
            .render_calendar(engine, &mut stdout)
            .and_then(|_| writeln!(stdout))
            .and_then(|_| self.render_day_detail(engine, &mut stdout));
    }

    pub fn display_config(&self, config: &Config) {
        let mut stdout = io::stdout();
        let _ = self.render_config(config, &mut stdout);
    }
}

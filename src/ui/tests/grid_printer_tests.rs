use super::{february_engine, key};
use crate::calendar::NavCommand;
use crate::ui::ansi::{FG_DARK_GRAY, STYLE_UNDERLINE, priority_fg};
use crate::core::types::Priority;
use crate::ui::grid_printer::{CELL_WIDTH, GridPrinter};
use crate::ui::width_util::WidthUtil;

fn render_plain(engine: &crate::calendar::CalendarEngine) -> Vec<String> {
    let mut buf = Vec::new();
    GridPrinter::plain()
        .render(engine.state(), &engine.visible_days(), &mut buf)
        .unwrap();
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn month_grid_has_header_labels_and_five_weeks() {
    let engine = february_engine();
    let lines = render_plain(&engine);

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0].trim(), "February 2024");
    let labels: Vec<&str> = lines[1].split_whitespace().collect();
    assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    assert!(lines[2].starts_with(" 29      30  1"));
    assert!(lines[4].contains(" 14 *3"));
    assert!(lines[6].contains("  2  1"));
}

#[test]
fn week_grid_is_one_row() {
    let mut engine = february_engine();
    engine.navigate(NavCommand::ToggleView);
    let lines = render_plain(&engine);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].trim(), "Week of 2024-02-12");
}

#[test]
fn cells_mark_today_selection_and_counts() {
    let mut engine = february_engine();
    let printer = GridPrinter::plain();

    let days = engine.visible_days();
    let valentines = days.iter().find(|d| d.date == key(2024, 2, 14)).unwrap();
    assert_eq!(printer.format_cell(valentines), " 14 *3 ");
    let quiet = days.iter().find(|d| d.date == key(2024, 2, 5)).unwrap();
    assert_eq!(printer.format_cell(quiet), "  5    ");

    engine.navigate(NavCommand::Select(key(2024, 2, 29)));
    let days = engine.visible_days();
    let leap = days.iter().find(|d| d.date == key(2024, 2, 29)).unwrap();
    assert_eq!(printer.format_cell(leap), "[29] 1 ");
}

#[test]
fn coloured_cells_keep_their_width() {
    let engine = february_engine();
    let printer = GridPrinter::new();
    let util = WidthUtil::default();
    let days = engine.visible_days();

    for day in &days {
        assert_eq!(util.visible_width(&printer.format_cell(day)), CELL_WIDTH);
    }

    let today = days.iter().find(|d| d.is_today).unwrap();
    let cell = printer.format_cell(today);
    assert!(cell.contains(STYLE_UNDERLINE));
    assert!(cell.contains(priority_fg(Priority::Medium)));

    // Only a completed task on the 29th: the count is greyed out.
    let leap = days.iter().find(|d| d.date == key(2024, 2, 29)).unwrap();
    assert!(printer.format_cell(leap).contains(&format!("{FG_DARK_GRAY}1")));

    let padding = days.iter().find(|d| d.date == key(2024, 1, 29)).unwrap();
    assert!(printer.format_cell(padding).contains(FG_DARK_GRAY));
}

#[test]
fn left_pad_indents_every_line() {
    let engine = february_engine();
    let mut buf = Vec::new();
    GridPrinter::plain()
        .with_left_pad(4)
        .render(engine.state(), &engine.visible_days(), &mut buf)
        .unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.lines().all(|l| l.starts_with("    ")));
    assert_eq!(GridPrinter::plain().row_width(), 55);
}

//! Some utility functions, to pretty-print the views

use crate::calendar::WEEKDAY_LABELS;
use crate::view::calendar::CalendarCell;
use crate::view::daily::DailyRow;

/// The width of a rendered calendar cell
const CELL_WIDTH: usize = 7;

/// Render one line of the daily checklist
pub fn format_row(row: &DailyRow) -> String {
    let completion = if row.completed { "✓" } else { " " };
    let mut line = format!("[{}] {}\t{}", completion, row.title, row.id);
    if row.description.is_empty() == false {
        line.push_str(&format!("\n      {}", row.description));
    }
    line
}

/// A debug utility that pretty-prints a daily checklist
pub fn print_day(heading: &str, rows: &[DailyRow], empty_message: &str) {
    println!("{}", heading);
    if rows.is_empty() {
        println!("    {}", empty_message);
        return;
    }
    for row in rows {
        println!("    {}", format_row(row));
    }
}

/// Render a month grid as text: one header line, then one line per week.
///
/// Days that have activities show their count in parentheses, and today is marked with a `*`.
pub fn format_month_grid(cells: &[CalendarCell]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(WEEKDAY_LABELS.iter()
        .map(|label| format!("{:<width$}", label, width = CELL_WIDTH))
        .collect::<String>()
        .trim_end()
        .to_string());

    for week in cells.chunks(7) {
        let line: String = week.iter()
            .map(|cell| {
                let text = match cell {
                    CalendarCell::Padding => String::new(),
                    CalendarCell::Day(summary) => {
                        let today = if summary.is_today { "*" } else { "" };
                        match summary.count {
                            0 => format!("{}{}", summary.day(), today),
                            n => format!("{}{}({})", summary.day(), today, n),
                        }
                    },
                };
                format!("{:<width$}", text, width = CELL_WIDTH)
            })
            .collect();
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// A debug utility that pretty-prints a month grid, then the activities it previews
pub fn print_month(label: &str, cells: &[CalendarCell]) {
    println!("{}", label);
    for line in format_month_grid(cells) {
        println!("{}", line);
    }

    for cell in cells {
        if let CalendarCell::Day(summary) = cell {
            if summary.count == 0 {
                continue;
            }
            println!("  {:>2}: {}", summary.day(), summary.preview_titles.join(", "));
            if let Some(more) = summary.more_label() {
                println!("      {}", more);
            }
        }
    }
}

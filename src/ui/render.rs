//! Tables shown by `upload`, `report` and `show`.

use crate::core::calculator::deviation::meets_target;
use crate::models::{WeekOverview, WeeklySummary};
use crate::ui::messages::no_color;
use crate::utils::colors::{GREY, color_for_deviation, color_for_target};
use crate::utils::table::{Cell, Column, Table};
use crate::utils::time::{format_hours, format_minutes_hhmm};
use crate::utils::mins2readable;

fn cell(text: String, color: &'static str) -> Cell {
    if no_color() {
        Cell::plain(text)
    } else {
        Cell::colored(text, color)
    }
}

/// Weekly totals: one row per student.
pub fn weekly_table(rows: &[WeeklySummary], separator: char) -> String {
    let mut t = Table::new(
        vec![
            Column::left("student_name"),
            Column::right("hours_this_week"),
            Column::right("deviation_minutes"),
            Column::right("cumulative_minutes"),
            Column::right("deviation"),
        ],
        separator,
    );

    for r in rows {
        let color = color_for_deviation(r.deviation_minutes);
        t.add_row(vec![
            Cell::plain(r.student_name.clone()),
            Cell::plain(format_hours(r.hours_this_week)),
            cell(r.deviation_minutes.to_string(), color),
            Cell::plain(r.cumulative_minutes.to_string()),
            cell(mins2readable(r.deviation_minutes, true, false), color),
        ]);
    }

    t.render()
}

/// Session overview: one `H:MM` column per week plus the total.
pub fn overview_table(overview: &WeekOverview, target_minutes: i64, separator: char) -> String {
    let mut columns = vec![Column::left("Name")];
    columns.extend(overview.week_labels.iter().map(|w| Column::right(w)));
    columns.push(Column::right("Total"));

    let mut t = Table::new(columns, separator);

    for s in &overview.students {
        let mut row = vec![Cell::plain(s.student_name.clone())];

        for w in &overview.week_labels {
            row.push(match s.weeks.get(w) {
                Some(m) => cell(
                    format_minutes_hhmm(*m),
                    color_for_target(meets_target(*m, target_minutes)),
                ),
                None => cell("--:--".to_string(), GREY),
            });
        }

        row.push(Cell::plain(format_minutes_hhmm(s.total_minutes)));
        t.add_row(row);
    }

    t.render()
}

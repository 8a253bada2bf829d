// src/export/model.rs

use crate::core::calculator::deviation::meets_target;
use crate::models::WeekOverview;
use crate::utils::time::format_minutes_hhmm;
use serde::Serialize;

/// Flat form of the session overview written by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct OverviewExport {
    pub target_minutes: i64,
    #[serde(flatten)]
    pub overview: WeekOverview,
}

impl OverviewExport {
    pub fn new(overview: WeekOverview, target_minutes: i64) -> Self {
        Self {
            target_minutes,
            overview,
        }
    }

    /// Header line: name, one column per week, totals.
    pub(crate) fn headers(&self) -> Vec<String> {
        let mut h = vec!["Name".to_string()];
        h.extend(self.overview.week_labels.iter().cloned());
        h.push("Total".to_string());
        h.push("Total (min)".to_string());
        h
    }

    /// Cells as text (`H:MM`, empty where the student has no data that week).
    pub(crate) fn text_rows(&self) -> Vec<Vec<String>> {
        self.overview
            .students
            .iter()
            .map(|s| {
                let mut row = vec![s.student_name.clone()];
                for w in &self.overview.week_labels {
                    row.push(s.weeks.get(w).map(|m| format_minutes_hhmm(*m)).unwrap_or_default());
                }
                row.push(format_minutes_hhmm(s.total_minutes));
                row.push(s.total_minutes.to_string());
                row
            })
            .collect()
    }

    pub(crate) fn meets_target(&self, minutes: i64) -> bool {
        meets_target(minutes, self.target_minutes)
    }
}

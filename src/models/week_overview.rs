use serde::Serialize;
use std::collections::BTreeMap;

/// One student's line in the session overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentOverview {
    pub student_name: String,
    /// Minutes per week label; weeks without attendance are absent.
    pub weeks: BTreeMap<String, i64>,
    pub total_minutes: i64,
}

/// Every upload of the session pivoted by week label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeekOverview {
    /// Week labels in upload order.
    pub week_labels: Vec<String>,
    /// Students sorted by name.
    pub students: Vec<StudentOverview>,
}

impl WeekOverview {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Builds the overview from `(week_label, student_name, minutes)` rows
    /// already sorted in upload order. Same-week rows are summed.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, String, i64)>,
    {
        let mut week_labels: Vec<String> = Vec::new();
        let mut students: BTreeMap<String, StudentOverview> = BTreeMap::new();

        for (week, name, minutes) in rows {
            if !week_labels.contains(&week) {
                week_labels.push(week.clone());
            }

            let entry = students
                .entry(name.clone())
                .or_insert_with(|| StudentOverview {
                    student_name: name,
                    ..Default::default()
                });

            *entry.weeks.entry(week).or_insert(0) += minutes;
            entry.total_minutes += minutes;
        }

        Self {
            week_labels,
            students: students.into_values().collect(),
        }
    }
}

use std::collections::BTreeMap;

/// Cumulative attended minutes per student for one session.
///
/// Owned by the caller (the CLI loads it from the session store) and passed
/// by reference into the aggregator, which returns the updated copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    cumulative: BTreeMap<String, i64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prior cumulative minutes for a student (0 when never seen).
    pub fn minutes_for(&self, student_name: &str) -> i64 {
        self.cumulative.get(student_name).copied().unwrap_or(0)
    }

    /// Adds `minutes` to the student's total and returns the new total.
    pub fn add_minutes(&mut self, student_name: &str, minutes: i64) -> i64 {
        let total = self
            .cumulative
            .entry(student_name.to_string())
            .or_insert(0);
        *total += minutes;
        *total
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.cumulative.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, i64)> for SessionState {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            cumulative: iter.into_iter().collect(),
        }
    }
}

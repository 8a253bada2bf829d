use chrono::NaiveDateTime;
use std::fmt;

/// A cell as read from the input file, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

impl RawCell {
    /// Wraps text, mapping blank strings to `Empty`.
    pub fn text(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            RawCell::Empty
        } else {
            RawCell::Text(t.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RawCell::Empty)
    }
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCell::Empty => Ok(()),
            RawCell::Text(s) => write!(f, "{s}"),
            RawCell::Number(n) => write!(f, "{n}"),
            RawCell::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Header line plus data rows of one sheet or CSV file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
    /// 1-based row number of the header line in the source file.
    pub header_row: usize,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self {
            headers,
            rows,
            header_row: 1,
        }
    }

    /// Row number shown to the user for the data row at `index`.
    pub fn row_number(&self, index: usize) -> usize {
        self.header_row + index + 1
    }

    pub fn cell(&self, row: usize, col: usize) -> &RawCell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&RawCell::Empty)
    }
}

use std::fmt;

use calamine::Data;
use chrono::NaiveDateTime;

/// One spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Data> for Cell {
    fn from(value: Data) -> Self {
        match value {
            Data::Empty => Cell::Empty,
            Data::Bool(b) => Cell::Bool(b),
            Data::Int(i) => Cell::Int(i),
            Data::Float(f) => Cell::Float(f),
            Data::String(s) => Cell::Text(s),
            // Serial dates that don't resolve to a calendar value keep the raw serial.
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => Cell::DateTime(naive),
                None => Cell::Float(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s),
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }
}

/// Renders the value the way the row predicates see it. An empty cell is
/// the empty string, so it can never contain a keyword.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
            Cell::DateTime(dt) => write!(f, "{}", dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_as_empty_string() {
        assert_eq!(Cell::Empty.to_string(), "");
    }

    #[test]
    fn text_and_numbers_render_verbatim() {
        assert_eq!(Cell::Text("SOC Analyst".into()).to_string(), "SOC Analyst");
        assert_eq!(Cell::Int(42).to_string(), "42");
        assert_eq!(Cell::Float(98500.5).to_string(), "98500.5");
        assert_eq!(Cell::Bool(true).to_string(), "true");
    }
}

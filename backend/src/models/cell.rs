use serde::{Deserialize, Serialize};

/// A loosely-typed figure as it arrives from the plans dataset.
///
/// Regulatory filings mix numeric columns with free text ("$500", "N/A"),
/// so readers must go through [`DataCell::as_amount`] rather than assume a
/// number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataCell {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl DataCell {
    /// The cell as a finite number, if it has one.
    ///
    /// Text is trimmed and parsed whole; `"abc"`, `""`, `"NaN"` and
    /// `"inf"` all yield `None`.
    pub fn as_amount(&self) -> Option<f64> {
        let value = match self {
            DataCell::Number(n) => *n,
            DataCell::Text(s) => s.trim().parse::<f64>().ok()?,
            DataCell::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// The cell as display text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataCell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for DataCell {
    fn from(value: f64) -> Self {
        DataCell::Number(value)
    }
}

impl From<&str> for DataCell {
    fn from(value: &str) -> Self {
        DataCell::Text(value.to_string())
    }
}

impl From<String> for DataCell {
    fn from(value: String) -> Self {
        DataCell::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_is_amount() {
        assert_eq!(DataCell::Number(412.5).as_amount(), Some(412.5));
    }

    #[test]
    fn test_numeric_text_is_amount() {
        assert_eq!(DataCell::from(" 300.25 ").as_amount(), Some(300.25));
    }

    #[test]
    fn test_garbage_text_is_not_amount() {
        assert_eq!(DataCell::from("abc").as_amount(), None);
        assert_eq!(DataCell::from("").as_amount(), None);
        assert_eq!(DataCell::from("NaN").as_amount(), None);
        assert_eq!(DataCell::from("inf").as_amount(), None);
    }

    #[test]
    fn test_non_finite_number_is_not_amount() {
        assert_eq!(DataCell::Number(f64::INFINITY).as_amount(), None);
        assert_eq!(DataCell::Number(f64::NAN).as_amount(), None);
    }

    #[test]
    fn test_deserialize_mixed_cells() {
        let cells: Vec<Option<DataCell>> =
            serde_json::from_str(r#"[300, null, "abc", true]"#).unwrap();
        assert_eq!(cells[0], Some(DataCell::Number(300.0)));
        assert_eq!(cells[1], None);
        assert_eq!(cells[2], Some(DataCell::Text("abc".to_string())));
        assert_eq!(cells[3], Some(DataCell::Other(serde_json::Value::Bool(true))));
    }
}

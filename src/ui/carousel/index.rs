//! Coercion of the caller's initial selection into an item index.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Initial selection as supplied by the caller: a number or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultSelected {
    Index(i64),
    /// Non-integer literal, e.g. `1.0` in TOML.
    Number(f64),
    Text(String),
}

impl Default for DefaultSelected {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl From<i64> for DefaultSelected {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<usize> for DefaultSelected {
    fn from(index: usize) -> Self {
        i64::try_from(index).map_or_else(|_| Self::Text(index.to_string()), Self::Index)
    }
}

impl From<&str> for DefaultSelected {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DefaultSelected {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for DefaultSelected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("'{raw}' is not an integer")]
    NotAnInteger { raw: String },

    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: i64, len: usize },
}

/// Resolves `raw` to a position in `[0, len)`.
pub fn coerce_index(raw: &DefaultSelected, len: usize) -> Result<usize, IndexError> {
    let index = match raw {
        DefaultSelected::Index(index) => *index,
        DefaultSelected::Number(value) => {
            integral(*value).ok_or_else(|| IndexError::NotAnInteger {
                raw: value.to_string(),
            })?
        }
        DefaultSelected::Text(text) => {
            parse_integer(text).ok_or_else(|| IndexError::NotAnInteger { raw: text.clone() })?
        }
    };

    usize::try_from(index)
        .ok()
        .filter(|position| *position < len)
        .ok_or(IndexError::OutOfRange { index, len })
}

/// Numeric text to integer: blank is zero, radix prefixes are honoured,
/// integral floats are accepted.
fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0b" | "0B") => Some(2),
        Some("0o" | "0O") => Some(8),
        _ => None,
    };
    if let Some(radix) = radix {
        return i64::from_str_radix(&text[2..], radix).ok();
    }

    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }

    integral(text.parse::<f64>().ok()?)
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(coerce_index(&DefaultSelected::Index(1), 3), Ok(1));
        assert_eq!(coerce_index(&"2".into(), 3), Ok(2));
        assert_eq!(coerce_index(&" 1 ".into(), 3), Ok(1));
        assert_eq!(coerce_index(&"+1".into(), 3), Ok(1));
    }

    #[test]
    fn blank_text_is_zero() {
        assert_eq!(coerce_index(&"".into(), 3), Ok(0));
        assert_eq!(coerce_index(&"   ".into(), 3), Ok(0));
    }

    #[test]
    fn radix_prefixes() {
        assert_eq!(coerce_index(&"0x2".into(), 3), Ok(2));
        assert_eq!(coerce_index(&"0b10".into(), 3), Ok(2));
        assert_eq!(coerce_index(&"0o1".into(), 3), Ok(1));
        assert!(coerce_index(&"0xzz".into(), 3).is_err());
    }

    #[test]
    fn integral_floats() {
        assert_eq!(coerce_index(&"2.0".into(), 3), Ok(2));
        assert_eq!(coerce_index(&"1e0".into(), 3), Ok(1));
        assert_eq!(
            coerce_index(&"1.5".into(), 3),
            Err(IndexError::NotAnInteger {
                raw: "1.5".to_string()
            })
        );
    }

    #[test]
    fn float_literals() {
        assert_eq!(coerce_index(&DefaultSelected::Number(2.0), 3), Ok(2));
        assert_eq!(
            coerce_index(&DefaultSelected::Number(1.5), 3),
            Err(IndexError::NotAnInteger {
                raw: "1.5".to_string()
            })
        );
        assert!(matches!(
            coerce_index(&DefaultSelected::Number(f64::NAN), 3),
            Err(IndexError::NotAnInteger { .. })
        ));
        assert_eq!(
            coerce_index(&DefaultSelected::Number(-1.0), 3),
            Err(IndexError::OutOfRange { index: -1, len: 3 })
        );
    }

    #[test]
    fn non_numbers_are_rejected() {
        for raw in ["not-a-number", "NaN", "inf", "1a"] {
            assert!(
                matches!(
                    coerce_index(&raw.into(), 3),
                    Err(IndexError::NotAnInteger { .. })
                ),
                "{raw} should not parse"
            );
        }
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            coerce_index(&DefaultSelected::Index(3), 3),
            Err(IndexError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            coerce_index(&"-1".into(), 3),
            Err(IndexError::OutOfRange { index: -1, len: 3 })
        );
        assert!(coerce_index(&DefaultSelected::Index(0), 0).is_err());
    }

    #[test]
    fn deserializes_number_or_text() {
        #[derive(Deserialize)]
        struct Props {
            default_selected: DefaultSelected,
        }
        let props: Props = serde_json::from_str(r#"{"default_selected": 2}"#).unwrap();
        assert_eq!(props.default_selected, DefaultSelected::Index(2));
        let props: Props = serde_json::from_str(r#"{"default_selected": "2"}"#).unwrap();
        assert_eq!(props.default_selected, DefaultSelected::Text("2".to_string()));
        let props: Props = serde_json::from_str(r#"{"default_selected": 2.5}"#).unwrap();
        assert_eq!(props.default_selected, DefaultSelected::Number(2.5));
    }
}

//! Field kinds, definitions and typed field values.
//!
//! Every schema field is declared with a `FieldKind`; casting a raw value
//! through its kind produces a `FieldValue`. The kinds form a closed set,
//! so every casting rule is checked exhaustively at compile time.

use regex_lite::Regex;
use std::fmt;
use strata_core::Value;

use crate::error::{ValidationError, ValidationResult};

/// The closed set of field variants a schema can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// UTF-8 text.
    Text,
    /// 64-bit signed integer.
    Integer,
    /// 64-bit floating point. Accepts raw Int values.
    Float,
    /// Boolean.
    Boolean,
    /// Milliseconds since Unix epoch. Accepts raw Int values.
    Timestamp,
}

impl FieldKind {
    /// Returns the display name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Integer => "Integer",
            FieldKind::Float => "Float",
            FieldKind::Boolean => "Boolean",
            FieldKind::Timestamp => "Timestamp",
        }
    }

    /// Cast a present raw value into a typed field value.
    fn cast_value(&self, field: &str, value: &Value) -> ValidationResult<FieldValue> {
        match (self, value) {
            (FieldKind::Text, Value::String(s)) => Ok(FieldValue::Text(s.clone())),
            (FieldKind::Integer, Value::Int(i)) => Ok(FieldValue::Integer(*i)),
            (FieldKind::Float, Value::Float(f)) => Ok(FieldValue::Float(*f)),
            // Int is acceptable where Float is expected.
            (FieldKind::Float, Value::Int(i)) => Ok(FieldValue::Float(*i as f64)),
            (FieldKind::Boolean, Value::Bool(b)) => Ok(FieldValue::Boolean(*b)),
            // Timestamps are Int-based.
            (FieldKind::Timestamp, Value::Int(i)) => Ok(FieldValue::Timestamp(*i)),
            _ => Err(ValidationError::field_type_mismatch(
                field,
                self.name(),
                value.type_name(),
            )),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A typed field value produced by a successful cast.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent optional value.
    Null,
    /// Text value.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Float value.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// Timestamp as milliseconds since Unix epoch.
    Timestamp(i64),
}

impl FieldValue {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Get as text reference if this is a Text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer if this is an Integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as boolean if this is a Boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as timestamp if this is a Timestamp value.
    pub fn as_timestamp(&self) -> Option<i64> {
        match self {
            FieldValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Text(s) => write!(f, "\"{}\"", s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Timestamp(t) => write!(f, "ts:{}", t),
        }
    }
}

/// Field definition within a schema.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field kind (Text, Integer, Float, Boolean, Timestamp).
    pub kind: FieldKind,
    /// Whether this field must carry a non-null value.
    pub required: bool,
    /// Match pattern constraint (regex, Text fields only).
    pub pattern: Option<String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            pattern: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Cast a raw value (or its absence) into a typed field value.
    ///
    /// Absence is this definition's responsibility: optional fields accept
    /// it and yield `FieldValue::Null`, required fields reject it.
    pub fn cast(&self, value: Option<&Value>) -> ValidationResult<FieldValue> {
        match value {
            None | Some(Value::Null) => {
                if self.required {
                    Err(ValidationError::required_field(&self.name))
                } else {
                    Ok(FieldValue::Null)
                }
            }
            Some(value) => {
                let cast = self.kind.cast_value(&self.name, value)?;
                if let Some(pattern) = &self.pattern {
                    self.check_pattern(pattern, &cast)?;
                }
                Ok(cast)
            }
        }
    }

    fn check_pattern(&self, pattern: &str, value: &FieldValue) -> ValidationResult<()> {
        // Pattern constraints only apply to text values.
        let FieldValue::Text(text) = value else {
            return Ok(());
        };

        let regex = Regex::new(pattern)
            .map_err(|_| ValidationError::invalid_pattern(&self.name, pattern))?;

        if regex.is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::pattern_mismatch(&self.name, pattern))
        }
    }
}

// File: form-builder/src/value.rs
// Purpose: Runtime values carried by form fields

use serde::Serialize;
use std::fmt;

/// Value of a single form field
///
/// Closed over the primitive kinds a form input can display. `Null` only
/// appears for hand-written members that have nothing to show; absent
/// `Option`s resolve to the zero value of their inner type instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Value {
    /// Whether this is the zero value of its kind
    ///
    /// Templates use this to leave out `value="..."` for empty inputs.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::Int(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Bool(b) => !b,
            Value::Null => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                // Format number nicely (remove .0 for whole numbers)
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => Ok(()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        // Widen through the shortest f32 digits so 0.1f32 stays 0.1
        Value::Float(n.to_string().parse().unwrap_or(f64::from(n)))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

macro_rules! impl_from_lossless_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

// Wide integers keep their exact digits as a string when they overflow i64.
macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    i64::try_from(n)
                        .map(Value::Int)
                        .unwrap_or_else(|_| Value::String(n.to_string()))
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, isize, i128, u128);

//! JSON round trips.
//!
//! [`to_json`] is a direct pass-through to `serde_json`. [`from_json`] parses
//! into a caller-chosen type, so the result comes back with that type's
//! methods attached:
//!
//! ```
//! use kata_objects::{json, Rectangle};
//!
//! let r: Rectangle = json::from_json(r#"{"width":10,"height":20}"#).unwrap();
//! assert!((r.area() - 200.0).abs() < f64::EPSILON);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize a value to compact JSON text.
///
/// Struct fields are written in declaration order.
///
/// # Errors
///
/// Returns an error if the value's `Serialize` implementation fails, or if a
/// map has non-string keys.
pub fn to_json<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value)
}

/// Parse JSON text into a value of type `T`.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON or does not have the shape
/// `T` expects.
pub fn from_json<T>(json: &str) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str(json)
}

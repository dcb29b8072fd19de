//! Object exercises for the kata workspace.
//!
//! # Scope
//!
//! - **Rectangle** - a plain value type with an area method
//! - **JSON** - serialize any value to JSON text and parse JSON back into a
//!   concrete type
//! - **Selector builder** - an immutable, chainable builder for CSS selector
//!   strings that rejects misordered and repeated parts
//!   ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))

/// JSON serialization helpers.
pub mod json;
/// The rectangle value type.
pub mod rectangle;
/// Immutable CSS selector builder.
pub mod selector;

pub use rectangle::Rectangle;
pub use selector::{Combinator, SelectorBuilder, SelectorError, SelectorPart};

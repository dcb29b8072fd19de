//! Immutable CSS selector builder
//!
//! Builds selector strings such as `div#main.container:hover` one part at a
//! time. Every call returns a new [`SelectorBuilder`] and leaves the receiver
//! untouched, so a partially built selector can be reused as a common prefix:
//!
//! ```
//! use kata_objects::selector::SelectorBuilder;
//!
//! # fn main() -> Result<(), kata_objects::selector::SelectorError> {
//! let link = SelectorBuilder::new().element("a")?;
//! let focused = link.pseudo_class("focus")?;
//! let images = link.attr(r#"href$=".png""#)?;
//!
//! assert_eq!(focused.render(), "a:focus");
//! assert_eq!(images.render(), r#"a[href$=".png"]"#);
//! # Ok(())
//! # }
//! ```
//!
//! Ordering and duplicate violations are reported at the offending call, not
//! when the selector is rendered.

mod part;

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

pub use part::{Combinator, SelectorPart};

/// Rejections raised while appending a part to a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A part came after a part of a higher-ranked category.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, \
         attribute, pseudo-class, pseudo-element ({attempted} cannot follow {previous})"
    )]
    OutOfOrder {
        /// The category that was being appended.
        attempted: SelectorPart,
        /// The highest category already present.
        previous: SelectorPart,
    },

    /// An element, id or pseudo-element was appended a second time.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the \
         selector ({0} repeated)"
    )]
    DuplicatePart(SelectorPart),
}

/// A selector under construction.
///
/// The empty builder (`SelectorBuilder::new()` or `Default`) renders as an
/// empty string and accepts any part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Highest category appended so far, `None` for the empty builder.
    last: Option<SelectorPart>,
    text: String,
    singletons: BTreeSet<SelectorPart>,
}

impl SelectorBuilder {
    /// The empty starting point for every chain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            text: String::new(),
            singletons: BTreeSet::new(),
        }
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if an element is already present,
    /// [`SelectorError::OutOfOrder`] if any later category is.
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::Element, value)
    }

    /// Append an id selector, e.g. `#main`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if an id is already present,
    /// [`SelectorError::OutOfOrder`] if a class or later category is.
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::Id, value)
    }

    /// Append a class selector, e.g. `.container`. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if an attribute or later category is present.
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::Class, value)
    }

    /// Append an attribute selector. `value` is the text between the brackets,
    /// e.g. `href$=".png"`. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-class or later category is present.
    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::Attribute, value)
    }

    /// Append a pseudo-class, e.g. `:nth-of-type(even)`. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-element is present or the
    /// selector is a combination.
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::PseudoClass, value)
    }

    /// Append a pseudo-element, e.g. `::after`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if a pseudo-element is already present,
    /// [`SelectorError::OutOfOrder`] if the selector is a combination.
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SelectorPart::PseudoElement, value)
    }

    /// Join two selectors with a combinator: `left <combinator> right`.
    ///
    /// The descendant combinator is a space, so it renders with three spaces
    /// between the operands. The result is terminal: appending any part to it
    /// fails with [`SelectorError::OutOfOrder`], but it can itself be combined
    /// again.
    #[must_use]
    pub fn combine(left: &Self, combinator: Combinator, right: &Self) -> Self {
        Self {
            last: Some(SelectorPart::Combination),
            text: format!("{} {combinator} {}", left.text, right.text),
            singletons: BTreeSet::new(),
        }
    }

    /// The selector text accumulated so far.
    #[must_use]
    pub fn render(&self) -> &str {
        &self.text
    }

    /// The highest category present, `None` for the empty builder.
    #[must_use]
    pub const fn last_part(&self) -> Option<SelectorPart> {
        self.last
    }

    /// Whether this selector was produced by [`SelectorBuilder::combine`].
    #[must_use]
    pub fn is_combined(&self) -> bool {
        self.last == Some(SelectorPart::Combination)
    }

    fn append(&self, part: SelectorPart, value: &str) -> Result<Self, SelectorError> {
        if part.is_singleton() && self.singletons.contains(&part) {
            return Err(SelectorError::DuplicatePart(part));
        }

        if let Some(previous) = self.last.filter(|previous| previous.rank() > part.rank()) {
            return Err(SelectorError::OutOfOrder {
                attempted: part,
                previous,
            });
        }

        let mut singletons = self.singletons.clone();
        if part.is_singleton() {
            let _ = singletons.insert(part);
        }

        Ok(Self {
            last: Some(part),
            text: format!("{}{}", self.text, part.format(value)),
            singletons,
        })
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

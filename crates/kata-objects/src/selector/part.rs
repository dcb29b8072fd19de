//! Selector part categories and combinators.

use strum_macros::{Display, EnumIter, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// One category of selector fragment. Within a compound selector the
/// categories must appear in declaration order:
///
/// ```text
/// element#id.class[attr]:pseudo-class::pseudo-element
/// ```
///
/// `Combination` is the rank recorded on a selector produced by
/// [`SelectorBuilder::combine`](super::SelectorBuilder::combine). It outranks
/// every basic category, so nothing can be appended after it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum SelectorPart {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element = 1,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id = 2,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class = 3,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute = 4,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:focus`
    PseudoClass = 5,

    /// [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement = 6,

    /// Two selectors joined by a [`Combinator`].
    Combination = 7,
}

impl SelectorPart {
    /// Position of this category in the required order.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Element, id and pseudo-element may occur at most once per selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render a raw value with this category's marker.
    ///
    /// The value is not escaped or validated.
    #[must_use]
    pub fn format(self, value: &str) -> String {
        match self {
            Self::Element | Self::Combination => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Displays as its token; parses from either the token or the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(to_string = " ", serialize = "descendant")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    #[strum(to_string = ">", serialize = "child")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    #[strum(to_string = "+", serialize = "next-sibling")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    #[strum(to_string = "~", serialize = "subsequent-sibling")]
    SubsequentSibling,
}

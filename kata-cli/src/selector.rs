//! Selector chains given on the command line.
//!
//! A chain is a list of `kind=value` parts, optionally split by combinator
//! tokens:
//!
//! ```text
//! kata selector element=div id=main '>' element=p pseudo-class=first-child
//! ```
//!
//! Combinations fold left, which renders the same text as nesting to the
//! right.

use anyhow::{Context, Result, bail};
use kata_objects::selector::{Combinator, SelectorBuilder, SelectorPart};

/// Build and render a selector from command-line arguments.
pub fn build(args: &[String]) -> Result<String> {
    let mut combined: Option<(SelectorBuilder, Combinator)> = None;
    let mut current = SelectorBuilder::new();

    for arg in args {
        if let Ok(combinator) = arg.parse::<Combinator>() {
            if current == SelectorBuilder::new() {
                bail!("combinator '{combinator}' has no selector on its left");
            }
            let left = match combined.take() {
                Some((left, previous)) => SelectorBuilder::combine(&left, previous, &current),
                None => current,
            };
            combined = Some((left, combinator));
            current = SelectorBuilder::new();
            continue;
        }

        let (kind, value) = arg
            .split_once('=')
            .with_context(|| format!("expected kind=value or a combinator, got '{arg}'"))?;
        let part: SelectorPart = kind
            .parse()
            .with_context(|| format!("unknown selector part '{kind}'"))?;
        current = append(&current, part, value)?;
    }

    let selector = match combined {
        Some(_) if current == SelectorBuilder::new() => {
            bail!("combinator has no selector on its right")
        }
        Some((left, combinator)) => SelectorBuilder::combine(&left, combinator, &current),
        None => current,
    };

    Ok(selector.to_string())
}

fn append(builder: &SelectorBuilder, part: SelectorPart, value: &str) -> Result<SelectorBuilder> {
    let next = match part {
        SelectorPart::Element => builder.element(value),
        SelectorPart::Id => builder.id(value),
        SelectorPart::Class => builder.class(value),
        SelectorPart::Attribute => builder.attr(value),
        SelectorPart::PseudoClass => builder.pseudo_class(value),
        SelectorPart::PseudoElement => builder.pseudo_element(value),
        SelectorPart::Combination => bail!("use a combinator token to combine selectors"),
    };
    Ok(next?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn single_compound() {
        let rendered = build(&args(&["element=a", "attr=href$=\".png\"", "pseudo-class=focus"]));
        assert_eq!(rendered.unwrap(), "a[href$=\".png\"]:focus");
    }

    #[test]
    fn combinators_fold() {
        let rendered = build(&args(&["element=ul", ">", "element=li", "+", "class=x"]));
        assert_eq!(rendered.unwrap(), "ul > li + .x");
    }

    #[test]
    fn builder_errors_surface() {
        let err = build(&args(&["class=a", "element=div"])).unwrap_err();
        assert!(err.to_string().contains("following order"));
    }

    #[test]
    fn dangling_combinator() {
        assert!(build(&args(&["element=a", "~"])).is_err());
        assert!(build(&args(&["~", "element=a"])).is_err());
    }

    #[test]
    fn malformed_part() {
        assert!(build(&args(&["div"])).is_err());
        assert!(build(&args(&["tag=div"])).is_err());
    }
}

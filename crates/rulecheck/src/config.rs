//! Validator options.

use serde::{Deserialize, Serialize};

/// How a constraint spec is split into kind and argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColonSplit {
    /// The first `:` separates the kind from the whole remainder.
    ///
    /// `in:a:b,c` allows `a:b` and `c`.
    #[default]
    FirstColon,
    /// Every `:` is a separator.
    ///
    /// `len`/`min`/`max` with more than one colon are malformed, and `in`
    /// only sees the text between the first and second colon, so
    /// `in:a:b,c` allows just `a`.
    Strict,
}

/// Options for a [`Validator`](crate::Validator).
///
/// Embeddable in an application's own config:
///
/// ```
/// # use rulecheck::{ColonSplit, Options};
/// let options: Options = serde_json::from_str(r#"{ "colon-split": "strict" }"#).unwrap();
/// assert_eq!(options.colon_split, ColonSplit::Strict);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    pub colon_split: ColonSplit,
}

impl Options {
    pub fn with_colon_split(mut self, colon_split: ColonSplit) -> Self {
        self.colon_split = colon_split;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_splits_on_first_colon() {
        assert_eq!(Options::default().colon_split, ColonSplit::FirstColon);
    }

    #[test]
    fn builder_sets_split() {
        let options = Options::default().with_colon_split(ColonSplit::Strict);
        assert_eq!(options.colon_split, ColonSplit::Strict);
    }
}

//! Locale tags and bundle candidate chains.
//!
//! A [`Locale`] is a language with an optional region. Catalog loading walks
//! [`Locale::candidates`] from most to least specific, ending at the root
//! bundle, so `de-CH` resolves keys from `de-CH`, then `de`, then root.

use std::fmt;
use std::str::FromStr;

use crate::error::{I18nError, Result};

/// Language/region identifier used to select a catalog variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// The root locale: the base bundle every chain ends at.
    pub const ROOT: Self = Self {
        language: String::new(),
        region: None,
    };

    /// Parse a tag such as `"en"`, `"en-US"` or `"en_US"`.
    ///
    /// The empty string is the root locale.
    pub fn parse(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(Self::ROOT);
        }

        let invalid = || I18nError::InvalidLocale(tag.to_string());
        let mut parts = tag.split(['-', '_']);

        let language = parts.next().ok_or_else(invalid)?;
        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let region = match parts.next() {
            None => None,
            Some(r) if is_region(r) => Some(r.to_ascii_uppercase()),
            Some(_) => return Err(invalid()),
        };

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    /// Build a locale from already-validated parts.
    pub fn new(language: &str, region: Option<&str>) -> Result<Self> {
        match region {
            Some(r) => Self::parse(&format!("{language}-{r}")),
            None => Self::parse(language),
        }
    }

    /// Lowercase language subtag; empty for the root locale.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region subtag, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Whether this is the root locale.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// Lookup chain, most specific first, always ending at [`Locale::ROOT`].
    #[must_use]
    pub fn candidates(&self) -> Vec<Locale> {
        let mut chain = Vec::with_capacity(3);
        if self.region.is_some() {
            chain.push(self.clone());
        }
        if !self.is_root() {
            chain.push(Self {
                language: self.language.clone(),
                region: None,
            });
        }
        chain.push(Self::ROOT);
        chain
    }

    /// File-style suffix (`en_US`, `en`, or empty for root).
    #[must_use]
    pub fn bundle_suffix(&self) -> String {
        match &self.region {
            Some(region) => format!("{}_{region}", self.language),
            None => self.language.clone(),
        }
    }
}

fn is_region(s: &str) -> bool {
    (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
        || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_only() {
        let l = Locale::parse("EN").unwrap();
        assert_eq!(l.language(), "en");
        assert_eq!(l.region(), None);
        assert_eq!(l.to_string(), "en");
    }

    #[test]
    fn parses_both_separators() {
        assert_eq!(Locale::parse("en-us").unwrap(), Locale::parse("en_US").unwrap());
        assert_eq!(Locale::parse("es_419").unwrap().region(), Some("419"));
    }

    #[test]
    fn empty_is_root() {
        let l = Locale::parse("").unwrap();
        assert!(l.is_root());
        assert_eq!(l, Locale::ROOT);
        assert_eq!(l.candidates(), vec![Locale::ROOT]);
    }

    #[test]
    fn rejects_malformed_tags() {
        for tag in ["e", "en-USA1", "en-US-x", "1n", "en-U", "ｅｎ"] {
            assert!(
                matches!(Locale::parse(tag), Err(I18nError::InvalidLocale(_))),
                "{tag} should be rejected"
            );
        }
    }

    #[test]
    fn candidate_chain_order() {
        let l = Locale::parse("de-CH").unwrap();
        let chain: Vec<String> = l.candidates().iter().map(ToString::to_string).collect();
        assert_eq!(chain, vec!["de-CH", "de", ""]);
    }

    #[test]
    fn bundle_suffix_uses_underscore() {
        assert_eq!(Locale::parse("pt-br").unwrap().bundle_suffix(), "pt_BR");
        assert_eq!(Locale::parse("pt").unwrap().bundle_suffix(), "pt");
    }
}

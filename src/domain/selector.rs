//! The small selector dialect the site's behaviours need.
//!
//! Supported: type (`header`), id (`#about`), classes (`.nav-links`), one
//! attribute test (`section[id]`, `a[href="#top"]`, `a[href^="#"]`) per
//! compound, and the descendant combinator (`.nav-links a`). Attribute values
//! must be double-quoted and cannot contain whitespace.

use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Read access to one element, enough to test a compound selector against it.
pub trait ElementView {
    fn tag(&self) -> &str;
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeTest {
    Present(String),
    Equals(String, String),
    Prefix(String, String),
}

impl AttributeTest {
    fn matches<E: ElementView + ?Sized>(&self, element: &E) -> bool {
        match self {
            Self::Present(name) => element.attribute(name).is_some(),
            Self::Equals(name, value) => element.attribute(name) == Some(value.as_str()),
            Self::Prefix(name, prefix) => element
                .attribute(name)
                .is_some_and(|v| v.starts_with(prefix.as_str())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attribute: Option<AttributeTest>,
}

impl Compound {
    pub fn matches<E: ElementView + ?Sized>(&self, element: &E) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attribute
            .as_ref()
            .map_or(true, |test| test.matches(element))
    }
}

/// A chain of compounds joined by descendant combinators, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    compounds: Vec<Compound>,
}

fn compound_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"^(?P<tag>[A-Za-z][A-Za-z0-9-]*)?(?:#(?P<id>[A-Za-z0-9_-]+))?(?P<classes>(?:\.[A-Za-z0-9_-]+)*)(?:\[(?P<attr>[A-Za-z][A-Za-z0-9_-]*)(?:(?P<op>\^=|=)"(?P<value>[^"]*)")?\])?$"#,
        )
        .expect("compound selector pattern is valid")
    })
}

fn parse_compound(selector: &str, token: &str) -> Result<Compound> {
    let caps = compound_pattern()
        .captures(token)
        .ok_or_else(|| SiteError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("unsupported compound '{}'", token),
        })?;

    let attribute = caps.name("attr").map(|attr| {
        let name = attr.as_str().to_string();
        let value = caps
            .name("value")
            .map(|v| v.as_str().to_string())
            .unwrap_or_default();
        match caps.name("op").map(|op| op.as_str()) {
            Some("^=") => AttributeTest::Prefix(name, value),
            Some(_) => AttributeTest::Equals(name, value),
            None => AttributeTest::Present(name),
        }
    });

    let compound = Compound {
        tag: caps.name("tag").map(|m| m.as_str().to_ascii_lowercase()),
        id: caps.name("id").map(|m| m.as_str().to_string()),
        classes: caps
            .name("classes")
            .map(|m| {
                m.as_str()
                    .split('.')
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        attribute,
    };

    if compound == Compound::default() {
        return Err(SiteError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("empty compound '{}'", token),
        });
    }
    Ok(compound)
}

impl FromStr for Selector {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        let compounds = s
            .split_whitespace()
            .map(|token| parse_compound(s, token))
            .collect::<Result<Vec<_>>>()?;

        if compounds.is_empty() {
            return Err(SiteError::InvalidSelector {
                selector: s.to_string(),
                reason: "selector is empty".to_string(),
            });
        }

        Ok(Self {
            source: s.trim().to_string(),
            compounds,
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Selector {
    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    /// The compound the element itself must match.
    pub fn subject(&self) -> &Compound {
        // Parsing rejects empty selectors.
        &self.compounds[self.compounds.len() - 1]
    }

    /// Tests `element` with `ancestors` ordered nearest first.
    pub fn matches<'a, E, I>(&self, element: &E, ancestors: I) -> bool
    where
        E: ElementView + ?Sized + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        if !self.subject().matches(element) {
            return false;
        }

        let mut ancestors = ancestors.into_iter();
        for compound in self.compounds[..self.compounds.len() - 1].iter().rev() {
            if !ancestors.by_ref().any(|a| compound.matches(a)) {
                return false;
            }
        }
        true
    }
}

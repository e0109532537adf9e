//! Fully-qualified names - Global, stable identity for every graph entity
//!
//! Format: dot-separated segments, e.g. `com.example.hints` or
//! `com.example.AppComponent`. The same type names namespaces, classes,
//! annotations and scopes; identity is the full dotted string.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fully-qualified, dot-separated name.
///
/// Serves as the primary key for:
/// - Namespaces
/// - Class symbols (declaration-level and IR-level)
/// - Annotations and scope identities
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FqName(String);

impl FqName {
    /// Parse a dotted name, validating that no segment is empty
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidName("name must not be empty".to_string()));
        }
        if name.split('.').any(|segment| segment.is_empty()) {
            return Err(Error::InvalidName(format!(
                "empty segment in name: {name}"
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// The full dotted string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the dot-separated segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The last segment (e.g. `AppComponent` for `com.example.AppComponent`)
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// The enclosing name, or `None` for a single-segment name
    pub fn parent(&self) -> Option<FqName> {
        self.0.rsplit_once('.').map(|(parent, _)| Self(parent.to_string()))
    }

    /// Append a segment, producing a child name
    pub fn child(&self, segment: &str) -> Result<FqName> {
        if segment.is_empty() || segment.contains('.') {
            return Err(Error::InvalidName(format!(
                "invalid child segment: {segment:?}"
            )));
        }
        Ok(Self(format!("{}.{}", self.0, segment)))
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FqName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for FqName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FqName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FqName::parse(&s).map_err(serde::de::Error::custom)
    }
}

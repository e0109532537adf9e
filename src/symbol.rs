//! Symbol model - read-only view of the host's compiled declarations
//!
//! The host compilation exposes four declaration kinds:
//! - `Namespace`: package, module
//! - `Class`: class, interface, object
//! - `Callable`: function, constructor
//! - `Value`: property, field, constant
//!
//! Hint markers are encoded as `Value` declarations, so the scanner only
//! ever inspects those; the other kinds exist so hosts can expose their
//! full member scopes without pre-filtering.

use crate::name::FqName;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declaration kinds exposed by the host member scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// Package or module - the organizational unit
    Namespace,
    /// Class, interface, object
    Class,
    /// Function, method, constructor
    Callable,
    /// Property, field, constant - hint markers are encoded as these
    Value,
}

impl DeclarationKind {
    /// Get the string representation of the declaration kind
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Namespace => "namespace",
            DeclarationKind::Class => "class",
            DeclarationKind::Callable => "callable",
            DeclarationKind::Value => "value",
        }
    }

    /// Get all declaration kinds
    pub fn all() -> &'static [DeclarationKind] {
        &[
            DeclarationKind::Namespace,
            DeclarationKind::Class,
            DeclarationKind::Callable,
            DeclarationKind::Value,
        ]
    }
}

impl FromStr for DeclarationKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "namespace" | "ns" | "module" | "package" => Ok(DeclarationKind::Namespace),
            "class" | "interface" | "object" => Ok(DeclarationKind::Class),
            "callable" | "function" | "fn" | "constructor" => Ok(DeclarationKind::Callable),
            "value" | "property" | "field" | "const" => Ok(DeclarationKind::Value),
            _ => Err(crate::Error::InvalidName(format!(
                "Unknown declaration kind: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The declared type of a value declaration.
///
/// Hint markers are emitted as values typed `KClass<SomeClass>`-style: a
/// type constructor applied to a single class-denoting argument. The
/// scanner only reads the argument; foreign values may carry no argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Fully-qualified name of the type constructor
    pub constructor: FqName,
    /// The class denoted by the single type argument, if any
    pub argument: Option<FqName>,
}

impl TypeRef {
    /// A type with a single class-denoting argument
    pub fn applied(constructor: FqName, argument: FqName) -> Self {
        Self {
            constructor,
            argument: Some(argument),
        }
    }

    /// A bare type with no argument
    pub fn bare(constructor: FqName) -> Self {
        Self {
            constructor,
            argument: None,
        }
    }
}

/// A named, kinded member declaration within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Simple name within the owning namespace
    pub name: String,
    /// The kind of declaration
    pub kind: DeclarationKind,
    /// The declared type
    pub type_ref: TypeRef,
}

impl Declaration {
    /// Create a value declaration (the shape hint markers take)
    pub fn value(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind: DeclarationKind::Value,
            type_ref,
        }
    }

    /// Create a declaration of an arbitrary kind
    pub fn new(name: impl Into<String>, kind: DeclarationKind, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind,
            type_ref,
        }
    }
}

/// An annotation applied to a class, optionally parameterized by a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Fully-qualified name of the annotation class
    pub fq_name: FqName,
    /// The scope argument, for scope-parameterized annotations
    pub scope: Option<FqName>,
}

impl Annotation {
    /// An annotation parameterized by a scope identity
    pub fn scoped(fq_name: FqName, scope: FqName) -> Self {
        Self {
            fq_name,
            scope: Some(scope),
        }
    }

    /// An annotation without a scope argument
    pub fn plain(fq_name: FqName) -> Self {
        Self {
            fq_name,
            scope: None,
        }
    }
}

/// Declaration-level view of a class symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSymbol {
    /// Fully-qualified name, the class's identity
    pub fq_name: FqName,
    /// Annotations present on the class at scan time
    pub annotations: Vec<Annotation>,
}

impl ClassSymbol {
    /// Create a class symbol with no annotations
    pub fn new(fq_name: FqName) -> Self {
        Self {
            fq_name,
            annotations: Vec::new(),
        }
    }

    /// Add an annotation
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Look up an annotation by name and scope argument.
    ///
    /// Returns `None` when the class carries no matching annotation, which
    /// the scanner treats as evidence of a stale hint rather than an error.
    pub fn annotation_or_none(&self, annotation: &FqName, scope: &FqName) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|a| &a.fq_name == annotation && a.scope.as_ref() == Some(scope))
    }
}

/// Intermediate-representation view of a class symbol.
///
/// The host guarantees every class visible to the declaration view also
/// exists here; the scanner treats a missing entry as a fatal
/// inconsistency between the two views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrClassSymbol {
    /// Fully-qualified name, shared with the declaration-level view
    pub fq_name: FqName,
}

impl IrClassSymbol {
    pub fn new(fq_name: FqName) -> Self {
        Self { fq_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fq(s: &str) -> FqName {
        FqName::parse(s).unwrap()
    }

    #[test]
    fn test_declaration_kind_roundtrip() {
        for kind in DeclarationKind::all() {
            let s = kind.as_str();
            let parsed: DeclarationKind = s.parse().unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn test_declaration_kind_aliases() {
        assert_eq!(
            DeclarationKind::from_str("property").unwrap(),
            DeclarationKind::Value
        );
        assert_eq!(
            DeclarationKind::from_str("interface").unwrap(),
            DeclarationKind::Class
        );
        assert_eq!(
            DeclarationKind::from_str("package").unwrap(),
            DeclarationKind::Namespace
        );
        assert!(DeclarationKind::from_str("widget").is_err());
    }

    #[test]
    fn test_annotation_lookup() {
        let class = ClassSymbol::new(fq("com.example.Foo"))
            .with_annotation(Annotation::scoped(fq("com.example.ContributesTo"), fq("com.example.AppScope")));

        assert!(class
            .annotation_or_none(&fq("com.example.ContributesTo"), &fq("com.example.AppScope"))
            .is_some());
        // Same annotation, different scope argument
        assert!(class
            .annotation_or_none(&fq("com.example.ContributesTo"), &fq("com.example.UserScope"))
            .is_none());
        // Different annotation entirely
        assert!(class
            .annotation_or_none(&fq("com.example.Module"), &fq("com.example.AppScope"))
            .is_none());
    }

    #[test]
    fn test_unscoped_annotation_never_matches_scoped_lookup() {
        let class = ClassSymbol::new(fq("com.example.Foo"))
            .with_annotation(Annotation::plain(fq("com.example.ContributesTo")));

        assert!(class
            .annotation_or_none(&fq("com.example.ContributesTo"), &fq("com.example.AppScope"))
            .is_none());
    }
}

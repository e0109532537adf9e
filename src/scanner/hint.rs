//! Hint Decoder - reassembles generator-emitted marker declarations
//!
//! The generator emits one fixed-size group of value declarations per
//! contributed class: a `_reference` marker denoting the class and a
//! `_scope` marker denoting its target scope, sharing a common base name.
//! The decoder groups a namespace's value declarations by that base name
//! and keeps only groups whose size exactly matches the suffix count;
//! anything else is a partially-generated or foreign group and is dropped
//! without error.

use crate::graph::ModuleGraph;
use crate::name::FqName;
use crate::symbol::{ClassSymbol, Declaration, DeclarationKind};
use std::cell::OnceCell;
use std::collections::HashMap;

/// Marker suffix for the contributed-class role
pub const REFERENCE_SUFFIX: &str = "_reference";
/// Marker suffix for the target-scope role
pub const SCOPE_SUFFIX: &str = "_scope";

/// Every role suffix a complete hint group carries, in no particular order.
/// Suffixes are literal, case-sensitive tokens fixed by the generator.
pub const HINT_SUFFIXES: [&str; 2] = [REFERENCE_SUFFIX, SCOPE_SUFFIX];

/// Value-kind member declarations of one namespace, read verbatim.
///
/// No name or shape filtering happens here; that is the decoder's job,
/// which keeps the group-arity invariant in one place.
pub fn value_members<'g>(
    graph: &'g ModuleGraph,
    namespace: &FqName,
) -> impl Iterator<Item = &'g Declaration> {
    graph
        .members(namespace)
        .iter()
        .filter(|d| d.kind == DeclarationKind::Value)
}

/// Decode one namespace's harvested declarations into hints.
///
/// Grouping is local to the namespace, so identical base names in
/// different namespaces produce independent hints.
pub fn decode_hints<'g>(
    graph: &'g ModuleGraph,
    declarations: impl Iterator<Item = &'g Declaration>,
) -> impl Iterator<Item = ContributedHint<'g>> {
    let mut groups: HashMap<&'g str, Vec<&'g Declaration>> = HashMap::new();
    for declaration in declarations {
        // Declarations without a recognized suffix keep their full name as
        // the key; those singleton groups fail the arity check below.
        let base = HINT_SUFFIXES
            .iter()
            .find_map(|suffix| declaration.name.strip_suffix(suffix))
            .unwrap_or(&declaration.name);
        groups.entry(base).or_default().push(declaration);
    }

    groups.into_values().filter_map(move |declarations| {
        if declarations.len() == HINT_SUFFIXES.len() {
            Some(ContributedHint::new(graph, declarations))
        } else {
            tracing::debug!(
                group = %declarations[0].name,
                size = declarations.len(),
                "dropping incomplete hint group"
            );
            None
        }
    })
}

/// A decoded hint: one contributed-class-to-scope binding.
///
/// Role resolution is lazy and memoized so that hints rejected by the
/// scope filter never pay for decoding their reference's type argument.
pub struct ContributedHint<'g> {
    graph: &'g ModuleGraph,
    declarations: Vec<&'g Declaration>,
    reference: OnceCell<Option<&'g ClassSymbol>>,
    scope: OnceCell<Option<&'g ClassSymbol>>,
}

impl<'g> ContributedHint<'g> {
    fn new(graph: &'g ModuleGraph, declarations: Vec<&'g Declaration>) -> Self {
        Self {
            graph,
            declarations,
            reference: OnceCell::new(),
            scope: OnceCell::new(),
        }
    }

    /// The contributed class, if the reference marker decodes to a known class
    pub fn reference(&self) -> Option<&'g ClassSymbol> {
        *self
            .reference
            .get_or_init(|| self.class_by_suffix(REFERENCE_SUFFIX))
    }

    /// The target scope, if the scope marker decodes to a known class
    pub fn scope(&self) -> Option<&'g ClassSymbol> {
        *self.scope.get_or_init(|| self.class_by_suffix(SCOPE_SUFFIX))
    }

    fn class_by_suffix(&self, suffix: &str) -> Option<&'g ClassSymbol> {
        let declaration = self
            .declarations
            .iter()
            .find(|d| d.name.ends_with(suffix))?;
        let argument = declaration.type_ref.argument.as_ref()?;
        self.graph.class(argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::TypeRef;

    fn fq(s: &str) -> FqName {
        FqName::parse(s).unwrap()
    }

    fn marker(name: &str, target: &str) -> Declaration {
        Declaration::value(
            name,
            TypeRef::applied(fq("kotlin.reflect.KClass"), fq(target)),
        )
    }

    fn graph_with_classes(classes: &[&str]) -> ModuleGraph {
        let mut graph = ModuleGraph::new();
        for class in classes {
            graph.add_class(ClassSymbol::new(fq(class)));
        }
        graph
    }

    fn decode<'g>(graph: &'g ModuleGraph, decls: &'g [Declaration]) -> Vec<ContributedHint<'g>> {
        decode_hints(graph, decls.iter()).collect()
    }

    #[test]
    fn test_complete_group_decodes() {
        let graph = graph_with_classes(&["app.Foo", "app.AppScope"]);
        let decls = vec![
            marker("foo_reference", "app.Foo"),
            marker("foo_scope", "app.AppScope"),
        ];

        let hints = decode(&graph, &decls);
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].reference().unwrap().fq_name, fq("app.Foo"));
        assert_eq!(hints[0].scope().unwrap().fq_name, fq("app.AppScope"));
    }

    #[test]
    fn test_incomplete_group_is_dropped() {
        let graph = graph_with_classes(&["app.Bar"]);
        let decls = vec![marker("bar_reference", "app.Bar")];

        assert!(decode(&graph, &decls).is_empty());
    }

    #[test]
    fn test_oversized_group_is_dropped() {
        let graph = graph_with_classes(&["app.Foo", "app.AppScope"]);
        // A foreign declaration coincidentally sharing the base name
        let decls = vec![
            marker("foo_reference", "app.Foo"),
            marker("foo_scope", "app.AppScope"),
            marker("foo_reference", "app.Foo"),
        ];

        assert!(decode(&graph, &decls).is_empty());
    }

    #[test]
    fn test_unrecognized_suffix_is_not_a_group_member() {
        let graph = graph_with_classes(&["app.Foo", "app.AppScope"]);
        // "foo_marker" keeps its full name as key and stays a singleton;
        // the real group still decodes.
        let decls = vec![
            marker("foo_reference", "app.Foo"),
            marker("foo_scope", "app.AppScope"),
            marker("foo_marker", "app.Foo"),
        ];

        let hints = decode(&graph, &decls);
        assert_eq!(hints.len(), 1);
    }

    #[test]
    fn test_unknown_class_resolves_to_none() {
        let graph = graph_with_classes(&["app.AppScope"]);
        let decls = vec![
            marker("foo_reference", "app.Missing"),
            marker("foo_scope", "app.AppScope"),
        ];

        let hints = decode(&graph, &decls);
        assert_eq!(hints.len(), 1);
        assert!(hints[0].reference().is_none());
        assert!(hints[0].scope().is_some());
    }

    #[test]
    fn test_marker_without_type_argument_resolves_to_none() {
        let graph = graph_with_classes(&["app.AppScope"]);
        let decls = vec![
            Declaration::value("foo_reference", TypeRef::bare(fq("kotlin.String"))),
            marker("foo_scope", "app.AppScope"),
        ];

        let hints = decode(&graph, &decls);
        assert_eq!(hints.len(), 1);
        assert!(hints[0].reference().is_none());
    }
}

//! Namespace Walker - flattens the namespace tree under a root
//!
//! Expansion is frontier-by-frontier: each step replaces the current set
//! of namespaces with the union of their direct children, stopping when a
//! step produces no new namespaces. The graph is finite and acyclic, so
//! the walk always terminates.

use crate::graph::ModuleGraph;
use crate::name::FqName;

/// Lazily enumerate every namespace strictly below `root`.
///
/// A root that is not visible in the graph yields nothing; absence of a
/// namespace is the normal "no contributions present" case, not an error.
/// No ordering is guaranteed beyond completeness.
pub fn walk_namespaces<'g>(
    graph: &'g ModuleGraph,
    root: &FqName,
) -> impl Iterator<Item = &'g FqName> + 'g {
    let first: Vec<&'g FqName> = graph.sub_namespaces(root).iter().collect();

    std::iter::successors(non_empty(first), |frontier| {
        let next: Vec<&'g FqName> = frontier
            .iter()
            .flat_map(|ns| graph.sub_namespaces(ns))
            .collect();
        non_empty(next)
    })
    .flatten()
}

fn non_empty<T>(frontier: Vec<T>) -> Option<Vec<T>> {
    if frontier.is_empty() {
        None
    } else {
        Some(frontier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fq(s: &str) -> FqName {
        FqName::parse(s).unwrap()
    }

    fn names(graph: &ModuleGraph, root: &str) -> HashSet<String> {
        walk_namespaces(graph, &fq(root))
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_walk_reaches_every_depth() {
        let mut graph = ModuleGraph::new();
        graph.add_namespace(fq("root.a.x"));
        graph.add_namespace(fq("root.a.y"));
        graph.add_namespace(fq("root.b"));

        let found = names(&graph, "root");
        let expected: HashSet<String> = ["root.a", "root.a.x", "root.a.y", "root.b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let graph = ModuleGraph::new();
        assert!(names(&graph, "nowhere").is_empty());
    }

    #[test]
    fn test_leaf_root_yields_nothing() {
        let mut graph = ModuleGraph::new();
        graph.add_namespace(fq("root.leaf"));
        assert!(names(&graph, "root.leaf").is_empty());
    }

    #[test]
    fn test_walk_is_deterministic_on_static_graph() {
        let mut graph = ModuleGraph::new();
        graph.add_namespace(fq("root.a.b.c"));
        graph.add_namespace(fq("root.d"));

        assert_eq!(names(&graph, "root"), names(&graph, "root"));
    }
}

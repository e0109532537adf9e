//! Class Scanner - contributed-class discovery pipeline
//!
//! Walker → Harvester → Decoder → Filter → Resolver, as one lazy iterator
//! chain over the read-only host graph. A caller that stops pulling after
//! N results causes no further namespace or declaration work.

pub mod hint;
pub mod walker;

pub use hint::{ContributedHint, HINT_SUFFIXES, REFERENCE_SUFFIX, SCOPE_SUFFIX};
pub use walker::walk_namespaces;

use crate::graph::ModuleGraph;
use crate::name::FqName;
use crate::symbol::{ClassSymbol, IrClassSymbol};
use crate::{Error, Result};

/// Scans a compiled module graph for classes contributed to a scope.
#[derive(Debug, Default)]
pub struct ClassScanner;

impl ClassScanner {
    pub fn new() -> Self {
        Self
    }

    /// Find every class contributed to `scope` under the `package` root,
    /// as declaration-level symbols.
    ///
    /// Results are yielded lazily. Each one is guaranteed to come from a
    /// complete hint group whose scope marker resolves to `scope`, and to
    /// still carry `annotation` parameterized by `scope` at scan time.
    pub fn find_contributed_classes<'g>(
        &self,
        graph: &'g ModuleGraph,
        package: &FqName,
        annotation: &FqName,
        scope: &FqName,
    ) -> impl Iterator<Item = &'g ClassSymbol> + 'g {
        let scope_filter = scope.clone();
        let annotation = annotation.clone();
        let scope = scope.clone();

        walk_namespaces(graph, package)
            .flat_map(move |namespace| {
                hint::decode_hints(graph, hint::value_members(graph, namespace))
            })
            .filter(move |candidate| {
                // The scope must match what we're looking for. A scope
                // marker that fails to resolve behaves as a mismatch.
                candidate
                    .scope()
                    .is_some_and(|s| s.fq_name == scope_filter)
            })
            .filter_map(|candidate| candidate.reference())
            .filter(move |reference| {
                // Check that the annotation really is present. It should
                // always be the case, but it's a safety net in case the
                // generated markers are out of sync.
                let present = reference.annotation_or_none(&annotation, &scope).is_some();
                if !present {
                    tracing::debug!(
                        class = %reference.fq_name,
                        "dropping stale hint: annotation re-check failed"
                    );
                }
                present
            })
    }

    /// Find every class contributed to `scope` under the `package` root,
    /// as intermediate-representation symbols.
    ///
    /// Runs the declaration-level scan and translates each result through
    /// the host's IR table. A missing IR entry for a class the scan just
    /// proved exists means the host graph's two views disagree, which is
    /// a fatal inconsistency propagated to the caller.
    pub fn find_contributed_ir_classes<'g>(
        &self,
        graph: &'g ModuleGraph,
        package: &FqName,
        annotation: &FqName,
        scope: &FqName,
    ) -> impl Iterator<Item = Result<&'g IrClassSymbol>> + 'g {
        self.find_contributed_classes(graph, package, annotation, scope)
            .map(move |class| {
                graph
                    .ir_class(&class.fq_name)
                    .ok_or_else(|| Error::IrClassNotFound(class.fq_name.clone()))
            })
    }
}

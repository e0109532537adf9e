//! Module Graph - read-only view of the host's compiled symbol graph
//!
//! The graph is the output of a prior, already-completed compilation
//! phase: namespaces with member declarations, a declaration-level class
//! table, and an intermediate-representation class table. Hosts (and
//! tests) build it with the `add_*` methods; the scanner only reads it.

use crate::name::FqName;
use crate::symbol::{ClassSymbol, Declaration, DeclarationKind, IrClassSymbol};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// In-memory compiled-module symbol graph.
///
/// Immutable for the duration of a scan; the scanner never mutates it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ModuleGraph {
    /// Member declarations per namespace
    namespaces: HashMap<FqName, Vec<Declaration>>,
    /// Direct child namespaces per namespace
    children: HashMap<FqName, Vec<FqName>>,
    /// Declaration-level class table
    classes: HashMap<FqName, ClassSymbol>,
    /// Intermediate-representation class table
    ir_classes: HashMap<FqName, IrClassSymbol>,
}

impl ModuleGraph {
    /// Create a new empty module graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a namespace, creating and linking all its ancestors
    pub fn add_namespace(&mut self, fq_name: FqName) {
        if self.namespaces.contains_key(&fq_name) {
            return;
        }
        self.namespaces.insert(fq_name.clone(), Vec::new());

        let mut current = fq_name;
        while let Some(parent) = current.parent() {
            let siblings = self.children.entry(parent.clone()).or_default();
            if !siblings.contains(&current) {
                siblings.push(current.clone());
            }
            self.namespaces.entry(parent.clone()).or_default();
            current = parent;
        }
    }

    /// Add a member declaration to a namespace, registering it if needed
    pub fn add_member(&mut self, namespace: FqName, declaration: Declaration) {
        self.add_namespace(namespace.clone());
        self.namespaces
            .entry(namespace)
            .or_default()
            .push(declaration);
    }

    /// Add a class to the declaration-level table
    pub fn add_class(&mut self, class: ClassSymbol) {
        self.classes.insert(class.fq_name.clone(), class);
    }

    /// Add a class to the intermediate-representation table
    pub fn add_ir_class(&mut self, class: IrClassSymbol) {
        self.ir_classes.insert(class.fq_name.clone(), class);
    }

    /// Whether the namespace is visible in this graph
    pub fn has_namespace(&self, fq_name: &FqName) -> bool {
        self.namespaces.contains_key(fq_name)
    }

    /// Member declarations of a namespace (empty if unknown)
    pub fn members(&self, fq_name: &FqName) -> &[Declaration] {
        self.namespaces
            .get(fq_name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Direct child namespaces (empty if unknown or leaf)
    pub fn sub_namespaces(&self, fq_name: &FqName) -> &[FqName] {
        self.children
            .get(fq_name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a class in the declaration-level table
    pub fn class(&self, fq_name: &FqName) -> Option<&ClassSymbol> {
        self.classes.get(fq_name)
    }

    /// Look up a class in the intermediate-representation table
    pub fn ir_class(&self, fq_name: &FqName) -> Option<&IrClassSymbol> {
        self.ir_classes.get(fq_name)
    }

    /// Load a graph from a JSON dump produced by a host
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let graph = serde_json::from_str(&contents)?;
        Ok(graph)
    }

    /// Write the graph as a JSON dump
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get statistics about the graph
    pub fn stats(&self) -> GraphStats {
        let total_declarations: usize = self.namespaces.values().map(|v| v.len()).sum();
        let value_declarations = self
            .namespaces
            .values()
            .flat_map(|v| v.iter())
            .filter(|d| d.kind == DeclarationKind::Value)
            .count();

        GraphStats {
            namespaces: self.namespaces.len(),
            declarations: total_declarations,
            value_declarations,
            classes: self.classes.len(),
            ir_classes: self.ir_classes.len(),
        }
    }
}

/// Statistics about a module graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub namespaces: usize,
    pub declarations: usize,
    pub value_declarations: usize,
    pub classes: usize,
    pub ir_classes: usize,
}

impl std::fmt::Display for GraphStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Module Graph Statistics:")?;
        writeln!(f, "  Namespaces: {}", self.namespaces)?;
        writeln!(
            f,
            "  Declarations: {} (values: {})",
            self.declarations, self.value_declarations
        )?;
        writeln!(
            f,
            "  Classes: {} (IR: {})",
            self.classes, self.ir_classes
        )
    }
}

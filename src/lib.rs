//! # Hintscan - Contributed-Class Discovery Substrate
//!
//! Reflection-free symbol discovery over compiled module graphs.
//!
//! Hintscan provides:
//! - Fully-qualified name identities for namespaces, classes and annotations
//! - A read-only host module graph (namespaces, declarations, class tables)
//! - A lazy scanning pipeline that recovers generator-emitted hint markers
//!   and resolves them into contributed class symbols per scope
//! - Dual output views: declaration-level and intermediate-representation

pub mod name;
pub mod symbol;
pub mod graph;
pub mod scanner;
pub mod config;

// Re-exports for convenient access
pub use name::FqName;
pub use symbol::{Annotation, ClassSymbol, Declaration, DeclarationKind, IrClassSymbol, TypeRef};
pub use graph::ModuleGraph;
pub use scanner::ClassScanner;

/// Result type alias for Hintscan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Hintscan operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// The declaration-level scan proved the class exists, but the host's
    /// intermediate representation has no entry for it. The two views are
    /// required to agree on the visible symbol set.
    #[error("IR class not found for {0}: declaration and IR views disagree")]
    IrClassNotFound(name::FqName),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Graph decode error: {0}")]
    GraphDecode(#[from] serde_json::Error),
}

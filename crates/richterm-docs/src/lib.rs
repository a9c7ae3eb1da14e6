// Rust guideline compliant 2026-10-17

//! richterm Documentation Directive
//!
//! This crate embeds command captures into reStructuredText sources:
//! - The `.. richterm::` directive and its options
//! - Expansion of every directive in a document into raw SVG blocks

pub mod directive;
pub mod document;
pub mod error;

pub use directive::{Directive, DirectiveOptions, OutputFormat, RenderedBlock};
pub use document::expand_document;
pub use error::{DirectiveError, DocumentError};

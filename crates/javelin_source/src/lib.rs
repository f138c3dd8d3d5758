//! Source text and offsets for problem reporting.
//!
//! [`SourceFile`] holds the character buffer of a compilation unit together
//! with its line index; [`Span`] is the inclusive offset range recorded by
//! the parser on every AST node.

#![warn(missing_docs)]

pub mod source_file;
pub mod span;

pub use source_file::SourceFile;
pub use span::Span;

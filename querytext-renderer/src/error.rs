//! Error types for querytext-renderer.
//!
//! Two families live here. [`DirectiveFault`] describes a broken contract
//! between a node and the interpreter; it is never returned, only raised as a
//! panic message. [`RenderError`] covers recoverable read-out failures.

use std::string::FromUtf8Error;

use thiserror::Error;

use crate::directive::Directive;

/// A programming error in a node's `format` implementation.
///
/// Raised by [`TrackedBuffer::interpret`](crate::TrackedBuffer::interpret)
/// as a panic carrying this value's `Display` text. Offsets are byte
/// positions into the template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveFault {
    /// `%` followed by a character outside the directive set.
    #[error("unsupported directive '%{marker}' at template offset {offset}")]
    UnsupportedDirective { marker: char, offset: usize },

    /// `%` as the final template character.
    #[error("dangling '%' at end of template (offset {offset})")]
    DanglingMarker { offset: usize },

    /// Argument variant does not satisfy the marker's expectation.
    #[error("unexpected TrackedBuffer type {found} for {directive} (expected {expected})")]
    TypeMismatch {
        directive: Directive,
        expected: &'static str,
        found: String,
    },

    /// More markers than arguments.
    #[error("missing argument #{index} for {directive}")]
    MissingArgument { index: usize, directive: Directive },
}

/// All recoverable errors that can arise when reading rendered output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Raw-text arguments produced bytes that are not valid UTF-8.
    #[error("rendered output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

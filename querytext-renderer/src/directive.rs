//! The directive set understood by the interpreter.
//!
//! | Marker | Directive        | Accepts            |
//! |--------|------------------|--------------------|
//! | `%c`   | `CharLiteral`    | `Byte`, `Char`     |
//! | `%s`   | `RawText`        | `Bytes`, `Str`     |
//! | `%v`   | `SubNode`        | `Node`             |
//! | `%a`   | `TrackedLiteral` | `Str`              |
//!
//! Everything outside a marker is copied verbatim; that literal copy is the
//! fifth, implicit directive.

use std::fmt;

/// Byte that introduces a directive marker in a template.
pub const MARKER_PREFIX: u8 = b'%';

/// One of the four explicit directive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    CharLiteral,
    RawText,
    SubNode,
    TrackedLiteral,
}

impl Directive {
    /// All directives in a stable order.
    pub fn all() -> &'static [Directive] {
        &[
            Directive::CharLiteral,
            Directive::RawText,
            Directive::SubNode,
            Directive::TrackedLiteral,
        ]
    }

    /// Resolve the character following `%`.
    pub fn from_marker(marker: char) -> Option<Directive> {
        match marker {
            'c' => Some(Directive::CharLiteral),
            's' => Some(Directive::RawText),
            'v' => Some(Directive::SubNode),
            'a' => Some(Directive::TrackedLiteral),
            _ => None,
        }
    }

    pub fn marker(&self) -> char {
        match self {
            Directive::CharLiteral => 'c',
            Directive::RawText => 's',
            Directive::SubNode => 'v',
            Directive::TrackedLiteral => 'a',
        }
    }

    /// Human-readable list of accepted argument types, used in fault messages.
    pub fn expects(&self) -> &'static str {
        match self {
            Directive::CharLiteral => "u8 or char",
            Directive::RawText => "&[u8] or &str",
            Directive::SubNode => "a Node",
            Directive::TrackedLiteral => "&str",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.marker())
    }
}

//! [`TrackedBuffer`]: the output accumulator and directive interpreter.

use std::fmt;

use querytext_core::{RenderConfig, Substitution};

use crate::arg::Arg;
use crate::directive::{Directive, MARKER_PREFIX};
use crate::error::{DirectiveFault, RenderError};
use crate::node::Node;

// ---------------------------------------------------------------------------
// TrackedBuffer
// ---------------------------------------------------------------------------

/// Rebuilds query text from an AST.
///
/// The accumulator is append-only and owned exclusively by the buffer; nodes
/// write to it only through [`interpret`](Self::interpret). When tracking is
/// enabled, every tracked literal (`%a`) also records a [`Substitution`].
///
/// Not synchronized: share across threads only behind external locking.
#[derive(Debug, Default)]
pub struct TrackedBuffer {
    buf: Vec<u8>,
    substitutions: Option<Vec<Substitution>>,
}

impl TrackedBuffer {
    /// An empty buffer with tracking off.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty buffer that records where tracked literals land.
    pub fn with_tracking() -> Self {
        Self {
            buf: Vec::new(),
            substitutions: Some(Vec::new()),
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        if config.track_substitutions {
            Self::with_tracking()
        } else {
            Self::new()
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.substitutions.is_some()
    }

    /// Render a whole node. Same as `interpret("%v", &[Arg::Node(node)])`.
    pub fn write_node(&mut self, node: &dyn Node) -> &mut Self {
        self.interpret("%v", &[Arg::Node(node)]);
        self
    }

    /// Interpret `template` against `args`.
    ///
    /// Literal spans are copied verbatim. Each `%`-marker consumes the next
    /// argument, in marker order. Surplus arguments are ignored.
    ///
    /// # Panics
    ///
    /// On an unsupported or dangling marker, a missing argument, or an
    /// argument whose variant the marker does not accept. The buffer's
    /// contents are unspecified afterwards.
    #[track_caller]
    pub fn interpret(&mut self, template: &str, args: &[Arg<'_>]) {
        tracing::trace!(template, args = args.len(), "interpret");

        let bytes = template.as_bytes();
        let end = bytes.len();
        let mut fieldnum = 0;
        let mut i = 0;
        while i < end {
            let lasti = i;
            while i < end && bytes[i] != MARKER_PREFIX {
                i += 1;
            }
            if i > lasti {
                self.buf.extend_from_slice(&bytes[lasti..i]);
            }
            if i >= end {
                break;
            }

            let offset = i;
            i += 1; // '%'
            let Some(marker) = template[i..].chars().next() else {
                fault(DirectiveFault::DanglingMarker { offset })
            };
            let Some(directive) = Directive::from_marker(marker) else {
                fault(DirectiveFault::UnsupportedDirective { marker, offset })
            };
            let Some(arg) = args.get(fieldnum).copied() else {
                fault(DirectiveFault::MissingArgument {
                    index: fieldnum,
                    directive,
                })
            };
            self.dispatch(directive, arg);
            fieldnum += 1;
            i += marker.len_utf8();
        }
    }

    #[track_caller]
    fn dispatch(&mut self, directive: Directive, arg: Arg<'_>) {
        match (directive, arg) {
            (Directive::CharLiteral, Arg::Byte(b)) => self.buf.push(b),
            (Directive::CharLiteral, Arg::Char(c)) => {
                let mut utf8 = [0u8; 4];
                self.buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
            (Directive::RawText, Arg::Bytes(b)) => self.buf.extend_from_slice(b),
            (Directive::RawText, Arg::Str(s)) => self.buf.extend_from_slice(s.as_bytes()),
            (Directive::SubNode, Arg::Node(node)) => node.format(self),
            (Directive::TrackedLiteral, Arg::Str(s)) => self.write_tracked(s),
            (directive, arg) => fault(DirectiveFault::TypeMismatch {
                directive,
                expected: directive.expects(),
                found: arg.type_name(),
            }),
        }
    }

    fn write_tracked(&mut self, value: &str) {
        let offset = self.buf.len();
        self.buf.extend_from_slice(value.as_bytes());
        if let Some(substitutions) = self.substitutions.as_mut() {
            tracing::debug!(offset, len = value.len(), "tracked literal");
            substitutions.push(Substitution::new(offset, value.len()));
        }
    }

    // -----------------------------------------------------------------------
    // Read-out
    // -----------------------------------------------------------------------

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Tracked literal positions in append order. Empty when tracking is off.
    pub fn substitutions(&self) -> &[Substitution] {
        self.substitutions.as_deref().unwrap_or(&[])
    }

    /// The rendered bytes covered by `sub`, or an empty slice if it lies
    /// outside the accumulator.
    pub fn substitution_text(&self, sub: &Substitution) -> &[u8] {
        self.buf.get(sub.range()).unwrap_or(&[])
    }

    /// Drop all text and tracked positions, keeping the tracking mode.
    pub fn clear(&mut self) {
        self.buf.clear();
        if let Some(substitutions) = self.substitutions.as_mut() {
            substitutions.clear();
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Consume the buffer, checking that raw-text arguments left valid UTF-8.
    pub fn into_string(self) -> Result<String, RenderError> {
        Ok(String::from_utf8(self.buf)?)
    }
}

impl AsRef<[u8]> for TrackedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

/// Lossy: invalid UTF-8 from raw byte arguments shows as U+FFFD.
impl fmt::Display for TrackedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.buf))
    }
}

#[cold]
#[track_caller]
fn fault(fault: DirectiveFault) -> ! {
    tracing::error!(%fault, "directive fault");
    panic!("{fault}");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

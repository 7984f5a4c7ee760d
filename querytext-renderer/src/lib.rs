//! # querytext-renderer
//!
//! Rebuilds query text from an AST through a closed directive language.
//!
//! A node renders itself by calling [`TrackedBuffer::interpret`] with a
//! template and positional [`Arg`]s. `%c` appends one character, `%s` raw
//! text, `%v` a child node, `%a` a tracked literal; everything else in the
//! template is copied verbatim. Contract violations panic with a
//! [`DirectiveFault`] message: a malformed template is a bug in a node, not
//! a data condition.
//!
//! ## Usage
//!
//! ```rust
//! use querytext_renderer::{Arg, Node, TrackedBuffer};
//!
//! struct Name(String);
//!
//! impl Node for Name {
//!     fn format(&self, buf: &mut TrackedBuffer) {
//!         buf.interpret("%s", &[Arg::from(&self.0)]);
//!     }
//! }
//!
//! struct Select {
//!     column: Name,
//!     table: Name,
//! }
//!
//! impl Node for Select {
//!     fn format(&self, buf: &mut TrackedBuffer) {
//!         buf.interpret(
//!             "SELECT %v FROM %v",
//!             &[Arg::node(&self.column), Arg::node(&self.table)],
//!         );
//!     }
//! }
//!
//! let stmt = Select {
//!     column: Name("id".into()),
//!     table: Name("users".into()),
//! };
//! let mut buf = TrackedBuffer::new();
//! buf.write_node(&stmt);
//! assert_eq!(buf.to_string(), "SELECT id FROM users");
//! ```

pub mod arg;
pub mod buffer;
pub mod directive;
pub mod error;
pub mod node;

pub use arg::Arg;
pub use buffer::TrackedBuffer;
pub use directive::Directive;
pub use error::{DirectiveFault, RenderError};
pub use node::{to_text, write_list, write_separated, Node};
pub use querytext_core::Substitution;

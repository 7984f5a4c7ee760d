//! The capability every AST node implements to render itself.

use crate::arg::Arg;
use crate::buffer::TrackedBuffer;

/// A tree element that can write its own surface syntax.
///
/// Implementations emit text only through [`TrackedBuffer::interpret`],
/// recursing into children with the `%v` marker. Each node is responsible
/// for its own spacing, keyword casing, quoting and escaping; the interpreter
/// never checks that the result parses back.
///
/// ```rust
/// use querytext_renderer::{Arg, Node, TrackedBuffer};
///
/// struct Column(&'static str);
///
/// impl Node for Column {
///     fn format(&self, buf: &mut TrackedBuffer) {
///         buf.interpret("%s", &[Arg::Str(self.0)]);
///     }
/// }
///
/// let mut buf = TrackedBuffer::new();
/// buf.interpret("SELECT %v", &[Arg::node(&Column("id"))]);
/// assert_eq!(buf.to_string(), "SELECT id");
/// ```
pub trait Node {
    fn format(&self, buf: &mut TrackedBuffer);

    /// Name reported when this node is passed to a marker that does not
    /// accept nodes.
    fn node_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn format(&self, buf: &mut TrackedBuffer) {
        (**self).format(buf)
    }

    fn node_type(&self) -> &'static str {
        (**self).node_type()
    }
}

/// Render `node` into a fresh buffer and return the text, lossily decoded.
pub fn to_text(node: &dyn Node) -> String {
    let mut buf = TrackedBuffer::new();
    buf.write_node(node);
    buf.to_string()
}

/// Render `items` separated by `", "`.
pub fn write_list<N: Node>(buf: &mut TrackedBuffer, items: &[N]) {
    write_separated(buf, items, ", ");
}

/// Render `items` with `sep` between consecutive elements.
pub fn write_separated<N: Node>(buf: &mut TrackedBuffer, items: &[N], sep: &str) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            buf.interpret("%s", &[Arg::Str(sep)]);
        }
        buf.interpret("%v", &[Arg::node(item)]);
    }
}

//! Positional interpreter arguments.

use crate::node::Node;

/// One positional argument to [`TrackedBuffer::interpret`](crate::TrackedBuffer::interpret).
///
/// Which variants a marker accepts is fixed by its [`Directive`](crate::Directive);
/// anything else is a fatal type-contract fault.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    Byte(u8),
    Char(char),
    Bytes(&'a [u8]),
    Str(&'a str),
    Node(&'a dyn Node),
}

impl<'a> Arg<'a> {
    /// Wrap any sized node. `Box<T>` works too, via its forwarding impl.
    pub fn node<N: Node>(node: &'a N) -> Self {
        Arg::Node(node)
    }

    /// Runtime type name reported in type-contract faults.
    pub fn type_name(&self) -> String {
        match self {
            Arg::Byte(_) => "u8".to_string(),
            Arg::Char(_) => "char".to_string(),
            Arg::Bytes(_) => "&[u8]".to_string(),
            Arg::Str(_) => "&str".to_string(),
            Arg::Node(node) => node.node_type().to_string(),
        }
    }
}

impl std::fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arg::Byte(b) => f.debug_tuple("Byte").field(b).finish(),
            Arg::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Arg::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Arg::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Arg::Node(node) => f.debug_tuple("Node").field(&node.node_type()).finish(),
        }
    }
}

impl From<u8> for Arg<'_> {
    fn from(b: u8) -> Self {
        Arg::Byte(b)
    }
}

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Arg::Char(c)
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(b: &'a [u8]) -> Self {
        Arg::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Arg<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Arg::Bytes(b.as_slice())
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(s: &'a String) -> Self {
        Arg::Str(s.as_str())
    }
}

impl<'a> From<&'a dyn Node> for Arg<'a> {
    fn from(node: &'a dyn Node) -> Self {
        Arg::Node(node)
    }
}

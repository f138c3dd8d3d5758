//! The slice of the Java AST the range resolver needs.
//!
//! Nodes come from the parser; the reporter only reads their offsets and
//! compares binding identities. All offsets are inclusive.

use javelin_source::Span;

/// Opaque identity of a resolved binding, used only as a lookup key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BindingId(pub u32);

/// A qualified name such as `a.b.c`, with one span per segment.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QualifiedName {
    /// The whole name.
    pub span: Span,
    /// One span per dotted segment, in source order.
    pub segments: Vec<Span>,
    /// Binding of the first segment that resolved to a field.
    pub binding: Option<BindingId>,
    /// Number of segments up to and including the one `binding` belongs to.
    pub first_bound_index: usize,
    /// Bindings of the segments from `first_bound_index` on, in order.
    pub other_bindings: Vec<BindingId>,
}

/// A node whose source range a problem can be anchored to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Node {
    /// Any node whose stored offsets are exact.
    Plain(Span),
    /// A field access `receiver.name`.
    FieldReference {
        /// The whole expression.
        span: Span,
        /// Offset of the first character of the field name.
        name_start: u32,
    },
    /// A dotted name.
    QualifiedName(QualifiedName),
    /// An array type reference such as `int[][]`.
    ArrayType {
        /// The whole reference, dimensions included.
        span: Span,
        /// End of the element type, before the dimensions.
        original_end: u32,
    },
    /// A parameterized type reference such as `List<String>`.
    ParameterizedType {
        /// The stored range, whose end may precede the closing `>`.
        span: Span,
        /// The type arguments, in order.
        type_arguments: Vec<Node>,
    },
}

impl Node {
    /// Returns the stored range of this node.
    pub fn span(&self) -> Span {
        match self {
            Node::Plain(span) => *span,
            Node::FieldReference { span, .. }
            | Node::ArrayType { span, .. }
            | Node::ParameterizedType { span, .. } => *span,
            Node::QualifiedName(name) => name.span,
        }
    }

    /// Returns the stored start offset.
    pub fn start(&self) -> u32 {
        self.span().start
    }

    /// Returns the stored end offset.
    pub fn end(&self) -> u32 {
        self.span().end
    }
}

impl From<Span> for Node {
    fn from(span: Span) -> Self {
        Node::Plain(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_of_each_variant() {
        assert_eq!(Node::Plain(Span::new(1, 4)).span(), Span::new(1, 4));
        let field = Node::FieldReference {
            span: Span::new(0, 8),
            name_start: 5,
        };
        assert_eq!(field.start(), 0);
        assert_eq!(field.end(), 8);
        let array = Node::ArrayType {
            span: Span::new(0, 6),
            original_end: 2,
        };
        assert_eq!(array.end(), 6);
    }
}

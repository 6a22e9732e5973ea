/// A node in the parsed document tree.
///
/// Block-level variants (`Paragraph`, `BlockQuote`, `Header`, `HorizontalRule`,
/// lists and code blocks) own their children outright. Inline variants carry
/// leaf text only; emphasis styles never nest inside each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Paragraph(Vec<Node>),
    BlockQuote(Vec<Node>),
    Header {
        level: u8,
        text: String,
        id: String,
    },
    HorizontalRule,
    LineBreak,
    Bold(String),
    Italic(String),
    BoldItalic(String),
    Strikethrough(String),
    Underlined(String),
    // The variants below are rendered but not yet produced by the parser.
    Link {
        text: String,
        url: String,
    },
    Image {
        alt: String,
        url: String,
        /// Empty means no title attribute.
        title: String,
    },
    UnorderedList(Vec<String>),
    OrderedList(Vec<String>),
    CodeBlock(String),
    InlineCode(String),
    PlainText(String),
}

impl Node {
    /// Shorthand for a `PlainText` node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::PlainText(text.into())
    }

    /// True for nodes that may appear directly inside a paragraph.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Node::LineBreak
                | Node::Bold(_)
                | Node::Italic(_)
                | Node::BoldItalic(_)
                | Node::Strikethrough(_)
                | Node::Underlined(_)
                | Node::Link { .. }
                | Node::Image { .. }
                | Node::InlineCode(_)
                | Node::PlainText(_)
        )
    }
}

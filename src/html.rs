use html_escape::encode_double_quoted_attribute;
use tracing::debug;

use crate::config::Config;
use crate::node::Node;

/// Convert a document tree to HTML.
pub fn blocks_to_html(nodes: &[Node], config: &Config) -> String {
    let mut out = String::new();

    if config.html.standalone {
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
        escape(&config.html.title, &mut out);
        out.push_str("</title>\n</head>\n<body>\n");
    }

    for node in nodes {
        emit_block(node, config, &mut out);
    }

    if config.html.standalone {
        out.push_str("</body>\n</html>\n");
    }

    debug!(nodes = nodes.len(), bytes = out.len(), "rendered html");
    out
}

fn emit_block(node: &Node, config: &Config, out: &mut String) {
    match node {
        Node::Paragraph(content) => {
            out.push_str("<p>");
            spans_to_html(content, config, out);
            out.push_str("</p>\n");
        }
        Node::BlockQuote(children) => {
            out.push_str("<blockquote>\n");
            for child in children {
                emit_block(child, config, out);
            }
            out.push_str("</blockquote>\n");
        }
        Node::Header { level, text, id } => {
            out.push_str(&format!("<h{level}"));
            if config.headings.ids {
                out.push_str(" id=\"");
                escape(id, out);
                out.push('"');
            }
            out.push('>');
            escape(text, out);
            out.push_str(&format!("</h{level}>\n"));
        }
        Node::HorizontalRule => {
            out.push_str("<hr />\n");
        }
        Node::UnorderedList(items) => list_to_html("ul", items, out),
        Node::OrderedList(items) => list_to_html("ol", items, out),
        Node::CodeBlock(code) => {
            out.push_str("<pre><code>");
            escape(code, out);
            out.push_str("</code></pre>\n");
        }
        inline => span_to_html(inline, config, out),
    }
}

fn spans_to_html(spans: &[Node], config: &Config, out: &mut String) {
    for span in spans {
        span_to_html(span, config, out);
    }
}

fn span_to_html(span: &Node, config: &Config, out: &mut String) {
    match span {
        Node::PlainText(text) => escape(text, out),
        Node::LineBreak => out.push_str("<br />"),
        Node::Bold(text) => wrap("strong", text, out),
        Node::Italic(text) => wrap("em", text, out),
        Node::BoldItalic(text) => {
            out.push_str("<strong>");
            wrap("em", text, out);
            out.push_str("</strong>");
        }
        Node::Strikethrough(text) => wrap("del", text, out),
        Node::Underlined(text) => wrap("u", text, out),
        Node::InlineCode(text) => wrap("code", text, out),
        Node::Link { text, url } => {
            out.push_str("<a href=\"");
            escape(url, out);
            out.push('"');
            if config.links.new_tab {
                out.push_str(" target=\"_blank\" rel=\"noopener\"");
            }
            out.push('>');
            escape(text, out);
            out.push_str("</a>");
        }
        Node::Image { alt, url, title } => {
            out.push_str("<img src=\"");
            escape(url, out);
            out.push_str("\" alt=\"");
            escape(alt, out);
            out.push('"');
            if !title.is_empty() {
                out.push_str(" title=\"");
                escape(title, out);
                out.push('"');
            }
            out.push_str(" />");
        }
        block => emit_block(block, config, out),
    }
}

fn list_to_html(tag: &str, items: &[String], out: &mut String) {
    out.push_str(&format!("<{tag}>\n"));
    for item in items {
        wrap("li", item, out);
        out.push('\n');
    }
    out.push_str(&format!("</{tag}>\n"));
}

fn wrap(tag: &str, text: &str, out: &mut String) {
    out.push_str(&format!("<{tag}>"));
    escape(text, out);
    out.push_str(&format!("</{tag}>"));
}

/// Escape `&`, `<`, `>` and `"` in literal text.
fn escape(text: &str, out: &mut String) {
    out.push_str(&encode_double_quoted_attribute(text));
}

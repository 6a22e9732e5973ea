use tracing::trace;

use super::heading::{header, is_atx, parse_atx, setext_level};
use super::inline::parse_inline;
use crate::node::Node;

const QUOTE_MARKER: char = '>';
const RULE_CHARS: [char; 3] = ['*', '-', '_'];

/// Split a document into top-level blocks in one forward pass.
///
/// Lookahead is one line for Setext underlines and the whole contiguous run
/// for blockquotes. Plain lines are buffered until something ends the
/// paragraph.
pub fn parse_blocks(lines: &[&str]) -> Vec<Node> {
    let mut blocks = Vec::new();
    let mut pending: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_paragraph(&mut pending, &mut blocks);
            i += 1;
            continue;
        }

        if trimmed.starts_with(QUOTE_MARKER) {
            flush_paragraph(&mut pending, &mut blocks);
            let run = lines[i..]
                .iter()
                .take_while(|l| l.trim_start().starts_with(QUOTE_MARKER))
                .count();
            trace!(line = i, run, "blockquote");
            blocks.push(Node::BlockQuote(parse_quote(&lines[i..i + run])));
            i += run;
            continue;
        }

        if is_atx(line) {
            flush_paragraph(&mut pending, &mut blocks);
            trace!(line = i, "atx header");
            blocks.push(parse_atx(line));
            i += 1;
            continue;
        }

        if is_rule(trimmed) {
            flush_paragraph(&mut pending, &mut blocks);
            trace!(line = i, "horizontal rule");
            blocks.push(Node::HorizontalRule);
            i += 1;
            continue;
        }

        if let Some(level) = lines.get(i + 1).and_then(|next| setext_level(next)) {
            flush_paragraph(&mut pending, &mut blocks);
            trace!(line = i, level, "setext header");
            blocks.push(header(level, trimmed));
            i += 2;
            continue;
        }

        pending.push(line);
        i += 1;
    }

    flush_paragraph(&mut pending, &mut blocks);
    blocks
}

/// A line of three or more identical `*`, `-` or `_` characters.
fn is_rule(trimmed: &str) -> bool {
    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    RULE_CHARS.contains(&first)
        && trimmed.chars().count() >= 3
        && trimmed.chars().all(|c| c == first)
}

fn flush_paragraph(pending: &mut Vec<&str>, blocks: &mut Vec<Node>) {
    if pending.is_empty() {
        return;
    }
    blocks.extend(paragraph(pending));
    pending.clear();
}

/// Inline-parse each line and append the results into one paragraph.
///
/// Returns `None` when no line produced any content.
fn paragraph(lines: &[&str]) -> Option<Node> {
    let content: Vec<Node> = lines.iter().flat_map(|line| parse_inline(line)).collect();
    (!content.is_empty()).then_some(Node::Paragraph(content))
}

/// Children of one blockquote level.
///
/// One `>` is stripped from every line. Lines that still carry a marker form
/// a deeper group and become a nested quote; the others are content.
fn parse_quote(lines: &[&str]) -> Vec<Node> {
    let stripped: Vec<&str> = lines.iter().map(|l| strip_marker(l)).collect();
    let mut children = Vec::new();
    let mut i = 0;

    while i < stripped.len() {
        let nested = quote_depth(stripped[i]) > 0;
        let len = stripped[i..]
            .iter()
            .take_while(|l| (quote_depth(l) > 0) == nested)
            .count();
        let group = &stripped[i..i + len];
        if nested {
            children.push(Node::BlockQuote(parse_quote(group)));
        } else {
            quote_content(group, &mut children);
        }
        i += len;
    }

    children
}

/// A same-depth content group: leading headers, then one paragraph for the rest.
fn quote_content(lines: &[&str], out: &mut Vec<Node>) {
    let mut rest = lines;
    while let Some((first, tail)) = rest.split_first() {
        if !is_atx(first) {
            out.extend(paragraph(rest));
            return;
        }
        out.push(parse_atx(first));
        rest = tail;
    }
}

/// Remove one leading `>` and the whitespace around it.
fn strip_marker(line: &str) -> &str {
    let line = line.trim_start();
    line.strip_prefix(QUOTE_MARKER).unwrap_or(line).trim_start()
}

/// Number of leading `>` markers, allowing whitespace between them.
fn quote_depth(line: &str) -> usize {
    let mut depth = 0;
    let mut rest = line.trim_start();
    while let Some(after) = rest.strip_prefix(QUOTE_MARKER) {
        depth += 1;
        rest = after.trim_start();
    }
    depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::heading_id;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn para(text: &str) -> Node {
        Node::Paragraph(vec![Node::text(text)])
    }

    fn h(level: u8, text: &str) -> Node {
        Node::Header {
            level,
            text: text.to_string(),
            id: heading_id(text),
        }
    }

    #[test]
    fn empty_document() {
        assert!(parse_blocks(&[]).is_empty());
        assert!(parse_blocks(&["", "   ", ""]).is_empty());
    }

    #[test]
    fn blank_lines_separate_paragraphs() {
        assert_eq!(
            parse_blocks(&["", "one", "", "", "two", ""]),
            vec![para("one"), para("two")]
        );
    }

    #[test]
    fn consecutive_lines_join_into_one_paragraph() {
        assert_eq!(
            parse_blocks(&["first", "**second**"]),
            vec![Node::Paragraph(vec![
                Node::text("first"),
                Node::Bold("second".into()),
            ])]
        );
    }

    #[test]
    fn hard_break_inside_paragraph() {
        assert_eq!(
            parse_blocks(&["line one  ", "line two"]),
            vec![Node::Paragraph(vec![
                Node::text("line one"),
                Node::LineBreak,
                Node::text("line two"),
            ])]
        );
    }

    #[test]
    fn atx_header_ends_paragraph() {
        assert_eq!(
            parse_blocks(&["text", "# Title", "more"]),
            vec![para("text"), h(1, "Title"), para("more")]
        );
    }

    #[rstest]
    #[case("---")]
    #[case("***")]
    #[case("___")]
    #[case("  ****  ")]
    #[case("----------")]
    fn horizontal_rule(#[case] line: &str) {
        assert_eq!(parse_blocks(&[line]), vec![Node::HorizontalRule]);
    }

    #[rstest]
    #[case("--")]
    #[case("===")]
    fn not_a_rule(#[case] line: &str) {
        assert_eq!(parse_blocks(&[line]), vec![para(line)]);
    }

    #[test]
    fn rule_between_paragraphs() {
        assert_eq!(
            parse_blocks(&["a", "", "***", "b"]),
            vec![para("a"), Node::HorizontalRule, para("b")]
        );
    }

    #[test]
    fn setext_headers() {
        assert_eq!(parse_blocks(&["Title", "====="]), vec![h(1, "Title")]);
        assert_eq!(parse_blocks(&["Title", "----"]), vec![h(2, "Title")]);
        assert_eq!(parse_blocks(&["  Title  ", "="]), vec![h(1, "Title")]);
    }

    #[test]
    fn setext_takes_only_the_last_line() {
        assert_eq!(
            parse_blocks(&["intro", "Title", "==="]),
            vec![para("intro"), h(1, "Title")]
        );
    }

    #[test]
    fn dashes_after_blank_line_are_a_rule() {
        assert_eq!(
            parse_blocks(&["Title", "", "---"]),
            vec![para("Title"), Node::HorizontalRule]
        );
    }

    #[test]
    fn simple_blockquote() {
        assert_eq!(
            parse_blocks(&["> quoted", "> still"]),
            vec![Node::BlockQuote(vec![Node::Paragraph(vec![
                Node::text("quoted"),
                Node::text("still"),
            ])])]
        );
    }

    #[test]
    fn nested_blockquote() {
        assert_eq!(
            parse_blocks(&["> a", ">> b", "> c"]),
            vec![Node::BlockQuote(vec![
                para("a"),
                Node::BlockQuote(vec![para("b")]),
                para("c"),
            ])]
        );
    }

    #[test]
    fn spaced_markers_nest() {
        assert_eq!(
            parse_blocks(&["> > deep"]),
            vec![Node::BlockQuote(vec![Node::BlockQuote(vec![para("deep")])])]
        );
    }

    #[test]
    fn deeper_levels_nest_inside_each_other() {
        assert_eq!(
            parse_blocks(&[">> b", ">>> c"]),
            vec![Node::BlockQuote(vec![Node::BlockQuote(vec![
                para("b"),
                Node::BlockQuote(vec![para("c")]),
            ])])]
        );
    }

    #[test]
    fn blockquote_flushes_paragraph() {
        assert_eq!(
            parse_blocks(&["before", "> inside", "after"]),
            vec![
                para("before"),
                Node::BlockQuote(vec![para("inside")]),
                para("after"),
            ]
        );
    }

    #[test]
    fn empty_quote_lines_emit_nothing() {
        assert_eq!(parse_blocks(&[">", ">   "]), vec![Node::BlockQuote(vec![])]);
    }

    #[test]
    fn header_in_blockquote_keeps_following_lines() {
        assert_eq!(
            parse_blocks(&["> # Title", "> body"]),
            vec![Node::BlockQuote(vec![h(1, "Title"), para("body")])]
        );
    }

    #[test]
    fn header_after_quote_text_stays_text() {
        assert_eq!(
            parse_blocks(&["> body", "> # not a title"]),
            vec![Node::BlockQuote(vec![Node::Paragraph(vec![
                Node::text("body"),
                Node::text("# not a title"),
            ])])]
        );
    }

    #[test]
    fn leading_headers_in_quote_group() {
        assert_eq!(
            parse_blocks(&["> # a", "> ## b", "> t"]),
            vec![Node::BlockQuote(vec![h(1, "a"), h(2, "b"), para("t")])]
        );
    }

    #[test]
    fn indented_hash_line_is_paragraph() {
        assert_eq!(parse_blocks(&["  # x"]), vec![para("  # x")]);
        assert_eq!(
            parse_blocks(&["text", "  # x"]),
            vec![Node::Paragraph(vec![Node::text("text"), Node::text("  # x")])]
        );
    }

    #[test]
    fn quote_depth_counts_markers() {
        assert_eq!(quote_depth("plain"), 0);
        assert_eq!(quote_depth("> a"), 1);
        assert_eq!(quote_depth(">>a"), 2);
        assert_eq!(quote_depth(" > > > a"), 3);
    }
}

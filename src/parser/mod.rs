mod block;
mod heading;
mod inline;

pub use inline::parse_inline;

use tracing::debug;

use crate::node::Node;

/// Parse markdown text into top-level nodes.
pub fn parse(markdown: &str) -> Vec<Node> {
    let lines: Vec<&str> = markdown.lines().collect();
    parse_lines(&lines)
}

/// Parse pre-split lines into top-level nodes.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Node> {
    let lines: Vec<&str> = lines.iter().map(|l| l.as_ref()).collect();
    let blocks = block::parse_blocks(&lines);
    debug!(lines = lines.len(), blocks = blocks.len(), "parsed document");
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::heading_id;
    use pretty_assertions::assert_eq;

    #[test]
    fn crlf_input() {
        assert_eq!(
            parse("# Title\r\n\r\ntext"),
            vec![
                Node::Header {
                    level: 1,
                    text: "Title".into(),
                    id: heading_id("Title"),
                },
                Node::Paragraph(vec![Node::text("text")]),
            ]
        );
    }

    #[test]
    fn owned_lines() {
        let lines = vec![String::from("Title"), String::from("====")];
        assert_eq!(parse_lines(&lines), parse("Title\n===="));
    }

    #[test]
    fn heading_ids_are_stable_across_calls() {
        let ids = |src: &str| -> Vec<String> {
            parse(src)
                .into_iter()
                .filter_map(|n| match n {
                    Node::Header { id, .. } => Some(id),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(ids("# Title"), ids("# Title"));
        assert_ne!(ids("# Title"), ids("# Other"));
    }

    #[test]
    fn paragraph_children_are_inline() {
        let doc = parse("a **b**\n<u>c</u> ~~d~~<br>e\\\n\n> q\n>> r");
        fn check(nodes: &[Node]) {
            for node in nodes {
                match node {
                    Node::Paragraph(children) => {
                        assert!(children.iter().all(Node::is_inline), "{children:?}")
                    }
                    Node::BlockQuote(children) => {
                        assert!(children.iter().all(|c| !c.is_inline()));
                        check(children);
                    }
                    _ => {}
                }
            }
        }
        check(&doc);
    }

    #[test]
    fn escaping_is_left_to_the_renderer() {
        assert_eq!(
            parse("&amp; <tag> \"q\""),
            vec![Node::Paragraph(vec![
                Node::text("&amp; "),
                Node::text("<tag> \"q\""),
            ])]
        );
    }
}

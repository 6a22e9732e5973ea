use crate::node::Node;

/// Characters that end a plain-text run.
const SPECIAL: [char; 4] = ['*', '_', '~', '<'];

const BREAK_TAG: &str = "<br>";
const STRIKE: &str = "~~";
const UNDERLINE_OPEN: &str = "<u>";
const UNDERLINE_CLOSE: &str = "</u>";

/// Parse one line of paragraph or heading content into inline nodes.
///
/// Never fails: unmatched delimiters and tags come back as `PlainText`.
/// Explicit breaks are resolved first (trailing double space, trailing
/// backslash, then any number of `<br>` tags); each text segment between
/// breaks is decoration-scanned on its own.
pub fn parse_inline(line: &str) -> Vec<Node> {
    let mut out = Vec::new();
    let mut rest = line;

    loop {
        if let Some(text) = rest.strip_suffix("  ") {
            scan_decorations(text, &mut out);
            out.push(Node::LineBreak);
            return out;
        }
        if let Some(text) = rest.strip_suffix('\\') {
            scan_decorations(text, &mut out);
            out.push(Node::LineBreak);
            return out;
        }
        if let Some((before, after)) = rest.split_once(BREAK_TAG) {
            scan_decorations(before, &mut out);
            out.push(Node::LineBreak);
            rest = after;
            continue;
        }
        scan_decorations(rest, &mut out);
        return out;
    }
}

/// Decoration scanner. Every step consumes at least one character.
fn scan_decorations(text: &str, out: &mut Vec<Node>) {
    let mut rest = text;
    while let Some(first) = rest.chars().next() {
        rest = match first {
            '*' | '_' => scan_emphasis(rest, first, out),
            '~' if rest.starts_with(STRIKE) => {
                scan_delimited(rest, STRIKE, STRIKE, Node::Strikethrough, out)
            }
            '<' if rest.starts_with(UNDERLINE_OPEN) => {
                scan_delimited(rest, UNDERLINE_OPEN, UNDERLINE_CLOSE, Node::Underlined, out)
            }
            _ => scan_plain(rest, out),
        };
    }
}

/// Emphasis with maximal munch: `ddd` before `dd` before `d`.
///
/// A failed opener is emitted literally at its full length and never retried
/// as a shorter delimiter.
fn scan_emphasis<'a>(text: &'a str, delim: char, out: &mut Vec<Node>) -> &'a str {
    let run = text.chars().take_while(|&c| c == delim).take(3).count();
    // `delim` is ASCII, so `run` is also a byte length.
    let marker = &text[..run];
    let make: fn(String) -> Node = match run {
        3 => Node::BoldItalic,
        2 => Node::Bold,
        _ => Node::Italic,
    };
    scan_delimited(text, marker, marker, make, out)
}

/// Match `open ... close`, storing the trimmed content via `make`.
/// Without a closer the opener becomes literal text.
fn scan_delimited<'a>(
    text: &'a str,
    open: &str,
    close: &str,
    make: fn(String) -> Node,
    out: &mut Vec<Node>,
) -> &'a str {
    let after_open = &text[open.len()..];
    match after_open.find(close) {
        Some(end) => {
            out.push(make(after_open[..end].trim().to_string()));
            &after_open[end + close.len()..]
        }
        None => {
            out.push(Node::text(open));
            after_open
        }
    }
}

/// Consume the first character unconditionally, then everything up to the
/// next special character.
fn scan_plain<'a>(text: &'a str, out: &mut Vec<Node>) -> &'a str {
    let first_len = text.chars().next().map_or(0, char::len_utf8);
    let end = text[first_len..]
        .find(|c: char| SPECIAL.contains(&c))
        .map_or(text.len(), |i| first_len + i);
    out.push(Node::text(&text[..end]));
    &text[end..]
}

use crate::anchor::heading_id;
use crate::node::Node;

const ATX_MARKER: char = '#';
const MAX_LEVEL: u8 = 6;

/// True if the line opens an ATX header. The `#` must be the first character.
pub fn is_atx(line: &str) -> bool {
    line.starts_with(ATX_MARKER)
}

/// Build a header node from an ATX line such as `## Title ##`.
///
/// The level is the number of leading `#` capped at six; closing hashes are
/// decorative and dropped.
pub fn parse_atx(line: &str) -> Node {
    let line = line.trim_start();
    let hashes = line.chars().take_while(|&c| c == ATX_MARKER).count();
    let raw = line[hashes..].trim();
    let text = raw.trim_end_matches(ATX_MARKER).trim();
    let level = u8::try_from(hashes).unwrap_or(MAX_LEVEL).min(MAX_LEVEL);
    header(level, text)
}

/// Setext level for an underline line: 1 for `===`, 2 for `---`.
pub fn setext_level(underline: &str) -> Option<u8> {
    let underline = underline.trim();
    let first = underline.chars().next()?;
    let level = match first {
        '=' => 1,
        '-' => 2,
        _ => return None,
    };
    underline.chars().all(|c| c == first).then_some(level)
}

pub fn header(level: u8, text: &str) -> Node {
    Node::Header {
        level,
        text: text.to_string(),
        id: heading_id(text),
    }
}

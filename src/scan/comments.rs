//! Comment filter for header candidates

const LINE_COMMENT: &[u8] = b"//";

/// Whether `offset` lies inside a line comment or a still-open block comment.
///
/// The line check looks at the text between the previous newline and
/// `offset`: if it starts with `//` after trimming, the offset is commented.
///
/// The block check walks `[0, offset)` once, opening on every `/*` not
/// preceded by a backslash and closing on the next `*/`. Line comments and
/// string literals are not consulted, so a `/*` inside either still opens a
/// block.
pub fn is_commented(document: &str, offset: usize) -> bool {
    let prefix = &document.as_bytes()[..offset.min(document.len())];
    in_line_comment(prefix) || in_block_comment(prefix)
}

fn in_line_comment(prefix: &[u8]) -> bool {
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    prefix[line_start..]
        .trim_ascii_start()
        .starts_with(LINE_COMMENT)
}

fn in_block_comment(prefix: &[u8]) -> bool {
    let mut inside = false;
    let mut i = 0;

    while i + 1 < prefix.len() {
        match (prefix[i], prefix[i + 1]) {
            (b'/', b'*') if !inside && (i == 0 || prefix[i - 1] != b'\\') => {
                inside = true;
                i += 2;
            }
            (b'*', b'/') if inside => {
                inside = false;
                i += 2;
            }
            _ => i += 1,
        }
    }

    inside
}

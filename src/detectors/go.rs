//! Go header detector
//!
//! Finds `func` headers, with or without a receiver clause, and reduces the
//! receiver to the type name used as the definition owner.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::{is_identifier, HeaderCandidate};

/// `func`, optional receiver, name, optional type parameters, parameter list opener
static FUNC_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bfunc\b\s*(?P<recv>\([^)]*\))?\s*(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s*(?:\[[^\]\n]*\]\s*)?\(",
    )
    .unwrap()
});

/// Find every Go function and method header in `source`
pub fn find_headers(source: &str) -> Vec<HeaderCandidate> {
    FUNC_HEADER_RE
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.name("name")?.as_str().to_string();
            let owner = caps
                .name("recv")
                .and_then(|recv| receiver_owner(recv.as_str()));

            Some(HeaderCandidate {
                name,
                owner,
                start: whole.start(),
            })
        })
        .collect()
}

/// Reduce a receiver clause such as `(s *Service)` to its type name.
///
/// The receiver variable and any pointer marker are dropped, as are type
/// arguments (`*Stack[T]` becomes `Stack`). A clause that does not reduce to a
/// single identifier falls back to its own text with whitespace collapsed, so
/// a stable key can still be built from it.
pub fn receiver_owner(clause: &str) -> Option<String> {
    let inner = clause
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .trim();
    if inner.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = inner.split_whitespace().collect();
    let type_text: String = match tokens.as_slice() {
        [single] => single.to_string(),
        [var, rest @ ..] if is_identifier(var) => rest.concat(),
        _ => tokens.concat(),
    };

    let base = type_text.trim_start_matches('*');
    let base = base.split('[').next().unwrap_or(base);

    if is_identifier(base) {
        Some(base.to_string())
    } else {
        Some(tokens.join(" "))
    }
}

//! TypeScript / JavaScript header detector
//!
//! Three independent patterns run over the same document:
//! - declared functions (`export async function name<T>(...): R {`)
//! - arrow-bound bindings (`const name = async (...): R => {`)
//! - class members (indented `static async name(...): R {`)
//!
//! Results are concatenated; ordering and de-duplication happen in the
//! entity builder.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::HeaderCandidate;
use crate::lang::Dialect;
use crate::scan::{extract_span, is_commented};

/// Type parameter list allowing one level of nesting: `<T extends Map<K, V>>`
const GENERICS: &str = r"<(?:[^<>]|<[^<>]*>)*>";

/// Parameter list allowing one level of nested parentheses
const PARAMS: &str = r"\((?:[^()]|\([^()]*\))*\)";

static DECLARED_FUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?:\bexport\s+(?:default\s+)?)?(?:\basync\s+)?\bfunction\b\s*\*?\s*(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s*(?:{GENERICS})?\s*{PARAMS}\s*(?::\s*[^{{;\n]+?)?\s*\{{"
    ))
    .unwrap()
});

static ARROW_BINDING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?:\bexport\s+)?\b(?:const|let|var)\s+(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s*(?::[^=\n]+)?=\s*(?:async\s+)?(?:{GENERICS}\s*)?(?:{PARAMS}|[A-Za-z_][A-Za-z0-9_]*)\s*(?::\s*[^=;{{\n]+?)?\s*=>\s*\{{"
    ))
    .unwrap()
});

static CLASS_MEMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?m)^[ \t]+(?P<head>(?:(?:public|private|protected|static|async|override|abstract|readonly|get|set)\s+)*\*?(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s*(?:{GENERICS})?\s*{PARAMS}\s*(?::\s*[^{{;=\n]+?)?\s*\{{)"
    ))
    .unwrap()
});

static CLASS_DECL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bclass\s+(?P<name>[A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Names that look like members when indented but are statements or constructors
const NON_MEMBER_NAMES: &[&str] = &[
    "constructor",
    "if",
    "for",
    "while",
    "switch",
    "catch",
    "with",
    "return",
    "function",
    "class",
    "do",
    "else",
    "new",
    "typeof",
    "await",
    "yield",
    "super",
];

/// Find every function, arrow binding and class member header in `source`.
///
/// With `qualify_class_members` the enclosing class name becomes the owner of
/// each class member; otherwise members are keyed by their bare name.
pub fn find_headers(source: &str, qualify_class_members: bool) -> Vec<HeaderCandidate> {
    let mut found = Vec::new();

    found.extend(simple_headers(&DECLARED_FUNCTION_RE, source));
    found.extend(simple_headers(&ARROW_BINDING_RE, source));

    let classes = if qualify_class_members {
        class_bodies(source)
    } else {
        Vec::new()
    };

    for caps in CLASS_MEMBER_RE.captures_iter(source) {
        let (Some(head), Some(name)) = (caps.name("head"), caps.name("name")) else {
            continue;
        };
        if NON_MEMBER_NAMES.contains(&name.as_str()) {
            continue;
        }

        let owner = classes
            .iter()
            .filter(|class| class.start < head.start() && head.start() < class.end)
            .min_by_key(|class| class.end - class.start)
            .map(|class| class.name.clone());

        found.push(HeaderCandidate {
            name: name.as_str().to_string(),
            owner,
            start: head.start(),
        });
    }

    found
}

fn simple_headers(re: &Regex, source: &str) -> Vec<HeaderCandidate> {
    re.captures_iter(source)
        .filter_map(|caps| {
            Some(HeaderCandidate {
                name: caps.name("name")?.as_str().to_string(),
                owner: None,
                start: caps.get(0)?.start(),
            })
        })
        .collect()
}

/// A class declaration and the byte range of its body
#[derive(Debug)]
struct ClassBody {
    name: String,
    start: usize,
    end: usize,
}

fn class_bodies(source: &str) -> Vec<ClassBody> {
    CLASS_DECL_RE
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if is_commented(source, whole.start()) {
                return None;
            }
            let span = extract_span(source, whole.start(), Dialect::TypeScript).ok()?;
            Some(ClassBody {
                name: caps.name("name")?.as_str().to_string(),
                start: span.start,
                end: span.end,
            })
        })
        .collect()
}

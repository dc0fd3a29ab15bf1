//! Definition extraction orchestration
//!
//! Runs the dialect detector, drops commented-out headers, delimits each
//! remaining header with the span scanner and returns the definitions in
//! document order, one per start offset.

use crate::detectors::find_headers;
use crate::diagnostics::{Diagnostic, DiagnosticSink, NullSink};
use crate::lang::Dialect;
use crate::scan::{extract_span, is_commented};
use crate::schema::Definition;

/// Knobs for the extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Use the enclosing class name as owner of TypeScript class members.
    ///
    /// Off by default: members are then keyed by bare name, so same-named
    /// methods of different classes match each other.
    pub qualify_class_members: bool,
}

/// Extract all definitions with default options, discarding diagnostics
pub fn extract_definitions(source: &str, dialect: Dialect) -> Vec<Definition> {
    extract_with(source, dialect, &ExtractOptions::default(), &NullSink)
}

/// Extract all definitions from `source`.
///
/// A header whose body cannot be delimited is reported to `sink` and skipped;
/// extraction itself never fails.
pub fn extract_with(
    source: &str,
    dialect: Dialect,
    options: &ExtractOptions,
    sink: &dyn DiagnosticSink,
) -> Vec<Definition> {
    let mut candidates = find_headers(source, dialect, options);

    // One header can satisfy more than one pattern; keep the first reported
    candidates.sort_by_key(|c| c.start);
    candidates.dedup_by_key(|c| c.start);

    let mut definitions = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if is_commented(source, candidate.start) {
            continue;
        }

        match extract_span(source, candidate.start, dialect) {
            Ok(span) => definitions.push(Definition {
                name: candidate.name,
                owner: candidate.owner,
                text: span.text.trim().to_string(),
                start_offset: candidate.start,
            }),
            Err(err) => sink.report(Diagnostic::CandidateSkipped {
                name: candidate.name,
                offset: candidate.start,
                reason: err.to_string(),
            }),
        }
    }

    definitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;

    fn names(defs: &[Definition]) -> Vec<&str> {
        defs.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_go_extraction_in_order() {
        let src = "package main\n\nfunc B() {\n}\n\nfunc (s *S) A() {\n}\n";
        let defs = extract_definitions(src, Dialect::Go);
        assert_eq!(names(&defs), vec!["B", "A"]);
        assert_eq!(defs[1].owner.as_deref(), Some("S"));
        assert_eq!(defs[1].text, "func (s *S) A() {\n}");
        assert!(defs[0].start_offset < defs[1].start_offset);
    }

    #[test]
    fn test_commented_headers_are_dropped() {
        let src = concat!(
            "// func Line() {}\n",
            "/*\nfunc Block() {}\n*/\n",
            "/* closed */ func Inline() {\n}\n",
            "func Real() {\n}\n",
        );
        let defs = extract_definitions(src, Dialect::Go);
        assert_eq!(names(&defs), vec!["Inline", "Real"]);
    }

    #[test]
    fn test_unclosed_block_hides_the_rest() {
        let src = "func Before() {\n}\n/* never closed\nfunc After() {\n}\n";
        let defs = extract_definitions(src, Dialect::Go);
        assert_eq!(names(&defs), vec!["Before"]);
    }

    #[test]
    fn test_bad_candidates_are_reported_and_skipped() {
        let src = "func NoBody() int\n\nfunc Good() {\n}\n\nfunc Broken() {\n\tif x {\n";
        let sink = RecordingSink::new();
        let defs = extract_with(src, Dialect::Go, &ExtractOptions::default(), &sink);

        assert_eq!(names(&defs), vec!["Good"]);
        let skipped: Vec<String> = sink
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Diagnostic::CandidateSkipped { name, .. } => Some(name),
                _ => None,
            })
            .collect();
        assert_eq!(skipped, vec!["NoBody", "Broken"]);
    }

    #[test]
    fn test_typescript_sorted_across_patterns() {
        let src = concat!(
            "export const first = () => {\n};\n",
            "class K {\n    second() {\n    }\n}\n",
            "function third() {\n}\n",
        );
        let defs = extract_definitions(src, Dialect::TypeScript);
        assert_eq!(names(&defs), vec!["first", "second", "third"]);
        assert_eq!(defs[1].text, "second() {\n    }");
    }

    #[test]
    fn test_start_offsets_are_unique() {
        let src = "function a() {\n}\nconst b = () => {\n};\nclass C {\n    d() {\n    }\n}\n";
        let defs = extract_definitions(src, Dialect::TypeScript);
        let mut offsets: Vec<usize> = defs.iter().map(|d| d.start_offset).collect();
        offsets.dedup();
        assert_eq!(offsets.len(), defs.len());
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_definitions("", Dialect::Go).is_empty());
        assert!(extract_definitions("", Dialect::TypeScript).is_empty());
    }
}

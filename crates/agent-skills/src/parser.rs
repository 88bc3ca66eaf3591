//! SKILL.md frontmatter parser.
//!
//! A skill document opens with a `---` line, carries a header of
//! `key: value` lines, closes with another `---` line, and ends with a
//! free-form markdown body:
//!
//! ```text
//! ---
//! name: pothole-report
//! description: >
//!   File a pothole report with the city
//!   and confirm the tracking number.
//! ---
//!
//! # Pothole Report
//!
//! Instructions for the agent go here...
//! ```
//!
//! Headers are hand-authored, so only the minimal YAML subset they use
//! is supported: flat scalar keys, plus `>`/`|` block scalars for long
//! descriptions. Both indicators fold the following indented lines into
//! one space-joined string; literal newline semantics are not
//! preserved.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SkillError};
use crate::types::{BODY_KEY, SkillMetadata};

/// Whole-document shape: a `---` line, the header block (non-greedy, so
/// the first closing delimiter wins), a `---` line, then the body.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").expect("frontmatter regex must compile")
});

/// Parse a skill document into its metadata mapping.
///
/// Returns [`SkillError::NotFrontmatter`] when the text lacks the
/// delimited header shape. Callers treat that as "not a skill
/// document", not as a fatal condition.
pub fn parse_frontmatter(text: &str) -> Result<SkillMetadata> {
    let captures = FRONTMATTER_RE
        .captures(text)
        .ok_or(SkillError::NotFrontmatter)?;
    let header = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    let mut metadata = SkillMetadata::new();

    // Cursor-driven scan: a block scalar consumes a variable number of
    // following lines, so a plain per-line loop does not work.
    let lines: Vec<&str> = header.split('\n').collect();
    let mut cursor = 0;
    while cursor < lines.len() {
        let line = lines[cursor];
        cursor += 1;

        // Indented lines only have meaning as continuations, consumed
        // by the block-scalar branch below.
        if line.starts_with([' ', '\t']) {
            continue;
        }

        // Split on the first colon only; values may contain colons.
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = rest.trim();

        if value == ">" || value == "|" {
            // Fold every immediately following indented line into one
            // space-joined string. No indented lines means an empty
            // value, not an error.
            let mut folded = Vec::new();
            while cursor < lines.len() && lines[cursor].starts_with([' ', '\t']) {
                folded.push(lines[cursor].trim());
                cursor += 1;
            }
            metadata.insert(key, folded.join(" "));
        } else {
            metadata.insert(key, value);
        }
    }

    metadata.insert(BODY_KEY, body.trim());
    Ok(metadata)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_header() {
        let meta =
            parse_frontmatter("---\nname: x\ndescription: hello\n---\nBody text.\n").unwrap();
        assert_eq!(meta.get("name"), Some("x"));
        assert_eq!(meta.get("description"), Some("hello"));
        assert_eq!(meta.body(), "Body text.");
    }

    #[test]
    fn not_frontmatter() {
        let result = parse_frontmatter("no frontmatter here");
        assert!(matches!(result, Err(SkillError::NotFrontmatter)));
    }

    #[test]
    fn missing_closing_delimiter() {
        let result = parse_frontmatter("---\nname: x\n");
        assert!(matches!(result, Err(SkillError::NotFrontmatter)));
    }

    #[test]
    fn closing_delimiter_needs_trailing_newline() {
        let result = parse_frontmatter("---\nname: x\n---");
        assert!(matches!(result, Err(SkillError::NotFrontmatter)));
    }

    #[test]
    fn folded_multiline_value() {
        let meta =
            parse_frontmatter("---\nname: x\ndescription: >\n  line one\n  line two\n---\nBody\n")
                .unwrap();
        assert_eq!(meta.get("description"), Some("line one line two"));
        assert_eq!(meta.get("name"), Some("x"));
    }

    #[test]
    fn literal_indicator_folds_identically() {
        let meta =
            parse_frontmatter("---\ndescription: |\n  line one\n  line two\n---\nBody\n").unwrap();
        assert_eq!(meta.get("description"), Some("line one line two"));
    }

    #[test]
    fn empty_fold_yields_empty_string() {
        let meta = parse_frontmatter("---\nname: x\ndescription: >\n---\nBody\n").unwrap();
        assert_eq!(meta.get("description"), Some(""));
    }

    #[test]
    fn key_after_fold_is_still_recognized() {
        let meta =
            parse_frontmatter("---\ndescription: >\n  folded text\nname: x\n---\nBody\n").unwrap();
        assert_eq!(meta.get("description"), Some("folded text"));
        assert_eq!(meta.get("name"), Some("x"));
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let meta = parse_frontmatter("---\nname: a\nname: b\n---\nBody\n").unwrap();
        assert_eq!(meta.get("name"), Some("b"));
    }

    #[test]
    fn value_may_contain_colons() {
        let meta = parse_frontmatter("---\nhomepage: https://example.com/x\n---\nBody\n").unwrap();
        assert_eq!(meta.get("homepage"), Some("https://example.com/x"));
    }

    #[test]
    fn indented_line_is_not_a_key() {
        let meta = parse_frontmatter("---\nname: x\n  stray: value\n---\nBody\n").unwrap();
        assert_eq!(meta.get("stray"), None);
        assert_eq!(meta.get("  stray"), None);
        assert_eq!(meta.get("name"), Some("x"));
    }

    #[test]
    fn header_without_keys_yields_body_only() {
        let meta = parse_frontmatter("---\njust prose\n---\nBody\n").unwrap();
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.body(), "Body");
    }

    #[test]
    fn body_trimmed_but_internal_blanks_kept() {
        let meta =
            parse_frontmatter("---\nname: x\n---\n\n\nFirst.\n\nSecond.\n\n\n").unwrap();
        assert_eq!(meta.body(), "First.\n\nSecond.");
    }

    #[test]
    fn reparse_is_identical() {
        let text = "---\nname: x\ndescription: >\n  one\n  two\n---\nBody.\n";
        let a = parse_frontmatter(text).unwrap();
        let b = parse_frontmatter(text).unwrap();
        assert_eq!(a, b);
    }
}

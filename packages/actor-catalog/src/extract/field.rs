//! Field extraction: locate one descendant and normalise its text.
//!
//! Absence is a normal outcome. Optional fields on real pages simply
//! do not match, and the extractors return `None` or a default.

use crate::dom::{Node, Path};
use crate::types::record::Rank;

/// Trimmed text of the first descendant of `node` matching `path`.
///
/// A missing selector (`None`) never matches.
pub fn extract_text(node: &Node<'_>, path: Option<&Path>) -> Option<String> {
    path.and_then(|p| node.select_one(p)).map(|n| n.text())
}

/// Rank of the candidate, `0` when absent or unparseable.
pub fn extract_rank(node: &Node<'_>, path: Option<&Path>) -> Rank {
    extract_text(node, path)
        .map(|text| parse_rank(&text))
        .unwrap_or(0)
}

/// Type of the candidate, empty when absent.
pub fn extract_type(node: &Node<'_>, path: Option<&Path>) -> String {
    extract_text(node, path)
        .map(|text| parse_type(&text))
        .unwrap_or_default()
}

/// Strip every `.` and parse what remains as an integer.
///
/// Listing pages number their entries like `"12."`; anything that still
/// fails to parse is `0`, which the strict catalog path rejects as unranked.
pub fn parse_rank(text: &str) -> Rank {
    text.replace('.', "").trim().parse().unwrap_or(0)
}

/// Keep the part before the first `|`, trimmed.
pub fn parse_type(text: &str) -> String {
    match text.split_once('|') {
        Some((head, _)) => head.trim().to_string(),
        None => text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use proptest::prelude::*;

    const HTML: &str = r#"
        <div class="actor">
          <h3>  Tom Hanks  </h3>
          <span class="rank">12.</span>
          <p class="type">Actor | Producer</p>
        </div>
        <div class="actor">
          <span class="rank">abc</span>
          <p class="type">Actor</p>
        </div>
    "#;

    fn path(s: &str) -> Path {
        Path::parse(s).unwrap()
    }

    #[test]
    fn test_extract_text_trims() {
        let doc = Document::parse(HTML);
        let actors = doc.select_all(&path("div.actor"));

        assert_eq!(
            extract_text(&actors[0], Some(&path("h3"))),
            Some("Tom Hanks".to_string())
        );
        assert_eq!(extract_text(&actors[1], Some(&path("h3"))), None);
        assert_eq!(extract_text(&actors[0], None), None);
    }

    #[test]
    fn test_extract_rank() {
        let doc = Document::parse(HTML);
        let actors = doc.select_all(&path("div.actor"));
        let rank = path("span.rank");

        assert_eq!(extract_rank(&actors[0], Some(&rank)), 12);
        assert_eq!(extract_rank(&actors[1], Some(&rank)), 0);
        assert_eq!(extract_rank(&actors[0], Some(&path("span.missing"))), 0);
        assert_eq!(extract_rank(&actors[0], None), 0);
    }

    #[test]
    fn test_extract_type() {
        let doc = Document::parse(HTML);
        let actors = doc.select_all(&path("div.actor"));
        let actor_type = path("p.type");

        assert_eq!(extract_type(&actors[0], Some(&actor_type)), "Actor");
        assert_eq!(extract_type(&actors[1], Some(&actor_type)), "Actor");
        assert_eq!(extract_type(&actors[0], Some(&path("p.missing"))), "");
    }

    #[test]
    fn test_parse_rank_cases() {
        assert_eq!(parse_rank("12."), 12);
        assert_eq!(parse_rank("1.234"), 1234);
        assert_eq!(parse_rank(" 7 "), 7);
        assert_eq!(parse_rank("abc"), 0);
        assert_eq!(parse_rank(""), 0);
        assert_eq!(parse_rank("..."), 0);
    }

    #[test]
    fn test_parse_type_cases() {
        assert_eq!(parse_type("Actor | Producer"), "Actor");
        assert_eq!(parse_type("Actor|Producer|Writer"), "Actor");
        assert_eq!(parse_type("Actor"), "Actor");
        assert_eq!(parse_type("| Producer"), "");
    }

    proptest! {
        #[test]
        fn prop_rank_ignores_dots(n in 0i64..1_000_000, dots in 0usize..4) {
            let text = format!("{n}{}", ".".repeat(dots));
            prop_assert_eq!(parse_rank(&text), n);
        }

        #[test]
        fn prop_rank_of_letters_is_zero(s in "[a-zA-Z ]{1,12}") {
            prop_assert_eq!(parse_rank(&s), 0);
        }

        #[test]
        fn prop_type_never_contains_pipe(s in "[a-zA-Z |]{0,24}") {
            let parsed = parse_type(&s);
            prop_assert!(!parsed.contains('|'));
            prop_assert_eq!(parsed.trim(), parsed.as_str());
        }
    }
}

//! Best-effort free-text input filter.
//!
//! This is a denylist, not a parser: it strips a fixed set of markup and
//! script-protocol fragments and bounds the length. It is NOT a substitute
//! for output-encoding at render time; treat it as defense in depth only.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hard cap on sanitized input length.
const MAX_INPUT_LEN: usize = 1000;

/// A single pass can unmask a pattern that was split by stripped characters
/// (e.g. `java<b>script:`), so the filter is applied to a fixed point. The
/// cap bounds work on pathological input.
const MAX_PASSES: usize = 4;

static JS_PROTOCOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("javascript: regex must compile"));

static EVENT_HANDLER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on\w+=").expect("event handler regex must compile"));

fn strip_once(input: &str) -> String {
    // ---
    let stripped: String = input.chars().filter(|c| *c != '<' && *c != '>').collect();
    let stripped = JS_PROTOCOL_RE.replace_all(&stripped, "");
    EVENT_HANDLER_RE.replace_all(&stripped, "").into_owned()
}

/// Trims whitespace, strips `<`/`>`, the `javascript:` protocol, and
/// attribute-style `on<word>=` event-handler prefixes (case-insensitive),
/// then truncates to 1000 characters.
pub fn sanitize_input(input: &str) -> String {
    // ---
    let mut current = input.trim().to_string();

    for _ in 0..MAX_PASSES {
        let next = strip_once(&current);
        if next == current {
            break;
        }
        current = next;
    }

    current.chars().take(MAX_INPUT_LEN).collect()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn passes_clean_input_through() {
        // ---
        assert_eq!(sanitize_input("Maths, period 3"), "Maths, period 3");
        assert_eq!(sanitize_input("  trimmed  "), "trimmed");
    }

    #[test]
    fn strips_angle_brackets() {
        // ---
        assert_eq!(sanitize_input("<b>bold</b>"), "bbold/b");
    }

    #[test]
    fn strips_javascript_protocol_case_insensitively() {
        // ---
        assert_eq!(sanitize_input("JaVaScRiPt:alert(1)"), "alert(1)");
    }

    #[test]
    fn strips_event_handler_prefixes() {
        // ---
        assert_eq!(sanitize_input("onclick=steal() onLoad=x"), "steal() x");
    }

    #[test]
    fn reaches_fixed_point_on_nested_patterns() {
        // ---
        // Removing the inner "javascript:" splices the surrounding halves
        // into a fresh "javascript:", which a single pass would leave behind.
        let out = sanitize_input("javascrjavascript:ipt:alert(1)");
        assert!(!out.to_lowercase().contains("javascript:"));

        // Stripping the brackets unmasks patterns within the same pass.
        let out = sanitize_input("java<>script:alert(1)");
        assert!(!out.to_lowercase().contains("javascript:"));

        let out = sanitize_input("onfoc<x>us=bad");
        assert!(!EVENT_HANDLER_RE.is_match(&out));
    }

    #[test]
    fn truncates_to_limit() {
        // ---
        let long = "a".repeat(5000);
        assert_eq!(sanitize_input(&long).len(), MAX_INPUT_LEN);
    }

    #[test]
    fn output_is_free_of_denied_patterns() {
        // ---
        let nasty = "<script>javascript:onclick=javascript:<janvascript:>x";
        let out = sanitize_input(nasty);
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.to_lowercase().contains("javascript:"));
        assert!(!EVENT_HANDLER_RE.is_match(&out));
    }
}

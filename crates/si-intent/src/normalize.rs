//! Post-detection helpers: validation and provider/OS normalization.
//!
//! All of these are pure readers over a `DetectionResult`. Nothing here
//! mutates or errors — a lookup that finds nothing returns `None`.

use si_protocol::{CloudProvider, DetectionResult};

/// Whether a detection is actionable as-is.
///
/// False when nothing was affirmatively detected, or when some category is
/// both affirmed and negated. The parser records ANY negated occurrence in
/// `negated_categories` and ANY non-negated occurrence in `categories`, so
/// a sentence like "without a database .. add a mysql instance" lands in
/// both sets and is rejected here for the caller to disambiguate.
pub fn validate_intent(result: &DetectionResult) -> bool {
    !result.is_empty() && !result.has_contradiction()
}

/// Canonical provider tag for the first matched `provider` keyword.
pub fn normalize_provider(result: &DetectionResult) -> Option<CloudProvider> {
    let keyword = result.keywords_for("provider")?.first()?.to_lowercase();
    if keyword.contains("aws") || keyword.contains("amazon") {
        Some(CloudProvider::Aws)
    } else if keyword.contains("azure") || keyword.contains("microsoft") {
        Some(CloudProvider::Azure)
    } else if keyword.contains("gcp") || keyword.contains("google") {
        Some(CloudProvider::Gcp)
    } else {
        None
    }
}

/// Display name for the first matched `os` keyword.
pub fn extract_os(result: &DetectionResult) -> Option<String> {
    let keyword = result.keywords_for("os")?.first()?;
    Some(match keyword.as_str() {
        "amazon linux" => "Amazon Linux".to_string(),
        "rhel" => "RHEL".to_string(),
        other => capitalize(other),
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::IntentParser;

    fn detect(sentence: &str) -> DetectionResult {
        IntentParser::new().detect(sentence)
    }

    // ── validate_intent ─────────────────────────────────────────

    #[test]
    fn nothing_detected_is_invalid() {
        assert!(!validate_intent(&detect("hello there")));
        assert!(!validate_intent(&detect("")));
    }

    #[test]
    fn plain_detection_is_valid() {
        assert!(validate_intent(&detect("deploy a server with mysql")));
    }

    #[test]
    fn pure_negation_is_invalid() {
        // only negated hits: nothing affirmed, so nothing to act on
        assert!(!validate_intent(&detect("no database")));
    }

    #[test]
    fn affirmed_and_negated_category_is_contradiction() {
        let result = detect("deploy a server without a database but add a mysql instance");
        assert!(result.matched("database"));
        assert!(result.is_negated("database"));
        assert!(!validate_intent(&result));
    }

    // ── normalize_provider ──────────────────────────────────────

    #[test]
    fn provider_aliases_normalize_to_one_tag() {
        for sentence in [
            "deploy on aws",
            "deploy on amazon web services",
            "use AWS for this",
        ] {
            assert_eq!(
                normalize_provider(&detect(sentence)),
                Some(CloudProvider::Aws),
                "{sentence}"
            );
        }
    }

    #[test]
    fn azure_and_gcp_aliases() {
        assert_eq!(
            normalize_provider(&detect("host it on microsoft azure")),
            Some(CloudProvider::Azure)
        );
        assert_eq!(
            normalize_provider(&detect("host it on google cloud")),
            Some(CloudProvider::Gcp)
        );
    }

    #[test]
    fn no_provider_detected_yields_none() {
        assert_eq!(normalize_provider(&detect("deploy a server")), None);
    }

    // ── extract_os ──────────────────────────────────────────────

    #[test]
    fn os_special_cases() {
        assert_eq!(
            extract_os(&detect("an amazon linux box")).as_deref(),
            Some("Amazon Linux")
        );
        assert_eq!(extract_os(&detect("a rhel box")).as_deref(), Some("RHEL"));
    }

    #[test]
    fn os_generic_capitalization() {
        assert_eq!(
            extract_os(&detect("an ubuntu server")).as_deref(),
            Some("Ubuntu")
        );
        assert_eq!(
            extract_os(&detect("a debian server")).as_deref(),
            Some("Debian")
        );
        assert_eq!(
            extract_os(&detect("a windows server")).as_deref(),
            Some("Windows")
        );
    }

    #[test]
    fn no_os_detected_yields_none() {
        assert_eq!(extract_os(&detect("deploy a server")), None);
    }
}

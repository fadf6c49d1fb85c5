use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// What kind of operation a sentence asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Provision new resources. Also the fallback when no verb matches.
    #[default]
    Create,
    /// Tear resources down.
    Delete,
    /// Change existing resources.
    Modify,
    /// Inspect or list resources.
    Query,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Modify => "modify",
            Self::Query => "query",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One category's non-negated keyword hits for a sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMatch {
    /// Category name (e.g., "compute", "database").
    pub category: String,
    /// Matched keyword texts, first-seen order, deduplicated.
    pub keywords: Vec<String>,
}

/// Structured result of intent detection for a single sentence.
///
/// `categories` holds only categories with at least one non-negated hit,
/// in catalog order of first hit. A category can simultaneously appear in
/// `categories` and `negated_categories` when different occurrences of its
/// keywords fall in different negation contexts; `si_intent::validate_intent`
/// flags that overlap as a contradiction to hand back to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Inferred operation, `create` when no verb matched.
    pub action: ActionKind,
    /// Affirmed category matches, in catalog order of first hit.
    pub categories: Vec<CategoryMatch>,
    /// Categories with at least one keyword hit in a negated context.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub negated_categories: BTreeSet<String>,
    /// The original input, retained for diagnostics.
    pub raw_sentence: String,
}

impl DetectionResult {
    /// Whether `category` has at least one non-negated keyword hit.
    pub fn matched(&self, category: &str) -> bool {
        self.categories.iter().any(|m| m.category == category)
    }

    /// Keyword hits for `category`, if it was affirmed.
    pub fn keywords_for(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|m| m.category == category)
            .map(|m| m.keywords.as_slice())
    }

    /// Whether `category` had a keyword hit in a negated context.
    pub fn is_negated(&self, category: &str) -> bool {
        self.negated_categories.contains(category)
    }

    /// Names of all affirmed categories, in match order.
    pub fn affirmed_categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|m| m.category.as_str())
    }

    /// True when nothing was affirmatively detected.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// True when some category is both affirmed and negated.
    pub fn has_contradiction(&self) -> bool {
        self.categories
            .iter()
            .any(|m| self.negated_categories.contains(&m.category))
    }
}

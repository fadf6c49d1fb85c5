//! The intent parser: keyword scanning, negation checks, action extraction.

use regex::{Regex, RegexBuilder};
use si_protocol::{ActionKind, CategoryMatch, CloudProvider, DetectionResult};

use crate::catalog::{ACTIONS, CATALOG, ActionDef, CategoryDef};
use crate::error::{IntentError, IntentResult};
use crate::negation;

struct CompiledKeyword {
    text: &'static str,
    pattern: Regex,
}

struct CompiledCategory {
    def: &'static CategoryDef,
    keywords: Vec<CompiledKeyword>,
}

struct CompiledAction {
    kind: ActionKind,
    verbs: Vec<Regex>,
}

/// Scans free text against the category catalog and action lexicon.
///
/// All patterns are compiled once at construction; detection is pure and
/// allocation-light, and a parser can be shared freely across threads.
pub struct IntentParser {
    categories: Vec<CompiledCategory>,
    actions: Vec<CompiledAction>,
}

impl IntentParser {
    /// Build a parser over the builtin tables.
    pub fn new() -> Self {
        Self::with_tables(CATALOG, ACTIONS).expect("builtin tables compile")
    }

    /// Build a parser over caller-supplied tables.
    ///
    /// Keywords and verbs are regex-escaped, so the only failure mode is
    /// a pathological pattern-size limit.
    pub fn with_tables(
        catalog: &'static [CategoryDef],
        actions: &'static [ActionDef],
    ) -> IntentResult<Self> {
        let categories = catalog
            .iter()
            .map(|def| {
                let keywords = def
                    .keywords
                    .iter()
                    .copied()
                    .map(|kw| {
                        whole_word_pattern(kw)
                            .map(|pattern| CompiledKeyword { text: kw, pattern })
                            .map_err(|source| IntentError::Pattern {
                                keyword: kw.to_string(),
                                source,
                            })
                    })
                    .collect::<IntentResult<Vec<_>>>()?;
                Ok(CompiledCategory { def, keywords })
            })
            .collect::<IntentResult<Vec<_>>>()?;

        let actions = actions
            .iter()
            .map(|def| {
                let verbs = def
                    .verbs
                    .iter()
                    .copied()
                    .map(|verb| {
                        whole_word_pattern(verb).map_err(|source| IntentError::Verb {
                            verb: verb.to_string(),
                            source,
                        })
                    })
                    .collect::<IntentResult<Vec<_>>>()?;
                Ok(CompiledAction {
                    kind: def.kind,
                    verbs,
                })
            })
            .collect::<IntentResult<Vec<_>>>()?;

        Ok(Self {
            categories,
            actions,
        })
    }

    /// Detect categories, negations, and the requested action in a sentence.
    ///
    /// Never fails: an empty or unrecognized sentence yields a result with
    /// no categories and the default `create` action.
    pub fn detect(&self, sentence: &str) -> DetectionResult {
        let lower = sentence.to_lowercase();
        let action = self.extract_action(&lower);

        let mut categories: Vec<CategoryMatch> = Vec::new();
        let mut negated = std::collections::BTreeSet::new();

        for category in &self.categories {
            for keyword in &category.keywords {
                for hit in keyword.pattern.find_iter(&lower) {
                    if negation::in_negated_window(&lower, hit.start()) {
                        tracing::debug!(
                            category = category.def.name,
                            keyword = keyword.text,
                            offset = hit.start(),
                            "keyword hit in negated context"
                        );
                        negated.insert(category.def.name.to_string());
                    } else {
                        tracing::debug!(
                            category = category.def.name,
                            keyword = keyword.text,
                            offset = hit.start(),
                            "keyword hit"
                        );
                        record_keyword(&mut categories, category.def.name, keyword.text);
                    }
                }
            }
        }

        DetectionResult {
            action,
            categories,
            negated_categories: negated,
            raw_sentence: sentence.to_string(),
        }
    }

    /// First action kind (in lexicon priority order) with a verb match.
    fn extract_action(&self, lower: &str) -> ActionKind {
        for action in &self.actions {
            if action.verbs.iter().any(|verb| verb.is_match(lower)) {
                return action.kind;
            }
        }
        ActionKind::default()
    }

    /// Category names with their keyword lists, in scan order.
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        self.categories.iter().map(|c| (c.def.name, c.def.keywords))
    }

    /// Terraform resource identifiers a category maps to for a provider.
    pub fn resources_for(&self, category: &str, provider: CloudProvider) -> &'static [&'static str] {
        self.categories
            .iter()
            .find(|c| c.def.name == category)
            .and_then(|c| {
                c.def
                    .resources
                    .iter()
                    .find(|(p, _)| *p == provider)
                    .map(|(_, resources)| *resources)
            })
            .unwrap_or(&[])
    }
}

impl Default for IntentParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive whole-word (or whole-phrase) pattern for a keyword.
fn whole_word_pattern(keyword: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
        .case_insensitive(true)
        .build()
}

/// Append `keyword` to the entry for `category`, creating the entry on the
/// first non-negated hit and deduplicating by keyword text.
fn record_keyword(categories: &mut Vec<CategoryMatch>, category: &str, keyword: &str) {
    match categories.iter_mut().find(|m| m.category == category) {
        Some(entry) => {
            if !entry.keywords.iter().any(|k| k == keyword) {
                entry.keywords.push(keyword.to_string());
            }
        }
        None => categories.push(CategoryMatch {
            category: category.to_string(),
            keywords: vec![keyword.to_string()],
        }),
    }
}

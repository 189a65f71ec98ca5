//! Content linting.
//!
//! Errors break the page contract (dangling nav anchor, unusable image URL,
//! empty required text, duplicate list key). Warnings are content smells that
//! still render (recommended-tier count, doubled whitespace left by a missing
//! value).

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use crate::catalog::{BlockKey, Catalog};
use crate::section::{NavError, SectionId};

/// How bad an [`Issue`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// One finding about a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("{location}: required text is empty")]
    EmptyField { location: String },

    #[error("{location}: `{url}` is not an absolute http(s) URL")]
    MalformedUrl { location: String, url: String },

    #[error("{location}: {source}")]
    DanglingNav {
        location: String,
        #[source]
        source: NavError,
    },

    #[error("{location}: duplicate key `{key}`")]
    DuplicateKey { location: String, key: String },

    #[error("pricing: {count} tiers are marked recommended, expected exactly one")]
    RecommendedCount { count: usize },

    #[error("{location}: doubled whitespace, probably a missing value")]
    DoubledWhitespace { location: String },
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::RecommendedCount { .. } | Issue::DoubledWhitespace { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// All findings for one catalog, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Catalog {
    /// Lints the catalog.
    pub fn validate(&self) -> Report {
        let mut issues = Vec::new();

        check_nav(&mut issues, "nav", &self.nav);
        check_nav(&mut issues, "footer.quick_links", &self.footer.quick_links);

        check_url(&mut issues, "hero.image_url", &self.hero.image_url);
        check_url(&mut issues, "about.image_url", &self.about.image_url);
        check_url(&mut issues, "venue.image_url", &self.venue.image_url);

        for (i, speaker) in self.speakers.iter().enumerate() {
            check_text(&mut issues, &format!("speakers[{i}].name"), &speaker.name);
            check_url(&mut issues, &format!("speakers[{i}].image_url"), &speaker.image_url);
        }
        for (i, item) in self.schedule.iter().enumerate() {
            check_text(&mut issues, &format!("schedule[{i}].title"), &item.title);
        }
        for (i, tier) in self.pricing.iter().enumerate() {
            check_text(&mut issues, &format!("pricing[{i}].name"), &tier.name);
        }
        for (i, entry) in self.faq.iter().enumerate() {
            check_text(&mut issues, &format!("faq[{i}].question"), &entry.question);
            check_text(&mut issues, &format!("faq[{i}].answer"), &entry.answer);
        }
        for (i, link) in self.footer.social.iter().enumerate() {
            check_url(&mut issues, &format!("footer.social[{i}].url"), &link.url);
        }

        check_keys(&mut issues, "about.stats", &self.about.stats);
        check_keys(&mut issues, "speakers", &self.speakers);
        check_keys(&mut issues, "schedule", &self.schedule);
        check_keys(&mut issues, "pricing", &self.pricing);
        check_keys(&mut issues, "sponsors", &self.sponsors);
        check_keys(&mut issues, "faq", &self.faq);

        let recommended = self.recommended_tiers().count();
        if !self.pricing.is_empty() && recommended != 1 {
            issues.push(Issue::RecommendedCount { count: recommended });
        }

        // Serialized form gives every string field a path for free.
        if let Ok(value) = serde_json::to_value(self) {
            walk_strings(&value, String::new(), &mut |location: String, text: &str| {
                if text.contains("  ") {
                    issues.push(Issue::DoubledWhitespace { location });
                }
            });
        }

        Report { issues }
    }
}

fn check_text(issues: &mut Vec<Issue>, location: &str, text: &str) {
    if text.trim().is_empty() {
        issues.push(Issue::EmptyField {
            location: location.to_string(),
        });
    }
}

fn check_url(issues: &mut Vec<Issue>, location: &str, raw: &str) {
    let ok = url::Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
        .unwrap_or(false);
    if !ok {
        issues.push(Issue::MalformedUrl {
            location: location.to_string(),
            url: raw.to_string(),
        });
    }
}

fn check_nav(issues: &mut Vec<Issue>, location: &str, labels: &[String]) {
    for (i, label) in labels.iter().enumerate() {
        if let Err(source) = SectionId::from_nav_label(label) {
            issues.push(Issue::DanglingNav {
                location: format!("{location}[{i}]"),
                source,
            });
        }
    }
}

fn check_keys<T: BlockKey>(issues: &mut Vec<Issue>, location: &str, records: &[T]) {
    let mut seen = HashSet::new();
    for record in records {
        let key = record.block_key();
        if !seen.insert(key) {
            issues.push(Issue::DuplicateKey {
                location: location.to_string(),
                key: key.to_string(),
            });
        }
    }
}

fn walk_strings(value: &Value, path: String, visit: &mut impl FnMut(String, &str)) {
    match value {
        Value::String(text) => visit(path, text),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                walk_strings(item, format!("{path}[{i}]"), visit);
            }
        }
        Value::Object(fields) => {
            for (name, field) in fields {
                let child = if path.is_empty() {
                    name.clone()
                } else {
                    format!("{path}.{name}")
                };
                walk_strings(field, child, visit);
            }
        }
        _ => {}
    }
}

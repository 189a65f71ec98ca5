//! Content catalog.
//!
//! All page copy lives in one immutable structure, deserialized once at
//! startup. The shipped content is embedded from `content/catalog.json`; the
//! CLI can load and lint any other file with the same shape.
//!
//! List order in the file is display order. Nothing here sorts or filters.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reveal::MotionConfig;

const BUILTIN_CATALOG: &str = include_str!("../content/catalog.json");

/// Failures while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The JSON did not match the catalog shape.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The whole page's content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub event: EventInfo,
    pub nav: Vec<String>,
    pub hero: HeroBanner,
    pub about: About,
    pub speakers: Vec<SpeakerRecord>,
    pub schedule: Vec<ScheduleItem>,
    pub pricing: Vec<PricingTier>,
    pub venue: Venue,
    pub sponsors: Vec<SponsorEntry>,
    pub faq: Vec<FaqEntry>,
    pub footer: Footer,
    pub motion: MotionConfig,
}

impl Catalog {
    /// Parses the catalog compiled into the binary.
    pub fn builtin() -> Result<Catalog, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a catalog file.
    pub fn load_from_path(path: &Path) -> Result<Catalog, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Pretty JSON, suitable as a template for real content.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Pricing tiers flagged as recommended.
    pub fn recommended_tiers(&self) -> impl Iterator<Item = &PricingTier> {
        self.pricing.iter().filter(|tier| tier.is_recommended)
    }
}

/// Event-wide copy and document metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventInfo {
    pub name: String,
    pub tagline: String,
    pub motto: String,
    pub document_title: String,
    pub meta_description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroBanner {
    pub image_url: String,
    pub image_alt: String,
    pub call_to_action: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub heading: String,
    pub body: String,
    pub stats: Vec<Stat>,
    pub image_url: String,
    pub image_alt: String,
}

/// Headline number in the about section ("50+ Speakers").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerRecord {
    pub name: String,
    pub role: String,
    pub image_url: String,
}

/// One schedule row. `time` is a display label, never parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time: String,
    pub title: String,
    pub speaker_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price_label: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub is_recommended: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Venue {
    pub name: String,
    pub address_lines: Vec<String>,
    pub amenities: Vec<Amenity>,
    pub image_url: String,
    pub image_alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub icon: AmenityIcon,
    pub text: String,
}

/// Glyph shown next to a venue amenity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmenityIcon {
    Location,
    Parking,
}

/// Sponsor tile. `icon_ref` is a Simple Icons slug.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorEntry {
    pub display_name: String,
    pub icon_ref: String,
}

impl SponsorEntry {
    /// CDN URL of the sponsor glyph, tinted for the dark background.
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon_ref)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    /// Nav labels repeated in the footer; resolved like the main nav.
    pub quick_links: Vec<String>,
    pub social: Vec<SocialLink>,
    pub newsletter_placeholder: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon_ref: String,
}

impl SocialLink {
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon_ref)
    }
}

fn icon_url(slug: &str) -> String {
    format!("https://cdn.simpleicons.org/{slug}/9ca3af")
}

/// Stable identity of a rendered block (used as the list key).
pub trait BlockKey {
    /// Key that must be unique within its list.
    fn block_key(&self) -> &str;
}

impl BlockKey for Stat {
    fn block_key(&self) -> &str {
        &self.label
    }
}

impl BlockKey for SpeakerRecord {
    fn block_key(&self) -> &str {
        &self.name
    }
}

impl BlockKey for ScheduleItem {
    fn block_key(&self) -> &str {
        &self.time
    }
}

impl BlockKey for PricingTier {
    fn block_key(&self) -> &str {
        &self.name
    }
}

impl BlockKey for SponsorEntry {
    fn block_key(&self) -> &str {
        &self.display_name
    }
}

impl BlockKey for FaqEntry {
    fn block_key(&self) -> &str {
        &self.question
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        assert_eq!(catalog.event.name, "TechCon 2024");
        assert_eq!(catalog.speakers.len(), 6);
        assert_eq!(catalog.schedule.len(), 4);
        assert_eq!(catalog.pricing.len(), 3);
        assert_eq!(catalog.sponsors.len(), 8);
        assert_eq!(catalog.faq.len(), 4);
    }

    #[test]
    fn builtin_speakers_keep_literal_order() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        let surnames: Vec<_> = catalog
            .speakers
            .iter()
            .filter_map(|s| s.name.split_whitespace().last())
            .collect();
        assert_eq!(
            surnames,
            vec!["Chang", "Johnson", "Rodriguez", "Wilson", "Anderson", "Hughes"]
        );
    }

    #[test]
    fn only_premium_is_recommended() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        let recommended: Vec<_> = catalog
            .recommended_tiers()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(recommended, vec!["Premium"]);
    }

    #[test]
    fn refund_answer_has_no_blank_number() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        let refund = catalog
            .faq
            .iter()
            .find(|f| f.question.contains("refund"))
            .expect("refund question");
        assert!(!refund.answer.contains("  "));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = Catalog::from_json(r#"{ "event": { "name": "Mini" } }"#).expect("parses");
        assert_eq!(catalog.event.name, "Mini");
        assert!(catalog.speakers.is_empty());
        assert_eq!(catalog.motion, MotionConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_from_path_reads_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(
            file,
            r#"{{ "speakers": [ {{ "name": "Ada", "role": "Keynote", "image_url": "https://example.com/ada.jpg" }} ] }}"#
        )
        .expect("write");

        let catalog = Catalog::load_from_path(&path).expect("loads");
        assert_eq!(catalog.speakers[0].name, "Ada");
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = Catalog::load_from_path(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn dump_roundtrips_builtin() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        let json = catalog.to_json_pretty().expect("serializes");
        assert_eq!(Catalog::from_json(&json).expect("reparses"), catalog);
    }

    #[test]
    fn sponsor_icon_url_uses_slug() {
        let sponsor = SponsorEntry {
            display_name: "Google".into(),
            icon_ref: "google".into(),
        };
        assert_eq!(sponsor.icon_url(), "https://cdn.simpleicons.org/google/9ca3af");
    }
}

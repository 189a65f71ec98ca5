//! Page sections and the in-page navigation map.
//!
//! Every nav label, lower-cased, must be the anchor of an existing section.
//! [`SectionId::from_nav_label`] is the only place that mapping is decided.

use std::fmt;

use thiserror::Error;

/// Every section of the landing page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Full-screen banner with the call to action.
    Hero,
    /// Event description and headline stats.
    About,
    /// Featured speaker cards.
    Speakers,
    /// Event schedule rows.
    Schedule,
    /// Pass tiers.
    Pricing,
    /// Venue address and photo.
    Venue,
    /// Sponsor logo tiles.
    Sponsors,
    /// Frequently asked questions.
    Faq,
    /// Quick links, social links and newsletter stub.
    Footer,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 9] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Speakers,
        SectionId::Schedule,
        SectionId::Pricing,
        SectionId::Venue,
        SectionId::Sponsors,
        SectionId::Faq,
        SectionId::Footer,
    ];

    /// Anchor id used for `#fragment` navigation. Sections that are not
    /// navigation targets have none.
    pub const fn anchor(self) -> Option<&'static str> {
        match self {
            SectionId::About => Some("about"),
            SectionId::Speakers => Some("speakers"),
            SectionId::Schedule => Some("schedule"),
            SectionId::Pricing => Some("pricing"),
            SectionId::Venue => Some("venue"),
            SectionId::Faq => Some("faq"),
            SectionId::Hero | SectionId::Sponsors | SectionId::Footer => None,
        }
    }

    /// `#anchor` href, if the section is a navigation target.
    pub fn href(self) -> Option<String> {
        self.anchor().map(|anchor| format!("#{anchor}"))
    }

    /// Looks a section up by its anchor id (exact match).
    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        Self::ALL.into_iter().find(|s| s.anchor() == Some(anchor))
    }

    /// Resolves a nav label ("FAQ", "Speakers") to its section.
    pub fn from_nav_label(label: &str) -> Result<SectionId, NavError> {
        let anchor = label.trim().to_lowercase();
        Self::from_anchor(&anchor).ok_or_else(|| NavError::UnknownLabel {
            label: label.to_string(),
        })
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Speakers => "speakers",
            SectionId::Schedule => "schedule",
            SectionId::Pricing => "pricing",
            SectionId::Venue => "venue",
            SectionId::Sponsors => "sponsors",
            SectionId::Faq => "faq",
            SectionId::Footer => "footer",
        };
        f.write_str(name)
    }
}

/// Navigation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The label has no matching section anchor (a dangling link).
    #[error("nav label `{label}` does not match any section anchor")]
    UnknownLabel {
        /// Label as written in the catalog.
        label: String,
    },
}

/// A resolved navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Target section.
    pub target: SectionId,
}

impl NavLink {
    /// Resolves `label` against the section map.
    pub fn resolve(label: &str) -> Result<NavLink, NavError> {
        Ok(NavLink {
            label: label.to_string(),
            target: SectionId::from_nav_label(label)?,
        })
    }

    /// `#anchor` href of the target section.
    pub fn href(&self) -> String {
        self.target.href().unwrap_or_else(|| "#".to_string())
    }
}

/// Resolves a list of labels, keeping order. Fails on the first dangling one.
pub fn resolve_links<S: AsRef<str>>(labels: &[S]) -> Result<Vec<NavLink>, NavError> {
    labels.iter().map(|l| NavLink::resolve(l.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_label_resolves_to_a_section() {
        let labels = ["About", "Speakers", "Schedule", "Pricing", "Venue", "FAQ"];
        for label in labels {
            let section = SectionId::from_nav_label(label).expect("label resolves");
            assert_eq!(section.anchor(), Some(label.to_lowercase().as_str()));
        }
    }

    #[test]
    fn unknown_label_is_an_error() {
        let err = SectionId::from_nav_label("Tickets").unwrap_err();
        assert_eq!(
            err,
            NavError::UnknownLabel {
                label: "Tickets".into()
            }
        );
        assert!(err.to_string().contains("Tickets"));
    }

    #[test]
    fn sections_without_anchor_are_not_nav_targets() {
        assert!(SectionId::from_nav_label("Hero").is_err());
        assert!(SectionId::from_nav_label("Sponsors").is_err());
        assert_eq!(SectionId::Footer.href(), None);
    }

    #[test]
    fn anchors_are_unique() {
        let mut anchors: Vec<_> = SectionId::ALL.iter().filter_map(|s| s.anchor()).collect();
        let before = anchors.len();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), before);
        assert_eq!(before, 6);
    }

    #[test]
    fn resolve_links_keeps_order() {
        let links = resolve_links(&["Schedule", "About"]).expect("resolves");
        assert_eq!(links[0].href(), "#schedule");
        assert_eq!(links[1].target, SectionId::About);
    }
}

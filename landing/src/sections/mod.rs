// Landing page sections

mod about;
mod faq;
mod footer;
mod hero;
mod nav;
mod pricing;
mod schedule;
mod speakers;
mod sponsors;
mod venue;

pub use about::AboutSection;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use pricing::Pricing;
pub use schedule::Schedule;
pub use speakers::Speakers;
pub use sponsors::Sponsors;
pub use venue::VenueSection;

use techcon::section::NavLink;
use tracing::warn;

/// Anchor id of a section, empty for sections that are not nav targets.
fn anchor(section: techcon::SectionId) -> &'static str {
    section.anchor().unwrap_or_default()
}

/// Resolves link labels in order. Dangling labels are logged and not rendered.
fn resolve_or_drop(labels: &[String], place: &'static str) -> Vec<NavLink> {
    labels
        .iter()
        .filter_map(|label| match NavLink::resolve(label) {
            Ok(link) => Some(link),
            Err(err) => {
                warn!(%err, place, "dropping link");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use techcon::catalog::Catalog;

    #[test]
    fn builtin_links_all_render_in_order() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        let hrefs: Vec<_> = resolve_or_drop(&catalog.nav, "nav")
            .iter()
            .map(NavLink::href)
            .collect();
        assert_eq!(
            hrefs,
            vec!["#about", "#speakers", "#schedule", "#pricing", "#venue", "#faq"]
        );

        let footer = resolve_or_drop(&catalog.footer.quick_links, "footer");
        assert_eq!(footer.len(), catalog.footer.quick_links.len());
    }

    #[test]
    fn dangling_label_is_dropped() {
        let labels = vec!["Tickets".to_string(), "Venue".to_string()];
        let links = resolve_or_drop(&labels, "nav");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "Venue");
        assert_eq!(links[0].href(), "#venue");
    }
}

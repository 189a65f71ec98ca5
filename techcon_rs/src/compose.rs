//! Ordered, templated rendering of catalog lists.
//!
//! One block per record, in input order, no filtering or deduplication. The
//! template sees the record together with its position and reveal delay, so a
//! section can cascade its children without tracking indices itself.

use std::time::Duration;

use crate::reveal::Stagger;

/// What a template receives for each record.
#[derive(Debug)]
pub struct Slot<'a, T> {
    /// Position in the source list.
    pub index: usize,
    /// Reveal delay for this block (`index * stagger step`).
    pub delay: Duration,
    /// The record itself.
    pub record: &'a T,
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<T> Slot<'_, T> {
    /// Delay formatted for an inline `transition-delay`.
    pub fn delay_css(&self) -> String {
        format!("{}ms", self.delay.as_millis())
    }
}

/// Renders every record through `template`, preserving order.
pub fn compose<'a, T, B>(
    records: &'a [T],
    stagger: Stagger,
    mut template: impl FnMut(Slot<'a, T>) -> B,
) -> Vec<B> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            template(Slot {
                index,
                delay: stagger.delay_for(index),
                record,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn speaker_cards_follow_catalog_order() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        let cards = compose(
            &catalog.speakers,
            catalog.motion.container_stagger(),
            |slot| format!("{}:{}", slot.index, slot.record.name),
        );
        assert_eq!(
            cards,
            vec![
                "0:Michael Chang",
                "1:Sarah Johnson",
                "2:Elena Rodriguez",
                "3:David Wilson",
                "4:James Anderson",
                "5:Robert Hughes",
            ]
        );
    }

    #[test]
    fn every_catalog_list_keeps_input_order() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        let none = Stagger::NONE;

        let rows = compose(&catalog.schedule, none, |s| s.record.time.as_str());
        assert_eq!(rows, vec!["9:00 AM", "10:30 AM", "1:00 PM", "3:30 PM"]);

        let tiers = compose(&catalog.pricing, none, |s| s.record.name.as_str());
        assert_eq!(tiers, vec!["Early Bird", "Premium", "Enterprise"]);

        let sponsors = compose(&catalog.sponsors, none, |s| s.record.display_name.as_str());
        assert_eq!(sponsors.first(), Some(&"Microsoft"));
        assert_eq!(sponsors.last(), Some(&"Oracle"));

        let faq = compose(&catalog.faq, none, |s| s.index);
        assert_eq!(faq, vec![0, 1, 2, 3]);
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let records = ["a", "a", "b"];
        let out = compose(&records, Stagger::NONE, |s| *s.record);
        assert_eq!(out, vec!["a", "a", "b"]);
    }

    #[test]
    fn slots_carry_stagger_delay() {
        let records = [(); 3];
        let stagger = Stagger::new(Duration::from_millis(100));
        let delays = compose(&records, stagger, |s| s.delay_css());
        assert_eq!(delays, vec!["0ms", "100ms", "200ms"]);
    }

    #[test]
    fn empty_list_renders_nothing() {
        let records: [u8; 0] = [];
        assert!(compose(&records, Stagger::NONE, |s| s.index).is_empty());
    }
}

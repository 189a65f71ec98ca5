//! Mobile navigation menu visibility.

use tracing::debug;

use crate::section::{NavError, SectionId};

/// Whether the mobile nav list is shown. Closed on page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    /// Whether the menu is currently rendered.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flips visibility (the hamburger button). Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "menu toggled");
        self.open
    }

    /// Closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// A nav link was clicked: close the menu and resolve its target.
    ///
    /// The menu closes even when the label is dangling; the click already
    /// happened.
    pub fn select(&mut self, label: &str) -> Result<SectionId, NavError> {
        self.close();
        SectionId::from_nav_label(label)
    }
}

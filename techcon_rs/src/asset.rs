//! Image load state and placeholder fallback.
//!
//! Images are fetched by the host; the page only hears `load` or `error`. A
//! failed image is swapped for a placeholder that keeps the card's box, so one
//! broken URL never blanks a section.

use tracing::warn;

/// Load state of one `<img>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageSlot {
    /// Requested, no event yet.
    #[default]
    Pending,
    /// The host reported `load`.
    Loaded,
    /// The host reported `error`. Terminal.
    Failed,
}

/// What to draw in an image slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// Keep the `<img>` pointing at the URL.
    Remote(&'a str),
    /// Draw the fallback instead.
    Placeholder,
}

impl ImageSlot {
    /// The image finished loading. Ignored once failed.
    pub fn on_load(&mut self) {
        if *self == ImageSlot::Pending {
            *self = ImageSlot::Loaded;
        }
    }

    /// The image could not be loaded.
    pub fn on_error(&mut self, url: &str) {
        if *self != ImageSlot::Failed {
            warn!(url, "image failed to load, showing placeholder");
            *self = ImageSlot::Failed;
        }
    }

    /// Whether the placeholder is showing.
    pub const fn is_failed(&self) -> bool {
        matches!(self, ImageSlot::Failed)
    }

    /// Source to render for `url`. Blank URLs go straight to the placeholder.
    pub fn source<'a>(&self, url: &'a str) -> ImageSource<'a> {
        if self.is_failed() || url.trim().is_empty() {
            ImageSource::Placeholder
        } else {
            ImageSource::Remote(url)
        }
    }
}

/// Up to two initials for a name-based placeholder ("Michael Chang" -> "MC").
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let picked = match words.as_slice() {
        [] => return String::new(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    picked
        .into_iter()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://cdn.example.com/speaker.jpg";

    #[test]
    fn pending_image_renders_remote() {
        let slot = ImageSlot::default();
        assert_eq!(slot.source(URL), ImageSource::Remote(URL));
    }

    #[test]
    fn unreachable_image_falls_back_to_placeholder() {
        let mut slot = ImageSlot::default();
        slot.on_error(URL);
        assert!(slot.is_failed());
        assert_eq!(slot.source(URL), ImageSource::Placeholder);
    }

    #[test]
    fn failure_is_terminal() {
        let mut slot = ImageSlot::default();
        slot.on_error(URL);
        slot.on_load();
        assert_eq!(slot, ImageSlot::Failed);
    }

    #[test]
    fn loaded_image_can_still_fail() {
        // srcset swaps can error after a first successful load
        let mut slot = ImageSlot::default();
        slot.on_load();
        assert_eq!(slot, ImageSlot::Loaded);
        slot.on_error(URL);
        assert_eq!(slot.source(URL), ImageSource::Placeholder);
    }

    #[test]
    fn blank_url_uses_placeholder() {
        assert_eq!(ImageSlot::default().source("  "), ImageSource::Placeholder);
    }

    #[test]
    fn initials_from_names() {
        assert_eq!(initials("Michael Chang"), "MC");
        assert_eq!(initials("Elena Maria Rodriguez"), "ER");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("   "), "");
    }
}

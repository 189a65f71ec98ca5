//! # techcon
//!
//! Platform-independent core of the TechCon 2024 landing page.
//!
//! The page itself is rendered by the `techcon-landing` Leptos crate. Everything
//! that does not need a DOM lives here so it can be tested natively and reused
//! by the `techcon` content CLI:
//!
//! - [`catalog`] - the immutable content catalog, loaded once at startup
//! - [`compose`] - ordered, templated rendering of catalog lists
//! - [`reveal`] - one-shot viewport reveal state machine and stagger timing
//! - [`menu`] - mobile menu visibility flag
//! - [`section`] - section identifiers and the nav label to anchor map
//! - [`asset`] - image load state and placeholder fallback
//! - [`validate`] - content linting (errors and warnings)
//!
//! ## Quick Start
//!
//! ```rust
//! use techcon::catalog::Catalog;
//! use techcon::compose::compose;
//!
//! let catalog = Catalog::builtin().expect("embedded catalog parses");
//! let stagger = catalog.motion.container_stagger();
//!
//! let names = compose(&catalog.speakers, stagger, |slot| slot.record.name.clone());
//! assert_eq!(names.first().map(String::as_str), Some("Michael Chang"));
//! ```

pub mod asset;
pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod compose;
pub mod menu;
pub mod reveal;
pub mod section;
pub mod validate;

pub use catalog::{Catalog, CatalogError};
pub use compose::{Slot, compose};
pub use menu::MenuToggle;
pub use reveal::{IntersectionHost, MotionConfig, RevealController, RevealState, Stagger};
pub use section::{NavError, SectionId};
pub use validate::{Issue, Report, Severity};

//! One-shot entrance reveal.
//!
//! Each revealing section owns a [`RevealController`]. It starts `Hidden`,
//! becomes `Visible` the first time the host reports the section intersecting
//! the viewport, and then asks the host to stop observing. `Visible` is
//! terminal: later observations are ignored, so re-scrolling never replays the
//! animation.
//!
//! The host side (IntersectionObserver in the browser, a recorder in tests) is
//! reached through [`IntersectionHost`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Presentation state of a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Not yet seen; rendered with the pre-animation styles.
    #[default]
    Hidden,
    /// Seen at least once. Terminal.
    Visible,
}

impl RevealState {
    /// Value for the `data-reveal` attribute the stylesheet keys on.
    pub const fn as_str(self) -> &'static str {
        match self {
            RevealState::Hidden => "hidden",
            RevealState::Visible => "visible",
        }
    }
}

/// Viewport observation capability provided by the display host.
pub trait IntersectionHost {
    /// Stop delivering visibility updates for the observed section.
    fn unobserve(&mut self);
}

/// A completed `Hidden -> Visible` transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State before the observation.
    pub from: RevealState,
    /// State after the observation.
    pub to: RevealState,
}

/// Per-section reveal state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealController {
    state: RevealState,
    observing: bool,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealController {
    /// A hidden section that is being observed.
    pub const fn new() -> Self {
        Self {
            state: RevealState::Hidden,
            observing: true,
        }
    }

    /// Current presentation state.
    pub const fn state(&self) -> RevealState {
        self.state
    }

    /// Whether the section has been revealed.
    pub const fn is_visible(&self) -> bool {
        matches!(self.state, RevealState::Visible)
    }

    /// Whether the controller still accepts observations.
    pub const fn is_observing(&self) -> bool {
        self.observing
    }

    /// Feeds one visibility report from the host.
    ///
    /// Returns the transition if this report revealed the section. The host is
    /// told to unobserve exactly once, on that transition.
    pub fn observe<H>(&mut self, intersecting: bool, host: &mut H) -> Option<Transition>
    where
        H: IntersectionHost + ?Sized,
    {
        if !self.observing || !intersecting {
            return None;
        }

        let from = self.state;
        self.state = RevealState::Visible;
        self.observing = false;
        host.unobserve();
        debug!("section revealed");

        Some(Transition {
            from,
            to: self.state,
        })
    }

    /// The section unmounted. Stops observing without revealing and releases
    /// the host if it was still watching.
    pub fn detach<H>(&mut self, host: &mut H)
    where
        H: IntersectionHost + ?Sized,
    {
        if self.observing {
            self.observing = false;
            host.unobserve();
        }
    }
}

/// Fixed delay between consecutive children of a revealing section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stagger {
    step: Duration,
}

impl Stagger {
    /// No cascade; every child appears together.
    pub const NONE: Stagger = Stagger {
        step: Duration::ZERO,
    };

    /// Cascade with `step` between children.
    pub const fn new(step: Duration) -> Self {
        Self { step }
    }

    /// Delay between two consecutive children.
    pub const fn step(&self) -> Duration {
        self.step
    }

    /// Delay before child `index` starts its reveal (`index * step`).
    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.step.saturating_mul(index)
    }
}

/// Animation timing constants. Part of the content catalog so timing can be
/// tuned without touching code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Stagger between cards of a container section, in milliseconds.
    pub stagger_ms: u64,
    /// Stagger between schedule rows, in milliseconds.
    pub row_stagger_ms: u64,
    /// Length of one child's reveal animation, in milliseconds.
    pub duration_ms: u64,
    /// Distance a child travels while revealing, in pixels.
    pub offset_px: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            stagger_ms: 300,
            row_stagger_ms: 100,
            duration_ms: 500,
            offset_px: 20,
        }
    }
}

impl MotionConfig {
    /// Cascade used by card grids (speakers, stats, pricing, sponsors, FAQ).
    pub fn container_stagger(&self) -> Stagger {
        Stagger::new(Duration::from_millis(self.stagger_ms))
    }

    /// Cascade used by schedule rows.
    pub fn row_stagger(&self) -> Stagger {
        Stagger::new(Duration::from_millis(self.row_stagger_ms))
    }

    /// Reveal animation length.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

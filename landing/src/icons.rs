//! Inline SVG outline icons (24x24, stroked).

use leptos::prelude::*;
use techcon::catalog::AmenityIcon;

/// Renders a stroked icon from one or more path data strings.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute values)
    paths: &'static [&'static str],
    /// Additional CSS class names
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            {paths
                .iter()
                .map(|d| {
                    view! {
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=*d></path>
                    }
                })
                .collect::<Vec<_>>()}
        </svg>
    }
}

/// Hamburger menu
pub const ICON_MENU: &[&str] = &["M4 6h16M4 12h16M4 18h16"];

/// Close (x)
pub const ICON_CLOSE: &[&str] = &["M6 18L18 6M6 6l12 12"];

/// Check mark for pricing features
pub const ICON_CHECK: &[&str] = &["M5 13l4 4L19 7"];

/// Map pin
pub const ICON_LOCATION: &[&str] = &[
    "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
    "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
];

/// Card / parking pass
pub const ICON_PARKING: &[&str] = &[
    "M3 10h18M7 15h1m4 0h1m-7 4h12a3 3 0 003-3V8a3 3 0 00-3-3H6a3 3 0 00-3 3v8a3 3 0 003 3z",
];

pub fn amenity_icon(icon: AmenityIcon) -> &'static [&'static str] {
    match icon {
        AmenityIcon::Location => ICON_LOCATION,
        AmenityIcon::Parking => ICON_PARKING,
    }
}

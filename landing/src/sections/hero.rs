use leptos::prelude::*;
use techcon::catalog::{EventInfo, HeroBanner};

use crate::image::FallbackImage;

/// Full-screen banner. Plays its intro once on load (CSS keyframes), it is
/// always in view so it needs no reveal controller.
#[component]
pub fn Hero(event: EventInfo, banner: HeroBanner) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <FallbackImage
                    src=banner.image_url
                    alt=banner.image_alt
                    class="hero-image"
                    placeholder=None
                />
                <div class="hero-glass"></div>
            </div>
            <div class="hero-content">
                <h1 class="hero-title">{event.name}</h1>
                <p class="hero-tagline">{event.tagline}</p>
                <a href="#pricing" class="btn btn-primary hero-cta">{banner.call_to_action}</a>
            </div>
        </section>
    }
}

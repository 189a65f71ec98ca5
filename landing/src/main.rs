// TechCon 2024 Landing Page - Leptos 0.8 Edition

mod icons;
mod image;
mod reveal;
mod sections;
mod styles;

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use sections::*;
use techcon::catalog::Catalog;
use techcon::reveal::MotionConfig;
use techcon::validate::Severity;
use tracing::{error, info, warn};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let catalog = load_catalog();
    leptos::mount::mount_to_body(move || view! { <App catalog=catalog /> });
}

/// Parses and lints the embedded content. A broken catalog renders an empty
/// page shell instead of panicking.
fn load_catalog() -> Catalog {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(%err, "content catalog unusable, rendering empty page");
            return Catalog::default();
        }
    };

    for issue in catalog.validate().issues {
        match issue.severity() {
            Severity::Error => error!(%issue, "content error"),
            Severity::Warning => warn!(%issue, "content warning"),
        }
    }
    info!(
        speakers = catalog.speakers.len(),
        sessions = catalog.schedule.len(),
        "catalog loaded"
    );
    catalog
}

/// Motion constants exposed to the stylesheet.
fn motion_vars(motion: &MotionConfig) -> String {
    format!(
        "--reveal-duration: {}ms; --reveal-offset: {}px;",
        motion.duration_ms, motion.offset_px
    )
}

#[component]
fn App(catalog: Catalog) -> impl IntoView {
    provide_meta_context();

    let Catalog {
        event,
        nav,
        hero,
        about,
        speakers,
        schedule,
        pricing,
        venue,
        sponsors,
        faq,
        footer,
        motion,
    } = catalog;

    view! {
        <Title text=event.document_title.clone() />
        <Meta name="description" content=event.meta_description.clone() />
        <style>{styles::LANDING_CSS}</style>

        <div class="page" style=motion_vars(&motion)>
            <Nav brand=event.name.clone() labels=nav />
            <main>
                <Hero event=event.clone() banner=hero />
                <AboutSection about=about motion=motion />
                <Speakers speakers=speakers motion=motion />
                <Schedule items=schedule motion=motion />
                <Pricing tiers=pricing motion=motion />
                <VenueSection venue=venue />
                <Sponsors sponsors=sponsors motion=motion />
                <Faq entries=faq motion=motion />
            </main>
            <Footer event=event footer=footer />
        </div>
    }
}

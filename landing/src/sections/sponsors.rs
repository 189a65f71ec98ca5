use leptos::html;
use leptos::prelude::*;
use techcon::catalog::SponsorEntry;
use techcon::compose::compose;
use techcon::reveal::MotionConfig;

use crate::image::FallbackImage;
use crate::reveal::use_reveal;

#[component]
pub fn Sponsors(sponsors: Vec<SponsorEntry>, motion: MotionConfig) -> impl IntoView {
    let group = NodeRef::<html::Div>::new();
    let revealed = use_reveal(group);

    let tiles = compose(&sponsors, motion.container_stagger(), |slot| {
        let sponsor = slot.record;
        view! {
            <div
                class="sponsor-tile reveal-item"
                style=format!("--reveal-delay: {}", slot.delay_css())
                title=sponsor.display_name.clone()
            >
                <FallbackImage
                    src=sponsor.icon_url()
                    alt=sponsor.display_name.clone()
                    class="sponsor-logo"
                    placeholder=Some(sponsor.display_name.clone())
                />
            </div>
        }
    });

    view! {
        <section class="section">
            <div class="container">
                <div node_ref=group data-reveal=move || revealed.get().as_str()>
                    <h2 class="section-title centered">"Our Sponsors"</h2>
                    <div class="sponsors-grid">{tiles}</div>
                </div>
            </div>
        </section>
    }
}

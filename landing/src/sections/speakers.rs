use leptos::html;
use leptos::prelude::*;
use techcon::SectionId;
use techcon::asset::initials;
use techcon::catalog::SpeakerRecord;
use techcon::compose::compose;
use techcon::reveal::MotionConfig;

use super::anchor;
use crate::image::FallbackImage;
use crate::reveal::{reveal_delay_style, use_reveal};

#[component]
pub fn Speakers(speakers: Vec<SpeakerRecord>, motion: MotionConfig) -> impl IntoView {
    let group = NodeRef::<html::Div>::new();
    let revealed = use_reveal(group);

    // Heading is the first child of the cascade, cards follow it.
    let stagger = motion.container_stagger();
    let heading_delay = reveal_delay_style(stagger.delay_for(0));
    let cards = compose(&speakers, stagger, |slot| {
        let speaker = slot.record;
        view! {
            <article class="speaker-card card reveal-item" style=reveal_delay_style(slot.delay + stagger.step())>
                <div class="speaker-photo">
                    <FallbackImage
                        src=speaker.image_url.clone()
                        alt=speaker.name.clone()
                        class="avatar"
                        placeholder=Some(initials(&speaker.name))
                    />
                </div>
                <h3 class="card-title">{speaker.name.clone()}</h3>
                <p class="card-subtitle">{speaker.role.clone()}</p>
            </article>
        }
    });

    view! {
        <section id=anchor(SectionId::Speakers) class="section section-dark">
            <div class="container">
                <div node_ref=group data-reveal=move || revealed.get().as_str()>
                    <h2 class="section-title centered reveal-item" style=heading_delay>
                        "Featured Speakers"
                    </h2>
                    <div class="speakers-grid">{cards}</div>
                </div>
            </div>
        </section>
    }
}

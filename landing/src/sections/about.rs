use leptos::html;
use leptos::prelude::*;
use techcon::SectionId;
use techcon::catalog::About;
use techcon::compose::compose;
use techcon::reveal::{MotionConfig, Stagger};

use super::anchor;
use crate::image::FallbackImage;
use crate::reveal::{reveal_delay_style, use_reveal};

#[component]
pub fn AboutSection(about: About, motion: MotionConfig) -> impl IntoView {
    let group = NodeRef::<html::Div>::new();
    let revealed = use_reveal(group);

    let stagger = motion.container_stagger();
    let [text_delay, photo_delay] = column_delays(stagger);
    let stats = compose(&about.stats, stagger, |slot| {
        view! {
            <div class="stat-card reveal-item" style=reveal_delay_style(slot.delay)>
                <div class="stat-value gradient-text">{slot.record.value.clone()}</div>
                <div class="stat-label">{slot.record.label.clone()}</div>
            </div>
        }
    });

    view! {
        <section id=anchor(SectionId::About) class="section section-dark">
            <div class="container">
                <div node_ref=group class="about-grid" data-reveal=move || revealed.get().as_str()>
                    <div class="reveal-item" style=text_delay>
                        <h2 class="section-title gradient-text">{about.heading}</h2>
                        <p class="section-lead">{about.body}</p>
                        <div class="stats-grid">{stats}</div>
                    </div>
                    <div class="photo-frame reveal-item" style=photo_delay>
                        <FallbackImage
                            src=about.image_url
                            alt=about.image_alt
                            class="photo"
                            placeholder=None
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Text column first, photo one step later.
fn column_delays(stagger: Stagger) -> [String; 2] {
    [
        reveal_delay_style(stagger.delay_for(0)),
        reveal_delay_style(stagger.delay_for(1)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_columns_join_the_cascade() {
        let motion = MotionConfig::default();
        assert_eq!(
            column_delays(motion.container_stagger()),
            ["--reveal-delay: 0ms", "--reveal-delay: 300ms"]
        );
    }

    #[test]
    fn no_stagger_reveals_columns_together() {
        let [text, photo] = column_delays(Stagger::NONE);
        assert_eq!(text, photo);
    }
}

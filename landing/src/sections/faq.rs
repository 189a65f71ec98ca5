use leptos::html;
use leptos::prelude::*;
use techcon::SectionId;
use techcon::catalog::FaqEntry;
use techcon::compose::compose;
use techcon::reveal::MotionConfig;

use super::anchor;
use crate::reveal::use_reveal;

#[component]
pub fn Faq(entries: Vec<FaqEntry>, motion: MotionConfig) -> impl IntoView {
    let group = NodeRef::<html::Div>::new();
    let revealed = use_reveal(group);

    let items = compose(&entries, motion.container_stagger(), |slot| {
        view! {
            <div class="faq-item card reveal-item" style=format!("--reveal-delay: {}", slot.delay_css())>
                <h3 class="faq-question">{slot.record.question.clone()}</h3>
                <p class="faq-answer">{slot.record.answer.clone()}</p>
            </div>
        }
    });

    view! {
        <section id=anchor(SectionId::Faq) class="section section-fade">
            <div class="container narrow">
                <div node_ref=group data-reveal=move || revealed.get().as_str()>
                    <h2 class="section-title centered">"Frequently Asked Questions"</h2>
                    <div class="faq-list">{items}</div>
                </div>
            </div>
        </section>
    }
}

use leptos::html;
use leptos::prelude::*;
use techcon::SectionId;
use techcon::catalog::ScheduleItem;
use techcon::compose::compose;
use techcon::reveal::MotionConfig;

use super::anchor;
use crate::reveal::use_reveal;

/// Rows reveal individually as they scroll in, each delayed by its index.
#[component]
pub fn Schedule(items: Vec<ScheduleItem>, motion: MotionConfig) -> impl IntoView {
    let rows = compose(&items, motion.row_stagger(), |slot| {
        view! {
            <ScheduleRow item=slot.record.clone() delay=slot.delay_css() />
        }
    });

    view! {
        <section id=anchor(SectionId::Schedule) class="section section-fade">
            <div class="container narrow">
                <h2 class="section-title centered">"Event Schedule"</h2>
                <div class="schedule-list">{rows}</div>
            </div>
        </section>
    }
}

#[component]
fn ScheduleRow(item: ScheduleItem, delay: String) -> impl IntoView {
    let row = NodeRef::<html::Div>::new();
    let revealed = use_reveal(row);

    view! {
        <div
            node_ref=row
            class="schedule-row card reveal-slide"
            style=format!("--reveal-delay: {delay}")
            data-reveal=move || revealed.get().as_str()
        >
            <div>
                <h3 class="card-title">{item.title}</h3>
                <p class="card-subtitle">{item.speaker_name}</p>
            </div>
            <span class="schedule-time">{item.time}</span>
        </div>
    }
}

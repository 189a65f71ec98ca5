use leptos::prelude::*;
use techcon::asset::{ImageSlot, ImageSource};

/// `<img>` that swaps itself for a same-sized placeholder when the URL fails.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    /// Classes shared by the image and its placeholder, so layout is unchanged
    class: &'static str,
    /// Text drawn inside the placeholder (initials, sponsor name)
    placeholder: Option<String>,
) -> impl IntoView {
    let slot = RwSignal::new(ImageSlot::default());
    let src_for_memo = src.clone();
    let show_placeholder = Memo::new(move |_| shows_placeholder(slot.get(), &src_for_memo));

    move || {
        if show_placeholder.get() {
            view! {
                <div class=placeholder_class(class) role="img" aria-label=alt.clone()>
                    <span class="img-placeholder-text">{placeholder.clone()}</span>
                </div>
            }
            .into_any()
        } else {
            let failed_url = src.clone();
            view! {
                <img
                    src=src.clone()
                    alt=alt.clone()
                    class=class
                    loading="lazy"
                    on:load=move |_| slot.update(|s| s.on_load())
                    on:error=move |_| slot.update(|s| s.on_error(&failed_url))
                />
            }
            .into_any()
        }
    }
}

fn shows_placeholder(slot: ImageSlot, src: &str) -> bool {
    slot.source(src) == ImageSource::Placeholder
}

/// The placeholder keeps the image's own classes so the card keeps its box.
fn placeholder_class(class: &str) -> String {
    format!("{class} img-placeholder")
}

use leptos::prelude::*;
use techcon::catalog::{EventInfo, Footer as FooterContent};

use super::resolve_or_drop;
use crate::image::FallbackImage;

#[component]
pub fn Footer(event: EventInfo, footer: FooterContent) -> impl IntoView {
    let quick_links = resolve_or_drop(&footer.quick_links, "footer")
        .into_iter()
        .map(|link| {
            let href = link.href();
            view! { <li><a href=href class="footer-link">{link.label}</a></li> }
        })
        .collect::<Vec<_>>();

    let social = footer
        .social
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.url.clone()
                    class="social-link"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.label.clone()
                >
                    <FallbackImage
                        src=link.icon_url()
                        alt=link.label.clone()
                        class="social-icon"
                        placeholder=Some(link.label.clone())
                    />
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <h3 class="footer-title">{event.name}</h3>
                    <p class="footer-text">{event.motto}</p>
                </div>
                <div>
                    <h4 class="footer-heading">"Quick Links"</h4>
                    <ul class="footer-links">{quick_links}</ul>
                </div>
                <div>
                    <h4 class="footer-heading">"Follow Us"</h4>
                    <div class="social-links">{social}</div>
                </div>
                <div>
                    <h4 class="footer-heading">"Newsletter"</h4>
                    // Capture only; subscriptions are handled outside this page.
                    <div class="newsletter">
                        <label for="newsletter-email" class="sr-only">"Email address"</label>
                        <input
                            id="newsletter-email"
                            type="email"
                            class="newsletter-input"
                            placeholder=footer.newsletter_placeholder
                        />
                        <button type="button" class="newsletter-button">"Subscribe"</button>
                    </div>
                </div>
            </div>
        </footer>
    }
}

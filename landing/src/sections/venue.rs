use leptos::prelude::*;
use techcon::SectionId;
use techcon::catalog::Venue;

use super::anchor;
use crate::icons::{Icon, amenity_icon};
use crate::image::FallbackImage;

#[component]
pub fn VenueSection(venue: Venue) -> impl IntoView {
    view! {
        <section id=anchor(SectionId::Venue) class="section section-fade">
            <div class="container">
                <div class="venue-grid">
                    <div>
                        <h2 class="section-title">"Venue"</h2>
                        <h3 class="venue-name">{venue.name}</h3>
                        <address class="venue-address">
                            {venue
                                .address_lines
                                .into_iter()
                                .map(|line| view! { <span class="venue-line">{line}</span> })
                                .collect::<Vec<_>>()}
                        </address>
                        <ul class="venue-amenities">
                            {venue
                                .amenities
                                .into_iter()
                                .map(|amenity| {
                                    view! {
                                        <li>
                                            <Icon paths=amenity_icon(amenity.icon) class="icon-sm" />
                                            <span>{amenity.text}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div class="photo-frame">
                        <FallbackImage
                            src=venue.image_url
                            alt=venue.image_alt
                            class="photo"
                            placeholder=None
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

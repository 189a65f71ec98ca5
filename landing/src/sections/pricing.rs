use leptos::html;
use leptos::prelude::*;
use techcon::SectionId;
use techcon::catalog::PricingTier;
use techcon::compose::compose;
use techcon::reveal::MotionConfig;

use super::anchor;
use crate::icons::{ICON_CHECK, Icon};
use crate::reveal::use_reveal;

#[component]
pub fn Pricing(tiers: Vec<PricingTier>, motion: MotionConfig) -> impl IntoView {
    let group = NodeRef::<html::Div>::new();
    let revealed = use_reveal(group);

    let cards = compose(&tiers, motion.container_stagger(), |slot| {
        let tier = slot.record;
        view! {
            <article class=tier_class(tier) style=format!("--reveal-delay: {}", slot.delay_css())>
                {tier_badge(tier).map(|badge| view! { <span class="tier-badge">{badge}</span> })}
                <h3 class="tier-name">{tier.name.clone()}</h3>
                <p class="tier-price">{tier.price_label.clone()}</p>
                <ul class="tier-features">
                    {tier
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li>
                                    <Icon paths=ICON_CHECK class="icon-sm icon-check" />
                                    {feature.clone()}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <button class="btn btn-ghost">"Select Pass"</button>
            </article>
        }
    });

    view! {
        <section id=anchor(SectionId::Pricing) class="section section-dark">
            <div class="container">
                <div node_ref=group data-reveal=move || revealed.get().as_str()>
                    <h2 class="section-title centered">"Choose Your Pass"</h2>
                    <div class="pricing-grid">{cards}</div>
                </div>
            </div>
        </section>
    }
}

fn tier_class(tier: &PricingTier) -> &'static str {
    if tier.is_recommended {
        "tier-card tier-recommended reveal-item"
    } else {
        "tier-card reveal-item"
    }
}

/// Badge text, shown on recommended tiers only.
fn tier_badge(tier: &PricingTier) -> Option<&'static str> {
    tier.is_recommended.then_some("Recommended")
}

#[cfg(test)]
mod tests {
    use super::*;
    use techcon::catalog::Catalog;

    #[test]
    fn only_premium_gets_the_badge() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        let badged: Vec<_> = catalog
            .pricing
            .iter()
            .filter(|tier| tier_badge(tier).is_some())
            .map(|tier| tier.name.as_str())
            .collect();
        assert_eq!(badged, vec!["Premium"]);
    }

    #[test]
    fn every_tier_card_reveals_and_only_premium_is_highlighted() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        for tier in &catalog.pricing {
            let class = tier_class(tier);
            assert!(class.contains("reveal-item"));
            assert_eq!(class.contains("tier-recommended"), tier.name == "Premium");
        }
    }

    #[test]
    fn unflagged_tier_has_no_badge() {
        let tier = PricingTier {
            name: "Student".into(),
            price_label: "$99".into(),
            features: vec![],
            is_recommended: false,
        };
        assert_eq!(tier_badge(&tier), None);
    }
}

use leptos::prelude::*;
use techcon::menu::MenuToggle;
use techcon::section::NavLink;
use tracing::warn;

use super::resolve_or_drop;
use crate::icons::{ICON_CLOSE, ICON_MENU, Icon};

#[component]
pub fn Nav(brand: String, labels: Vec<String>) -> impl IntoView {
    let menu = RwSignal::new(MenuToggle::default());

    let links = resolve_or_drop(&labels, "nav");
    let desktop_links = links
        .iter()
        .map(|link| nav_anchor(link, "nav-link", menu))
        .collect::<Vec<_>>();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand gradient-text" on:click=move |_| menu.update(MenuToggle::close)>
                    {brand}
                </a>
                <div class="nav-links">{desktop_links}</div>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(|m| {
                        m.toggle();
                    })
                >
                    {move || {
                        let paths = if menu.get().is_open() { ICON_CLOSE } else { ICON_MENU };
                        view! { <Icon paths=paths class="icon-md" /> }
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || menu.get().is_open()>
                <div class="nav-mobile">
                    {links
                        .iter()
                        .map(|link| nav_anchor(link, "nav-mobile-link", menu))
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}

/// In-page link that closes the mobile menu when followed, from either the
/// desktop bar or the mobile list.
fn nav_anchor(link: &NavLink, class: &'static str, menu: RwSignal<MenuToggle>) -> impl IntoView + use<> {
    let href = link.href();
    let label = link.label.clone();
    let target = link.label.clone();

    view! {
        <a href=href class=class on:click=move |_| menu.update(|m| follow_link(m, &target))>
            {label}
        </a>
    }
}

/// A nav link was clicked. The menu closes even if the label is dangling.
fn follow_link(menu: &mut MenuToggle, label: &str) {
    if let Err(err) = menu.select(label) {
        warn!(%err, "menu link has no target");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_menu() -> MenuToggle {
        let mut menu = MenuToggle::default();
        menu.toggle();
        menu
    }

    #[test]
    fn following_any_nav_link_closes_the_menu() {
        for label in ["About", "Speakers", "Schedule", "Pricing", "Venue", "FAQ"] {
            let mut menu = open_menu();
            follow_link(&mut menu, label);
            assert!(!menu.is_open(), "{label} left the menu open");
        }
    }

    #[test]
    fn dangling_link_still_closes_the_menu() {
        let mut menu = open_menu();
        follow_link(&mut menu, "Tickets");
        assert!(!menu.is_open());
    }

    #[test]
    fn following_a_link_with_menu_closed_keeps_it_closed() {
        let mut menu = MenuToggle::default();
        follow_link(&mut menu, "Venue");
        assert_eq!(menu, MenuToggle::default());
    }
}

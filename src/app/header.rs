use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use crate::config::{NavSection, SiteConfig};
use crate::interaction::{is_scrolled, InteractionState};

use super::dom::{scroll_to, DocumentScrollLock};

/// Handles a click on a section link: "coming soon" sections open the info
/// modal, everything else closes the menu and scrolls.
pub fn go_to_section(state: RwSignal<InteractionState>, config: &SiteConfig, section: &NavSection) {
    let lock = DocumentScrollLock;
    if section.coming_soon {
        state.update(|s| s.open_info(&lock));
        return;
    }
    let target = state.try_update(|s| s.navigate(&lock, &section.id, &config.home_section));
    if let Some(target) = target {
        if let Err(e) = scroll_to(&target, config.header_offset) {
            log::debug!("navigation aborted: {}", e);
        }
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let state = expect_context::<RwSignal<InteractionState>>();
    let (_, scroll_y) = use_window_scroll();
    let threshold = config.scrolled_threshold;
    let menu_open = move || state.with(|s| s.menu_open());

    let links = config
        .sections
        .iter()
        .cloned()
        .map(|section| {
            let config = config.clone();
            let label = section.label.clone();
            let href = format!("#{}", section.id);
            view! {
                <li>
                    <a
                        href=href
                        class="nav-link"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to_section(state, &config, &section);
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    let home = config.home_section.clone();
    let brand_config = config.clone();

    view! {
        <header
            class="site-header fixed top-0 inset-x-0 z-40 transition-shadow duration-200"
            class:scrolled=move || is_scrolled(scroll_y.get(), threshold)
        >
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 h-20 flex items-center justify-between">
                <a
                    href=format!("#{home}")
                    class="text-2xl font-bold"
                    on:click=move |ev| {
                        ev.prevent_default();
                        if let Some(section) = brand_config.section(&brand_config.home_section) {
                            go_to_section(state, &brand_config, section);
                        }
                    }
                >
                    <span class="text-cyan">{config.owner.clone()}</span>
                </a>
                <nav class="site-nav" class:open=menu_open>
                    <ul class="flex flex-col lg:flex-row gap-6">{links}</ul>
                </nav>
                <button
                    class="menu-toggle lg:hidden"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| state.update(|s| s.toggle_menu(&DocumentScrollLock))
                >
                    {move || {
                        if menu_open() {
                            Either::Left(view! { <i class="extra-close" /> })
                        } else {
                            Either::Right(view! { <i class="extra-menu" /> })
                        }
                    }}
                </button>
            </div>
        </header>
    }
}

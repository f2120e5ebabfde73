use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_document, use_event_listener, use_window};

use crate::config::SiteConfig;
use crate::interaction::InteractionState;

use super::contacts::{Contacts, Footer};
use super::dom::{click_target, viewport_width, DocumentScrollLock};
use super::feedback::Feedback;
use super::header::{go_to_section, Header};
use super::hero::Hero;
use super::modal::ComingSoonModal;

/// Owns the menu/modal state and the page-wide listeners that drive it.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = SiteConfig::default();
    let state = RwSignal::new(InteractionState::default());
    provide_context(config.clone());
    provide_context(state);

    let breakpoint = config.menu_breakpoint;
    let lock = DocumentScrollLock;

    _ = use_event_listener(use_document(), ev::click, move |ev| {
        if state.with_untracked(|s| s.menu_open()) {
            let target = click_target(ev.target());
            state.update(|s| s.handle_click(&lock, target));
        }
    });
    _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        let key = ev.key();
        if state.with_untracked(|s| s.closes_on_key(&key)) {
            state.update(|s| s.handle_key(&lock, &key));
        }
    });
    _ = use_event_listener(use_window(), ev::resize, move |_| match viewport_width() {
        Ok(width) => {
            if state.with_untracked(|s| s.closes_on_resize(width, breakpoint)) {
                state.update(|s| s.handle_resize(&lock, width, breakpoint));
            }
        }
        Err(e) => log::debug!("{}", e),
    });

    // the scroll lock only exists in the browser
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        if state.try_update(|s| s.teardown(&lock)).is_none() {
            crate::interaction::ScrollLock::release_scroll_lock(&lock);
        }
    });

    let projects = config.clone();

    view! {
        <Title text="Portfolio" />
        <Header />
        <div class="max-w-6xl mx-auto page-content px-4">
            <Hero />
            <section id="about" class="flex flex-col lg:flex-row gap-8 lg:gap-12 section-content">
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"About me"</h2>
                    <p class="text-base mb-4 leading-relaxed">
                        "I build fast, accessible interfaces and enjoy the parts of the web most people never see: rendering, state and the glue in between."
                    </p>
                    <p class="text-base mb-4 leading-relaxed">
                        "Lately that means Rust compiled to WebAssembly, which is what this page is made of."
                    </p>
                </div>
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"What I work with"</h2>
                    <ul class="text-sm space-y-1">
                        <li>"TypeScript, Angular and React"</li>
                        <li>"Rust, Leptos and WebAssembly"</li>
                        <li>"HTML, CSS and a stubborn eye for detail"</li>
                    </ul>
                </div>
            </section>
            <section id="projects" class="flex justify-center mt-8 section-content">
                <div class="w-full max-w-2xl text-center">
                    <h2 class="text-xl font-bold my-8">"Projects"</h2>
                    <button
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30"
                        on:click=move |_| {
                            if let Some(section) = projects.section("projects") {
                                go_to_section(state, &projects, section);
                            }
                        }
                    >
                        "See my work"
                    </button>
                </div>
            </section>
            <Feedback />
            <Contacts />
        </div>
        <Footer />
        <ComingSoonModal />
    }
}

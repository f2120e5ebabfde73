use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::config::SiteConfig;

use super::dom::{copy_to_clipboard, open_external, open_mail_client};

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Contacts() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (copied, set_copied) = signal(false);

    let mailto = config.mailto();
    let email = config.email.clone();

    let links = config
        .links
        .iter()
        .cloned()
        .map(|link| {
            let url = link.url.clone();
            view! {
                <button
                    class="text-blue hover:text-brightBlue text-2xl"
                    aria-label=link.label.clone()
                    title=link.label
                    on:click=move |_| {
                        if let Err(e) = open_external(&url) {
                            log::warn!("{}", e);
                        }
                    }
                >
                    <i class=link.icon />
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="contacts" class="flex justify-center items-center mt-8 section-content">
            <div class="w-full max-w-2xl text-center">
                <h3 class="text-xl font-bold my-8">"Let's Connect"</h3>
                <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                    <p class="mb-4">
                        "Have a project in mind or just want to say hi? My inbox is always open."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-6">
                        <button
                            class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                            on:click=move |_| {
                                if let Err(e) = open_mail_client(&mailto) {
                                    log::warn!("{}", e);
                                }
                            }
                        >
                            "📧 Write me"
                        </button>
                        <button
                            class="px-6 py-3 rounded-md border border-muted/30 hover:bg-brightBlack/30"
                            on:click=move |_| copy_to_clipboard(email.clone(), move || set_copied(true))
                        >
                            {move || if copied.get() { "📋 Copied!" } else { "📋 Copy email" }}
                        </button>
                        <div class="flex gap-3">{links}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <footer class="mt-16 py-8 text-center text-sm text-muted">
            {format!("© {} {}", build_year(), config.owner)}
        </footer>
    }
}

use leptos::{ev::MouseEvent, prelude::*};

use crate::interaction::InteractionState;

#[component]
pub fn ComingSoonModal() -> impl IntoView {
    let state = expect_context::<RwSignal<InteractionState>>();
    let close = move |_: MouseEvent| state.update(|s| s.close_info());

    view! {
        <Show when=move || state.with(|s| s.modal_open())>
            <div class="modal-backdrop fixed inset-0 z-50 flex items-center justify-center bg-background/80" on:click=close>
                <div
                    class="modal bg-brightBlack/30 p-6 rounded-lg border border-muted/30 max-w-md text-center"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h3 class="text-xl font-bold mb-4">"Coming soon"</h3>
                    <p class="mb-6">
                        "This section is still being built. Check back in a little while!"
                    </p>
                    <button
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-2 rounded-md font-medium border border-cyan/30"
                        on:click=close
                    >
                        "Got it"
                    </button>
                </div>
            </div>
        </Show>
    }
}

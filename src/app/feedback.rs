use leptos::prelude::*;

use crate::error::FieldError;
use crate::feedback::{FeedbackForm, SubmitOutcome};

#[component]
pub fn Feedback() -> impl IntoView {
    let form = RwSignal::new(FeedbackForm::default());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (submitted, set_submitted) = signal(false);

    let field_error = move |field: FieldError| {
        move || {
            errors
                .get()
                .contains(&field)
                .then(|| view! { <p class="text-sm text-red mt-1">{field.to_string()}</p> })
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_submitted(false);
        match form.try_update(|f| f.submit()) {
            Some(SubmitOutcome::Submitted(_)) => {
                set_errors(Vec::new());
                set_submitted(true);
            }
            Some(SubmitOutcome::Invalid(e)) => set_errors(e),
            None => {}
        }
    };

    view! {
        <section id="feedback" class="flex justify-center mt-8 section-content">
            <div class="w-full max-w-2xl">
                <h2 class="text-xl font-bold my-8 text-center">"Leave feedback"</h2>
                <form class="flex flex-col gap-4" on:submit=on_submit novalidate>
                    <div>
                        <input
                            type="text"
                            placeholder="Name"
                            class="w-full px-4 py-2 rounded-md border focus:outline-none focus:ring-2 focus:ring-brightBlack bg-background text-foreground"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        {field_error(FieldError::Name)}
                    </div>
                    <div>
                        <input
                            type="email"
                            placeholder="Email"
                            class="w-full px-4 py-2 rounded-md border focus:outline-none focus:ring-2 focus:ring-brightBlack bg-background text-foreground"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        {field_error(FieldError::Email)}
                    </div>
                    <div>
                        <textarea
                            placeholder="Message"
                            rows="5"
                            class="w-full px-4 py-2 rounded-md border focus:outline-none focus:ring-2 focus:ring-brightBlack bg-background text-foreground"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                        {field_error(FieldError::Message)}
                    </div>
                    <button
                        type="submit"
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    >
                        "Send"
                    </button>
                    <Show when=move || submitted.get()>
                        <p class="text-green text-center">"Thanks! Your message has been received."</p>
                    </Show>
                </form>
            </div>
        </section>
    }
}

use std::time::Duration;

use leptos::{either::Either, prelude::*};

use crate::animation::{AnimationScheduler, TypingAnimation};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::typing::TypingEngine;

enum TimerHandle {
    Timeout(TimeoutHandle),
    Interval(IntervalHandle),
}

/// Browser timers that feed back into the animation signal when they fire.
#[derive(Clone, Copy)]
struct BrowserScheduler {
    animation: RwSignal<TypingAnimation<TimerHandle>>,
}

impl AnimationScheduler for BrowserScheduler {
    type Handle = TimerHandle;

    fn schedule_step(&self, delay: Duration) -> Result<TimerHandle, SiteError> {
        let scheduler = *self;
        set_timeout_with_handle(
            move || {
                scheduler
                    .animation
                    .try_update(|a| a.fire_step(&scheduler));
            },
            delay,
        )
        .map(TimerHandle::Timeout)
        .map_err(|e| SiteError::Timer(format!("{:?}", e)))
    }

    fn schedule_blink(&self, period: Duration) -> Result<TimerHandle, SiteError> {
        let animation = self.animation;
        set_interval_with_handle(
            move || {
                animation.try_update(|a| a.fire_blink());
            },
            period,
        )
        .map(TimerHandle::Interval)
        .map_err(|e| SiteError::Timer(format!("{:?}", e)))
    }

    fn cancel(&self, handle: TimerHandle) {
        match handle {
            TimerHandle::Timeout(h) => h.clear(),
            TimerHandle::Interval(h) => h.clear(),
        }
    }
}

#[component]
pub fn TypedText(engine: TypingEngine, cursor_blink: Duration) -> impl IntoView {
    let animation = RwSignal::new(TypingAnimation::new(engine, cursor_blink));
    let scheduler = BrowserScheduler { animation };

    // effects only run in the browser, so the server renders the empty first frame
    Effect::new(move |started: Option<()>| {
        if started.is_none() {
            animation.update(|a| a.start(&scheduler));
        }
    });
    on_cleanup(move || {
        animation.try_update(|a| a.stop(&scheduler));
    });

    // (revealed prefix, phrase) once two characters exist, else (None, partial prefix)
    let typed = Memo::new(move |_| {
        animation.with(|a| {
            let e = a.engine();
            if e.has_started_prefix() {
                let phrase = if e.prefix_typed() { e.suffix_text() } else { "" };
                (Some(e.prefix_text().to_string()), phrase.to_string())
            } else {
                (None, e.suffix_text().to_string())
            }
        })
    });
    let cursor_visible = Memo::new(move |_| animation.with(|a| a.cursor().is_visible()));

    view! {
        <span class="typed-text">
            {move || match typed.get() {
                (Some(prefix), phrase) => {
                    Either::Left(
                        view! {
                            <span class="typed-prefix">{prefix}</span>
                            <span class="typed-phrase text-cyan">{phrase}</span>
                        },
                    )
                }
                (None, partial) => Either::Right(view! { <span class="typed-prefix">{partial}</span> }),
            }}
            <span class="typed-cursor" class:invisible=move || !cursor_visible.get()>
                "|"
            </span>
        </span>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let engine = TypingEngine::new(
        config.hero_prefix.clone(),
        config.hero_phrases.clone(),
        config.typing,
    );

    view! {
        <section id=config.home_section.clone() class="min-h-screen flex flex-col justify-center items-center gap-6 section-content">
            <p class="text-lg text-muted">"Hello, world!"</p>
            <h1 class="text-4xl lg:text-6xl font-bold text-center">
                {match engine {
                    Ok(engine) => {
                        Either::Left(
                            view! { <TypedText engine cursor_blink=config.cursor_blink /> },
                        )
                    }
                    Err(e) => {
                        log::warn!("hero animation disabled: {}", e);
                        Either::Right(config.hero_prefix.clone() + &config.owner)
                    }
                }}
            </h1>
            <p class="text-xl">{config.role.clone()}</p>
        </section>
    }
}

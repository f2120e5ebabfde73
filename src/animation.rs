//! Timer-driven playback of a [`TypingEngine`] plus the blinking cursor.
//!
//! The host runtime owns the actual timers behind [`AnimationScheduler`]; when
//! one fires it calls back into [`TypingAnimation::fire_step`] or
//! [`TypingAnimation::fire_blink`]. A fired step queues exactly one successor,
//! so steps never overlap.

use std::time::Duration;

use crate::error::SiteError;
use crate::typing::{CursorBlink, TypingEngine};

pub trait AnimationScheduler {
    type Handle;

    /// Queues a single typing step to fire after `delay`.
    fn schedule_step(&self, delay: Duration) -> Result<Self::Handle, SiteError>;
    /// Starts a repeating cursor blink every `period`.
    fn schedule_blink(&self, period: Duration) -> Result<Self::Handle, SiteError>;
    fn cancel(&self, handle: Self::Handle);
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypingAnimation<H> {
    engine: TypingEngine,
    cursor: CursorBlink,
    blink_period: Duration,
    pending_step: Option<H>,
    blink: Option<H>,
    running: bool,
}

impl<H> TypingAnimation<H> {
    pub fn new(engine: TypingEngine, blink_period: Duration) -> Self {
        Self {
            engine,
            cursor: CursorBlink::default(),
            blink_period,
            pending_step: None,
            blink: None,
            running: false,
        }
    }

    pub fn start<S>(&mut self, scheduler: &S)
    where
        S: AnimationScheduler<Handle = H>,
    {
        if self.running {
            return;
        }
        self.running = true;
        self.queue_step(scheduler, Duration::ZERO);
        match scheduler.schedule_blink(self.blink_period) {
            Ok(handle) => self.blink = Some(handle),
            Err(e) => log::warn!("cursor blink disabled: {}", e),
        }
    }

    fn queue_step<S>(&mut self, scheduler: &S, delay: Duration)
    where
        S: AnimationScheduler<Handle = H>,
    {
        match scheduler.schedule_step(delay) {
            Ok(handle) => self.pending_step = Some(handle),
            Err(e) => {
                log::warn!("typing animation halted: {}", e);
                self.pending_step = None;
            }
        }
    }

    /// Runs the step whose timer just fired. Returns false if the animation
    /// was stopped in the meantime, in which case nothing happens.
    pub fn fire_step<S>(&mut self, scheduler: &S) -> bool
    where
        S: AnimationScheduler<Handle = H>,
    {
        if !self.running {
            return false;
        }
        // the fired one-shot timer is spent
        self.pending_step = None;
        let delay = self.engine.step();
        self.queue_step(scheduler, delay);
        true
    }

    pub fn fire_blink(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.cursor.toggle();
        true
    }

    /// Cancels the pending step and the blink together.
    pub fn stop<S>(&mut self, scheduler: &S)
    where
        S: AnimationScheduler<Handle = H>,
    {
        self.running = false;
        if let Some(handle) = self.pending_step.take() {
            scheduler.cancel(handle);
        }
        if let Some(handle) = self.blink.take() {
            scheduler.cancel(handle);
        }
    }

    pub fn engine(&self) -> &TypingEngine {
        &self.engine
    }

    pub fn cursor(&self) -> &CursorBlink {
        &self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_pending_step(&self) -> bool {
        self.pending_step.is_some()
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TypingTimings;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Timer {
        Step(Duration),
        Blink(Duration),
    }

    // Records live timers; firing one is up to the test.
    #[derive(Default)]
    struct FakeScheduler {
        next_id: Cell<u32>,
        live: RefCell<Vec<(u32, Timer)>>,
        cancelled: RefCell<Vec<u32>>,
        fail_steps: Cell<bool>,
    }

    impl FakeScheduler {
        fn add(&self, timer: Timer) -> u32 {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.live.borrow_mut().push((id, timer));
            id
        }

        fn pending_steps(&self) -> Vec<Duration> {
            self.live
                .borrow()
                .iter()
                .filter_map(|(_, t)| match t {
                    Timer::Step(d) => Some(*d),
                    Timer::Blink(_) => None,
                })
                .collect()
        }

        fn blinks(&self) -> usize {
            self.live
                .borrow()
                .iter()
                .filter(|(_, t)| matches!(t, Timer::Blink(_)))
                .count()
        }

        // A one-shot timeout leaves the live set when it fires.
        fn take_step(&self) -> Option<Duration> {
            let mut live = self.live.borrow_mut();
            let i = live.iter().position(|(_, t)| matches!(t, Timer::Step(_)))?;
            match live.remove(i).1 {
                Timer::Step(d) => Some(d),
                Timer::Blink(_) => None,
            }
        }
    }

    impl AnimationScheduler for FakeScheduler {
        type Handle = u32;

        fn schedule_step(&self, delay: Duration) -> Result<u32, SiteError> {
            if self.fail_steps.get() {
                return Err(SiteError::Timer("no timers".to_string()));
            }
            Ok(self.add(Timer::Step(delay)))
        }

        fn schedule_blink(&self, period: Duration) -> Result<u32, SiteError> {
            Ok(self.add(Timer::Blink(period)))
        }

        fn cancel(&self, handle: u32) {
            self.live.borrow_mut().retain(|(id, _)| *id != handle);
            self.cancelled.borrow_mut().push(handle);
        }
    }

    fn engine(phrases: &[&str]) -> TypingEngine {
        TypingEngine::new(
            "I'm ",
            phrases.iter().map(|s| s.to_string()).collect(),
            TypingTimings::default(),
        )
        .expect("engine should build")
    }

    fn started(phrases: &[&str]) -> (FakeScheduler, TypingAnimation<u32>) {
        let scheduler = FakeScheduler::default();
        let mut animation = TypingAnimation::new(engine(phrases), Duration::from_millis(500));
        animation.start(&scheduler);
        (scheduler, animation)
    }

    #[test]
    fn test_start_schedules_first_step_and_blink() {
        let (scheduler, animation) = started(&["A"]);
        assert!(animation.is_running());
        assert_eq!(scheduler.pending_steps(), vec![Duration::ZERO]);
        assert_eq!(scheduler.blinks(), 1);
        assert!(animation.has_pending_step());
        assert!(animation.is_blinking());
        assert_eq!(animation.engine().displayed_text(), "");
    }

    #[test]
    fn test_start_twice_is_noop() {
        let (scheduler, mut animation) = started(&["A"]);
        animation.start(&scheduler);
        assert_eq!(scheduler.pending_steps().len(), 1);
        assert_eq!(scheduler.blinks(), 1);
    }

    #[test]
    fn test_one_pending_step_after_each_fire() {
        let (scheduler, mut animation) = started(&["A", "BB"]);
        for _ in 0..40 {
            assert!(scheduler.take_step().is_some());
            assert!(animation.fire_step(&scheduler));
            assert_eq!(scheduler.pending_steps().len(), 1);
            assert!(animation.has_pending_step());
        }
        assert_eq!(scheduler.blinks(), 1);
    }

    #[test]
    fn test_delays_follow_engine() {
        let (scheduler, mut animation) = started(&["ab", "c"]);
        let mut twin = engine(&["ab", "c"]);
        assert_eq!(scheduler.take_step(), Some(Duration::ZERO));
        for _ in 0..30 {
            animation.fire_step(&scheduler);
            let expected = twin.step();
            assert_eq!(scheduler.take_step(), Some(expected));
            assert_eq!(animation.engine().displayed_text(), twin.displayed_text());
        }
    }

    #[test]
    fn test_stop_cancels_both_timers() {
        let (scheduler, mut animation) = started(&["A"]);
        scheduler.take_step();
        animation.fire_step(&scheduler);
        animation.stop(&scheduler);

        assert!(!animation.is_running());
        assert!(!animation.has_pending_step());
        assert!(!animation.is_blinking());
        assert!(scheduler.live.borrow().is_empty());
        assert_eq!(scheduler.cancelled.borrow().len(), 2);
    }

    #[test]
    fn test_late_fire_after_stop_does_nothing() {
        let (scheduler, mut animation) = started(&["A"]);
        scheduler.take_step();
        animation.fire_step(&scheduler);
        let text = animation.engine().displayed_text().to_string();
        let visible = animation.cursor().is_visible();
        animation.stop(&scheduler);

        assert!(!animation.fire_step(&scheduler));
        assert!(!animation.fire_blink());
        assert_eq!(animation.engine().displayed_text(), text);
        assert_eq!(animation.cursor().is_visible(), visible);
        assert!(scheduler.pending_steps().is_empty());
    }

    #[test]
    fn test_stop_before_start() {
        let scheduler = FakeScheduler::default();
        let mut animation = TypingAnimation::new(engine(&["A"]), Duration::from_millis(500));
        animation.stop(&scheduler);
        assert!(scheduler.cancelled.borrow().is_empty());
        assert!(!animation.fire_step(&scheduler));
    }

    #[test]
    fn test_blink_toggles_cursor() {
        let (_scheduler, mut animation) = started(&["A"]);
        assert!(animation.cursor().is_visible());
        assert!(animation.fire_blink());
        assert!(!animation.cursor().is_visible());
        assert!(animation.fire_blink());
        assert!(animation.cursor().is_visible());
    }

    #[test]
    fn test_schedule_failure_halts_quietly() {
        let (scheduler, mut animation) = started(&["A"]);
        scheduler.take_step();
        scheduler.fail_steps.set(true);
        assert!(animation.fire_step(&scheduler));
        assert!(!animation.has_pending_step());
        assert!(scheduler.pending_steps().is_empty());
    }
}

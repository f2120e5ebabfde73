//! Typed-text hero animation.
//!
//! The engine types `prefix + phrase` one character per step, holds, deletes
//! back to the prefix, then moves on to the next phrase and loops forever.
//! It only computes state and delays; whoever drives it owns the timers.

use std::time::Duration;

use crate::config::TypingTimings;
use crate::error::SiteError;

/// Number of typed characters after which the prefix counts as shown.
const PREFIX_REVEAL_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct TypingEngine {
    prefix: String,
    prefix_len: usize,
    phrases: Vec<String>,
    timings: TypingTimings,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    displayed: String,
}

impl TypingEngine {
    pub fn new(
        prefix: impl Into<String>,
        phrases: Vec<String>,
        timings: TypingTimings,
    ) -> Result<Self, SiteError> {
        if phrases.is_empty() {
            return Err(SiteError::NoPhrases);
        }
        let prefix = prefix.into();
        let prefix_len = prefix.chars().count();
        Ok(Self {
            prefix,
            prefix_len,
            phrases,
            timings,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            displayed: String::new(),
        })
    }

    fn full_len(&self) -> usize {
        self.prefix_len + self.phrases[self.phrase_index].chars().count()
    }

    fn refresh_displayed(&mut self) {
        let phrase = &self.phrases[self.phrase_index];
        self.displayed = self
            .prefix
            .chars()
            .chain(phrase.chars())
            .take(self.char_index)
            .collect();
    }

    /// Advances the animation by one character and returns how long to wait
    /// before the next step.
    pub fn step(&mut self) -> Duration {
        let delay = if self.deleting {
            if self.char_index > self.prefix_len {
                self.char_index -= 1;
            }
            if self.char_index <= self.prefix_len {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.timings.hold_deleted
            } else {
                self.timings.delete_char
            }
        } else {
            let full_len = self.full_len();
            if self.char_index < full_len {
                self.char_index += 1;
            }
            if self.char_index >= full_len {
                self.deleting = true;
                self.timings.hold_typed
            } else {
                self.timings.type_char
            }
        };
        self.refresh_displayed();
        delay
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    pub fn prefix_text(&self) -> &str {
        &self.prefix
    }

    /// Part of the displayed text after the prefix, or the partially typed
    /// prefix while the prefix itself is still being typed.
    pub fn suffix_text(&self) -> &str {
        if self.prefix_typed() {
            &self.displayed[self.prefix.len()..]
        } else {
            &self.displayed
        }
    }

    /// True once two characters exist, not once the whole prefix does.
    pub fn has_started_prefix(&self) -> bool {
        self.char_index >= PREFIX_REVEAL_CHARS
    }

    pub fn prefix_typed(&self) -> bool {
        self.char_index >= self.prefix_len
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }
}

/// Blinking cursor shown after the typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlink {
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(phrases: &[&str]) -> TypingEngine {
        TypingEngine::new(
            "I'm ",
            phrases.iter().map(|s| s.to_string()).collect(),
            TypingTimings::default(),
        )
        .expect("engine should build")
    }

    // Steps until the prefix has been typed once.
    fn type_prefix(engine: &mut TypingEngine) {
        while !engine.prefix_typed() {
            engine.step();
        }
    }

    #[test]
    fn test_empty_phrases_rejected() {
        let res = TypingEngine::new("I'm ", vec![], TypingTimings::default());
        assert_eq!(res, Err(SiteError::NoPhrases));
    }

    #[test]
    fn test_initial_state() {
        let engine = engine(&["A"]);
        assert_eq!(engine.displayed_text(), "");
        assert_eq!(engine.char_index(), 0);
        assert_eq!(engine.phrase_index(), 0);
        assert!(!engine.is_deleting());
        assert!(!engine.has_started_prefix());
        assert_eq!(engine.prefix_text(), "I'm ");
    }

    #[test]
    fn test_scenario_sequence() {
        let mut engine = engine(&["A", "BB"]);
        let mut seen = Vec::new();
        for _ in 0..20 {
            engine.step();
            seen.push(engine.displayed_text().to_string());
        }
        let expected = [
            "I", "I'", "I'm", "I'm ", "I'm A", "I'm ", "I'm B", "I'm BB", "I'm B", "I'm ",
            "I'm A", "I'm ", "I'm B", "I'm BB", "I'm B", "I'm ", "I'm A",
        ];
        assert_eq!(&seen[..expected.len()], &expected[..]);
    }

    #[test]
    fn test_delays() {
        let mut engine = engine(&["AB"]);
        let t = TypingTimings::default();
        // "I", "I'", "I'm", "I'm ", "I'm A"
        for _ in 0..5 {
            assert_eq!(engine.step(), t.type_char);
        }
        // "I'm AB" completes the phrase
        assert_eq!(engine.step(), t.hold_typed);
        assert!(engine.is_deleting());
        // "I'm A"
        assert_eq!(engine.step(), t.delete_char);
        // back at the prefix
        assert_eq!(engine.step(), t.hold_deleted);
        assert!(!engine.is_deleting());
        assert_eq!(engine.displayed_text(), "I'm ");
    }

    #[test]
    fn test_delete_returns_to_prefix_for_every_phrase() {
        let phrases = ["a developer", "curious", "x"];
        let mut engine = engine(&phrases);
        type_prefix(&mut engine);
        for (i, phrase) in phrases.iter().enumerate() {
            assert_eq!(engine.phrase_index(), i);
            while !engine.is_deleting() {
                engine.step();
            }
            assert_eq!(engine.displayed_text(), format!("I'm {}", phrase));
            while engine.is_deleting() {
                engine.step();
            }
            assert_eq!(engine.displayed_text(), "I'm ");
        }
        // wrapped around
        assert_eq!(engine.phrase_index(), 0);
    }

    #[test]
    fn test_char_index_bounds_after_prefix() {
        let mut engine = engine(&["one", "three", "fifteen"]);
        type_prefix(&mut engine);
        let prefix_len = engine.prefix_text().chars().count();
        for _ in 0..500 {
            engine.step();
            let max = prefix_len + engine.current_phrase().chars().count();
            assert!(engine.char_index() >= prefix_len);
            assert!(engine.char_index() <= max);
            assert!(engine.displayed_text().starts_with("I'm "));
        }
    }

    #[test]
    fn test_prefix_reveal_after_two_chars() {
        let mut engine = engine(&["A"]);
        engine.step();
        assert!(!engine.has_started_prefix());
        assert_eq!(engine.suffix_text(), "I");
        engine.step();
        assert!(engine.has_started_prefix());
        assert!(!engine.prefix_typed());
        assert_eq!(engine.suffix_text(), "I'");
    }

    #[test]
    fn test_suffix_text_after_prefix() {
        let mut engine = engine(&["Rust"]);
        type_prefix(&mut engine);
        assert_eq!(engine.suffix_text(), "");
        engine.step();
        engine.step();
        assert_eq!(engine.suffix_text(), "Ru");
        assert_eq!(engine.displayed_text(), "I'm Ru");
    }

    #[test]
    fn test_multibyte_phrases() {
        let mut engine = engine(&["разработчик"]);
        type_prefix(&mut engine);
        engine.step();
        assert_eq!(engine.displayed_text(), "I'm р");
        assert_eq!(engine.suffix_text(), "р");
        while !engine.is_deleting() {
            engine.step();
        }
        assert_eq!(engine.suffix_text(), "разработчик");
    }

    #[test]
    fn test_empty_phrase_does_not_stall() {
        let mut engine = engine(&["", "B"]);
        type_prefix(&mut engine);
        let t = TypingTimings::default();
        // prefix typed is already the full text of the empty phrase
        assert!(engine.is_deleting());
        assert_eq!(engine.step(), t.hold_deleted);
        assert_eq!(engine.phrase_index(), 1);
        engine.step();
        assert_eq!(engine.displayed_text(), "I'm B");
    }

    #[test]
    fn test_cursor_blink() {
        let mut cursor = CursorBlink::default();
        assert!(cursor.is_visible());
        assert!(!cursor.toggle());
        assert!(cursor.toggle());
        assert!(cursor.is_visible());
    }
}

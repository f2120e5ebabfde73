//! Menu and "coming soon" modal state, kept free of any DOM access.
//!
//! The scroll lock is global page state (classes on `<html>`/`<body>`), so it
//! sits behind [`ScrollLock`] and is passed into every transition that may
//! touch it.

use crate::error::SiteError;

pub const ESCAPE_KEY: &str = "Escape";

/// Prevents the page behind the overlay menu from scrolling.
/// Both operations must be idempotent.
pub trait ScrollLock {
    fn apply_scroll_lock(&self);
    fn release_scroll_lock(&self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}

/// Where a document click landed, relative to the menu controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickTarget {
    pub in_nav: bool,
    pub in_toggle: bool,
}

impl ClickTarget {
    pub fn from_point(x: f64, y: f64, nav: Rect, toggle: Rect) -> Self {
        Self {
            in_nav: nav.contains(x, y),
            in_toggle: toggle.contains(x, y),
        }
    }

    pub fn is_outside(&self) -> bool {
        !self.in_nav && !self.in_toggle
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(String),
}

impl ScrollTarget {
    pub fn new(id: &str, home_section: &str) -> Self {
        if id == home_section {
            Self::Top
        } else {
            Self::Section(id.to_string())
        }
    }

    /// Absolute scroll position for this target. `section_top` looks up the
    /// viewport-relative top of a section, returning `None` if it doesn't exist.
    pub fn position<F>(&self, section_top: F, scroll_y: f64, header_offset: f64) -> Result<f64, SiteError>
    where
        F: FnOnce(&str) -> Option<f64>,
    {
        match self {
            Self::Top => Ok(0.0),
            Self::Section(id) => section_top(id)
                .map(|top| top + scroll_y - header_offset)
                .ok_or_else(|| SiteError::MissingSection(id.clone())),
        }
    }
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    menu_open: bool,
    modal_open: bool,
}

impl InteractionState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    fn set_menu(&mut self, open: bool, lock: &impl ScrollLock) {
        self.menu_open = open;
        if open {
            lock.apply_scroll_lock();
        } else {
            lock.release_scroll_lock();
        }
    }

    pub fn toggle_menu(&mut self, lock: &impl ScrollLock) {
        self.set_menu(!self.menu_open, lock);
    }

    pub fn close_menu(&mut self, lock: &impl ScrollLock) {
        self.set_menu(false, lock);
    }

    /// Closes the menu and returns where the viewport should scroll.
    pub fn navigate(&mut self, lock: &impl ScrollLock, id: &str, home_section: &str) -> ScrollTarget {
        self.close_menu(lock);
        ScrollTarget::new(id, home_section)
    }

    pub fn open_info(&mut self, lock: &impl ScrollLock) {
        self.modal_open = true;
        self.close_menu(lock);
    }

    pub fn close_info(&mut self) {
        self.modal_open = false;
    }

    /// Whether a resize to `width` would close an open menu.
    pub fn closes_on_resize(&self, width: f64, breakpoint: f64) -> bool {
        self.menu_open && width > breakpoint
    }

    pub fn closes_on_key(&self, key: &str) -> bool {
        key == ESCAPE_KEY && (self.menu_open || self.modal_open)
    }

    pub fn handle_click(&mut self, lock: &impl ScrollLock, target: ClickTarget) {
        if self.menu_open && target.is_outside() {
            self.close_menu(lock);
        }
    }

    pub fn handle_resize(&mut self, lock: &impl ScrollLock, width: f64, breakpoint: f64) {
        if width > breakpoint {
            self.close_menu(lock);
        }
    }

    pub fn handle_key(&mut self, lock: &impl ScrollLock, key: &str) {
        if key != ESCAPE_KEY {
            return;
        }
        if self.menu_open {
            self.close_menu(lock);
        }
        if self.modal_open {
            self.close_info();
        }
    }

    /// Releases the scroll lock whatever the menu state is.
    pub fn teardown(&mut self, lock: &impl ScrollLock) {
        self.menu_open = false;
        self.modal_open = false;
        lock.release_scroll_lock();
    }
}

//! Browser side effects the page components need: the scroll lock classes,
//! section scrolling, clipboard and opening external targets.

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, EventTarget, ScrollBehavior, ScrollToOptions, Window};

use crate::error::SiteError;
use crate::interaction::{ClickTarget, ScrollLock, ScrollTarget};

const ROOT_LOCK_CLASS: &str = "scroll-locked";
const BODY_LOCK_CLASS: &str = "menu-open";
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_SELECTOR: &str = "nav";

fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Scroll lock applied as classes on `<html>` and `<body>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentScrollLock;

impl DocumentScrollLock {
    fn lock_elements() -> Result<Vec<(Element, &'static str)>, SiteError> {
        let doc = document()?;
        let mut elements = Vec::with_capacity(2);
        if let Some(root) = doc.document_element() {
            elements.push((root, ROOT_LOCK_CLASS));
        }
        if let Some(body) = doc.body() {
            elements.push((body.into(), BODY_LOCK_CLASS));
        }
        Ok(elements)
    }

    fn set_locked(locked: bool) {
        let elements = match Self::lock_elements() {
            Ok(e) => e,
            Err(e) => {
                log::debug!("scroll lock unavailable: {}", e);
                return;
            }
        };
        for (el, class) in elements {
            let res = if locked {
                el.class_list().add_1(class)
            } else {
                el.class_list().remove_1(class)
            };
            if let Err(e) = res {
                log::warn!("couldn't update '{}' class: {:?}", class, e);
            }
        }
    }
}

impl ScrollLock for DocumentScrollLock {
    fn apply_scroll_lock(&self) {
        Self::set_locked(true);
    }

    fn release_scroll_lock(&self) {
        Self::set_locked(false);
    }
}

pub fn viewport_width() -> Result<f64, SiteError> {
    window()?
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .ok_or(SiteError::NoWindow)
}

/// Classifies a document click by walking up from its target.
pub fn click_target(target: Option<EventTarget>) -> ClickTarget {
    let el = match target.and_then(|t| t.dyn_into::<Element>().ok()) {
        Some(el) => el,
        None => return ClickTarget::default(),
    };
    let within = |selector: &str| matches!(el.closest(selector), Ok(Some(_)));
    ClickTarget {
        in_nav: within(NAV_SELECTOR),
        in_toggle: within(MENU_TOGGLE_SELECTOR),
    }
}

pub fn scroll_to(target: &ScrollTarget, header_offset: f64) -> Result<(), SiteError> {
    let window = window()?;
    let doc = document()?;
    let scroll_y = window.scroll_y().unwrap_or_default();
    let top = target.position(
        |id| {
            doc.get_element_by_id(id)
                .map(|el| el.get_bounding_client_rect().top())
        },
        scroll_y,
        header_offset,
    )?;
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
    Ok(())
}

pub fn open_external(url: &str) -> Result<(), SiteError> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(|_| SiteError::Open(url.to_string()))
        .map(|_| ())
}

pub fn open_mail_client(mailto: &str) -> Result<(), SiteError> {
    window()?
        .location()
        .set_href(mailto)
        .map_err(|_| SiteError::Open(mailto.to_string()))
}

/// Writes `text` to the clipboard in the background. Failures are only logged.
pub fn copy_to_clipboard(text: String, on_copied: impl FnOnce() + 'static) {
    spawn_local(async move {
        let res = match window() {
            Ok(w) => JsFuture::from(w.navigator().clipboard().write_text(&text))
                .await
                .map_err(|e| SiteError::Clipboard(format!("{:?}", e))),
            Err(e) => Err(e),
        };
        match res {
            Ok(_) => on_copied(),
            Err(e) => log::error!("{}", e),
        }
    });
}

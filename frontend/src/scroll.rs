use log::debug;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window object")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("browser rejected {action}: {message}")]
    Js { action: &'static str, message: String },
}

impl DomError {
    pub fn js(action: &'static str, value: JsValue) -> Self {
        DomError::Js {
            action,
            message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}

/// Where the page should scroll once the next render has landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Anchor {
        id: &'static str,
        fallback: Option<&'static str>,
    },
}

impl ScrollTarget {
    pub fn anchor(id: &'static str) -> Self {
        ScrollTarget::Anchor { id, fallback: None }
    }

    pub fn anchor_or(id: &'static str, fallback: &'static str) -> Self {
        ScrollTarget::Anchor { id, fallback: Some(fallback) }
    }

    /// Picks the first anchor id that `exists` reports as present.
    pub fn resolve(&self, exists: impl Fn(&str) -> bool) -> Option<&'static str> {
        match *self {
            ScrollTarget::Top => None,
            ScrollTarget::Anchor { id, fallback } => {
                if exists(id) {
                    Some(id)
                } else {
                    fallback.filter(|&f| exists(f))
                }
            }
        }
    }
}

/// Performs the scroll. A missing anchor is not an error, it just does nothing.
pub fn perform(target: ScrollTarget) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    if target == ScrollTarget::Top {
        window.scroll_to_with_x_and_y(0.0, 0.0);
        return Ok(());
    }

    let document = window.document().ok_or(DomError::NoDocument)?;
    match target.resolve(|id| document.get_element_by_id(id).is_some()) {
        Some(id) => {
            if let Some(element) = document.get_element_by_id(id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                debug!("Scrolled to #{}", id);
            }
        }
        None => debug!("No anchor for {:?}, skipping scroll", target),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_primary_anchor_when_present() {
        let target = ScrollTarget::anchor_or("team", "about");
        assert_eq!(target.resolve(|_| true), Some("team"));
    }

    #[test]
    fn falls_back_when_primary_missing() {
        let target = ScrollTarget::anchor_or("team", "about");
        assert_eq!(target.resolve(|id| id == "about"), Some("about"));
    }

    #[test]
    fn missing_anchor_without_fallback_is_a_no_op() {
        assert_eq!(ScrollTarget::anchor("nowhere").resolve(|_| false), None);
        assert_eq!(ScrollTarget::anchor_or("team", "about").resolve(|_| false), None);
    }

    #[test]
    fn js_error_names_the_rejected_action() {
        let err = DomError::Js {
            action: "set lang/dir",
            message: "InvalidCharacterError".into(),
        };
        assert_eq!(err.to_string(), "browser rejected set lang/dir: InvalidCharacterError");
    }

    #[test]
    fn top_has_no_anchor() {
        assert_eq!(ScrollTarget::Top.resolve(|_| true), None);
    }
}

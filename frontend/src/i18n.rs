use log::debug;

use crate::content::{Content, AR, EN};
use crate::scroll::DomError;

/// Display language of the site. Lives for the session only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    pub fn is_rtl(self) -> bool {
        self == Locale::Ar
    }

    /// Label for the language toggle: always names the *other* language.
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::En => "العربية",
            Locale::Ar => "English",
        }
    }

    pub fn content(self) -> &'static Content {
        match self {
            Locale::En => &EN,
            Locale::Ar => &AR,
        }
    }

    /// Forward-pointing arrow for buttons, mirrored in RTL.
    pub fn forward_arrow(self) -> &'static str {
        if self.is_rtl() { "←" } else { "→" }
    }

    pub fn back_arrow(self) -> &'static str {
        if self.is_rtl() { "→" } else { "←" }
    }
}

/// Sets `lang` and `dir` on the document root so browser defaults (scrollbar
/// side, form controls) follow the active locale.
pub fn apply_to_document(locale: Locale) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    let Some(root) = root else {
        debug!("No document root, leaving lang/dir untouched");
        return;
    };
    let applied = root
        .set_attribute("lang", locale.code())
        .and_then(|_| root.set_attribute("dir", locale.dir()))
        .map_err(|e| DomError::js("set lang/dir", e));
    if let Err(err) = applied {
        debug!("{}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_start() {
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
        assert_eq!(Locale::Ar.toggled(), Locale::En);
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
        assert_eq!(Locale::Ar.forward_arrow(), Locale::En.back_arrow());
    }

    #[test]
    fn switch_label_names_the_other_language() {
        assert_eq!(Locale::En.switch_label(), "العربية");
        assert_eq!(Locale::Ar.switch_label(), "English");
    }
}

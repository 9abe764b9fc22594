//! Site-wide UI state and the transitions between views.
//!
//! `SiteState` is owned by `App` through `use_reducer`. Every navigation
//! action closes the mobile menu and may queue a [`ScrollTarget`]; `App`
//! performs the scroll in an effect keyed on `scroll_seq`, i.e. after the
//! view the action switched to has been rendered.

use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::i18n::Locale;
use crate::scroll::ScrollTarget;

/// Top-level screen. Holding the member id inside `Profile` makes a selected
/// member and an open calculator impossible at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Main,
    Profile(&'static str),
    TaxCalculator,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteState {
    pub view: View,
    pub locale: Locale,
    pub menu_open: bool,
    /// Contact form option picked from a service card.
    pub requested_service: Option<ServiceRequest>,
    pub scroll: Option<ScrollTarget>,
    pub scroll_seq: u32,
}

/// A "Learn more" click. `seq` differs on every click, so choosing the same
/// card twice still reaches the contact form as a new request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRequest {
    pub option: usize,
    pub seq: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiteAction {
    SelectSection(&'static str),
    OpenProfile(&'static str),
    OpenTaxCalculator,
    BackToTeam,
    BackToServices,
    RequestService(usize),
    ToggleMenu,
    ToggleLanguage,
}

#[cfg(test)]
impl SiteState {
    fn selected_member(&self) -> Option<&'static str> {
        match self.view {
            View::Profile(id) => Some(id),
            _ => None,
        }
    }

    fn calculator_open(&self) -> bool {
        self.view == View::TaxCalculator
    }
}

impl SiteState {
    fn navigate(mut self, view: View, scroll: ScrollTarget) -> Self {
        self.view = view;
        self.menu_open = false;
        self.scroll = Some(scroll);
        self.scroll_seq = self.scroll_seq.wrapping_add(1);
        self
    }

    pub fn apply(self, action: SiteAction) -> Self {
        match action {
            SiteAction::SelectSection(id) => {
                if self.view != View::Main {
                    info!("Leaving {:?} for section {}", self.view, id);
                }
                self.navigate(View::Main, ScrollTarget::anchor(id))
            }
            SiteAction::OpenProfile(id) => {
                info!("Opening profile {}", id);
                self.navigate(View::Profile(id), ScrollTarget::Top)
            }
            SiteAction::OpenTaxCalculator => {
                info!("Opening tax calculator");
                self.navigate(View::TaxCalculator, ScrollTarget::Top)
            }
            SiteAction::BackToTeam => {
                self.navigate(View::Main, ScrollTarget::anchor_or("team", "about"))
            }
            SiteAction::BackToServices => {
                self.navigate(View::Main, ScrollTarget::anchor_or("services", "home"))
            }
            SiteAction::RequestService(option) => {
                let mut next = self.navigate(View::Main, ScrollTarget::anchor("contact"));
                next.requested_service = Some(ServiceRequest {
                    option,
                    seq: next.scroll_seq,
                });
                next
            }
            SiteAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            SiteAction::ToggleLanguage => {
                let locale = self.locale.toggled();
                info!("Switching language to {}", locale.code());
                Self {
                    locale,
                    menu_open: false,
                    ..self
                }
            }
        }
    }
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(actions: &[SiteAction]) -> SiteState {
        actions
            .iter()
            .cloned()
            .fold(SiteState::default(), SiteState::apply)
    }

    #[test]
    fn starts_on_main_in_english() {
        let state = SiteState::default();
        assert_eq!(state.view, View::Main);
        assert_eq!(state.locale, Locale::En);
        assert!(!state.menu_open);
        assert_eq!(state.scroll, None);
    }

    #[test]
    fn profile_then_back_to_team() {
        let state = run(&[SiteAction::OpenProfile("rana"), SiteAction::BackToTeam]);
        assert_eq!(state.view, View::Main);
        assert_eq!(state.selected_member(), None);
        assert_eq!(state.scroll, Some(ScrollTarget::anchor_or("team", "about")));
    }

    #[test]
    fn open_profile_scrolls_to_top() {
        let state = run(&[SiteAction::OpenProfile("omar")]);
        assert_eq!(state.selected_member(), Some("omar"));
        assert_eq!(state.scroll, Some(ScrollTarget::Top));
    }

    #[test]
    fn select_section_leaves_profile_whatever_the_anchor() {
        for anchor in ["services", "does-not-exist"] {
            let state = run(&[SiteAction::OpenProfile("salem"), SiteAction::SelectSection(anchor)]);
            assert_eq!(state.view, View::Main);
            assert_eq!(state.scroll, Some(ScrollTarget::anchor(anchor)));
        }
    }

    #[test]
    fn calculator_and_profile_are_exclusive() {
        let state = run(&[SiteAction::OpenProfile("salem"), SiteAction::OpenTaxCalculator]);
        assert!(state.calculator_open());
        assert_eq!(state.selected_member(), None);

        let state = state.apply(SiteAction::OpenProfile("omar"));
        assert!(!state.calculator_open());
        assert_eq!(state.selected_member(), Some("omar"));
    }

    #[test]
    fn exclusivity_holds_across_every_action_sequence() {
        let actions = [
            SiteAction::SelectSection("about"),
            SiteAction::OpenProfile("mohammed"),
            SiteAction::OpenTaxCalculator,
            SiteAction::BackToTeam,
            SiteAction::BackToServices,
            SiteAction::RequestService(2),
            SiteAction::ToggleMenu,
            SiteAction::ToggleLanguage,
        ];
        let mut state = SiteState::default();
        for first in &actions {
            for second in &actions {
                state = state.apply(first.clone()).apply(second.clone());
                assert!(!(state.selected_member().is_some() && state.calculator_open()));
            }
        }
    }

    #[test]
    fn back_to_services_from_calculator() {
        let state = run(&[SiteAction::OpenTaxCalculator, SiteAction::BackToServices]);
        assert_eq!(state.view, View::Main);
        assert_eq!(state.scroll, Some(ScrollTarget::anchor_or("services", "home")));
    }

    #[test]
    fn navigation_closes_menu() {
        let navigations = [
            SiteAction::SelectSection("home"),
            SiteAction::OpenProfile("salem"),
            SiteAction::OpenTaxCalculator,
            SiteAction::BackToTeam,
            SiteAction::BackToServices,
            SiteAction::RequestService(0),
            SiteAction::ToggleLanguage,
        ];
        for action in navigations {
            let state = run(&[SiteAction::ToggleMenu, action.clone()]);
            assert!(!state.menu_open, "{:?} left the menu open", action);
        }
    }

    #[test]
    fn toggle_menu_keeps_view() {
        let state = run(&[SiteAction::OpenTaxCalculator, SiteAction::ToggleMenu]);
        assert!(state.menu_open);
        assert!(state.calculator_open());
        assert!(!state.apply(SiteAction::ToggleMenu).menu_open);
    }

    #[test]
    fn toggle_language_twice_is_identity_for_view() {
        let before = run(&[SiteAction::OpenProfile("rana")]);
        let after = before
            .clone()
            .apply(SiteAction::ToggleLanguage)
            .apply(SiteAction::ToggleLanguage);
        assert_eq!(after.locale, before.locale);
        assert_eq!(after.view, before.view);
        assert_eq!(after.selected_member(), Some("rana"));
        assert_eq!(after.scroll_seq, before.scroll_seq);
    }

    #[test]
    fn request_service_preselects_and_scrolls_to_contact() {
        let state = run(&[SiteAction::OpenTaxCalculator, SiteAction::RequestService(1)]);
        assert_eq!(state.view, View::Main);
        assert_eq!(state.requested_service.map(|r| r.option), Some(1));
        assert_eq!(state.scroll, Some(ScrollTarget::anchor("contact")));
    }

    #[test]
    fn repeated_service_request_is_a_new_request() {
        let once = run(&[SiteAction::RequestService(0)]);
        let twice = once.clone().apply(SiteAction::RequestService(0));
        let (first, second) = (once.requested_service.unwrap(), twice.requested_service.unwrap());
        assert_eq!(first.option, second.option);
        assert_ne!(first, second);
    }

    #[test]
    fn each_navigation_bumps_scroll_seq() {
        let state = run(&[SiteAction::SelectSection("about"), SiteAction::SelectSection("about")]);
        assert_eq!(state.scroll_seq, 2);
    }

    #[test]
    fn reducer_matches_apply() {
        let state = Rc::new(SiteState::default());
        let reduced = state.reduce(SiteAction::OpenTaxCalculator);
        assert_eq!(*reduced, SiteState::default().apply(SiteAction::OpenTaxCalculator));
    }
}

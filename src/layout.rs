// Page shell: header + content slot + footer + toast overlay.

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::headers::MainHeader;
use crate::components::toast::Toaster;
use crate::context::{UserProfile, UserRole};

/// Visibility flags for the header-driven panels. Each mounted [`PageShell`]
/// owns exactly one of these; it starts closed and is only ever flipped by
/// the two header callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    pub filter_open: bool,
    pub menu_open: bool,
}

impl ToggleState {
    pub fn toggled_filter(self) -> Self {
        Self {
            filter_open: !self.filter_open,
            ..self
        }
    }

    pub fn toggled_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub user_type: Option<UserRole>,
    #[prop_or_default]
    pub is_authenticated: bool,
    /// Expected to be present iff `is_authenticated`; the shell passes it
    /// through untouched and leaves that invariant to the caller.
    #[prop_or_default]
    pub user_profile: Option<UserProfile>,
}

/// Single composition point for a full page: header (fed the user snapshot),
/// a vertically growing content region, footer, and one toast overlay.
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    let toggles = use_state(ToggleState::default);

    let on_filter_toggle = {
        let toggles = toggles.clone();
        Callback::from(move |_| toggles.set(toggles.toggled_filter()))
    };

    let on_menu_toggle = {
        let toggles = toggles.clone();
        Callback::from(move |_| toggles.set(toggles.toggled_menu()))
    };

    html! {
      <div class="page">
        <MainHeader
          user_type={props.user_type}
          is_authenticated={props.is_authenticated}
          user_profile={props.user_profile.clone()}
          toggles={*toggles}
          {on_filter_toggle}
          {on_menu_toggle}
        />

        <main class="page-body">
          { for props.children.iter() }
        </main>

        <Footer />

        <Toaster />
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::ToggleState;

    #[test]
    fn starts_with_both_panels_closed() {
        assert_eq!(
            ToggleState::default(),
            ToggleState {
                filter_open: false,
                menu_open: false,
            }
        );
    }

    #[test]
    fn filter_toggle_leaves_menu_untouched() {
        let open_menu = ToggleState {
            filter_open: false,
            menu_open: true,
        };
        let after = open_menu.toggled_filter();
        assert!(after.filter_open);
        assert!(after.menu_open);
    }

    #[test]
    fn menu_toggle_leaves_filter_untouched() {
        let open_filter = ToggleState {
            filter_open: true,
            menu_open: false,
        };
        let after = open_filter.toggled_menu();
        assert!(after.filter_open);
        assert!(after.menu_open);
    }

    #[test]
    fn toggles_are_involutions() {
        let state = ToggleState::default();
        assert_eq!(state.toggled_filter().toggled_filter(), state);
        assert_eq!(state.toggled_menu().toggled_menu(), state);
    }
}

// Header family: one concrete header per audience, selected from the user
// snapshot the page shell passes down.

use yew::prelude::*;

use crate::app::Route;
use crate::components::icons::{Icon, IconGlyph};
use crate::components::logo::{DentivaLogo, LogoSize};
use crate::components::toast;
use crate::context::{AppActions, UserProfile, UserRole};
use crate::layout::ToggleState;

/// Which concrete header a user snapshot resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Landing,
    Clinic,
    Supplier,
    Vendor,
}

impl HeaderKind {
    /// Unauthenticated visitors always land on the public header, whatever
    /// profile data the caller happened to pass along.
    pub fn select(user_type: Option<UserRole>, is_authenticated: bool) -> Self {
        match user_type {
            Some(role) if is_authenticated => match role {
                UserRole::Clinic => HeaderKind::Clinic,
                UserRole::Supplier => HeaderKind::Supplier,
                UserRole::Vendor => HeaderKind::Vendor,
            },
            _ => HeaderKind::Landing,
        }
    }
}

/// Clinic headers show the clinic name; profiles from before clinics were a
/// separate field only carry `company`.
pub fn clinic_display(profile: &UserProfile) -> &str {
    profile.clinic.as_deref().unwrap_or(&profile.company)
}

#[derive(Properties, PartialEq)]
pub struct MainHeaderProps {
    #[prop_or_default]
    pub user_type: Option<UserRole>,
    #[prop_or_default]
    pub is_authenticated: bool,
    #[prop_or_default]
    pub user_profile: Option<UserProfile>,
    #[prop_or_default]
    pub toggles: ToggleState,
    #[prop_or_default]
    pub on_filter_toggle: Callback<()>,
    #[prop_or_default]
    pub on_menu_toggle: Callback<()>,
}

#[function_component(MainHeader)]
pub fn main_header(props: &MainHeaderProps) -> Html {
    match HeaderKind::select(props.user_type, props.is_authenticated) {
        HeaderKind::Landing => html! {
            <LandingHeader
                menu_open={props.toggles.menu_open}
                on_menu_toggle={props.on_menu_toggle.clone()}
            />
        },
        HeaderKind::Clinic => html! {
            <RoleHeader
                audience={HeaderKind::Clinic}
                profile={props.user_profile.clone()}
                filter_open={props.toggles.filter_open}
                on_filter_toggle={props.on_filter_toggle.clone()}
            />
        },
        HeaderKind::Supplier => html! {
            <RoleHeader
                audience={HeaderKind::Supplier}
                profile={props.user_profile.clone()}
                filter_open={props.toggles.filter_open}
                on_filter_toggle={props.on_filter_toggle.clone()}
            />
        },
        HeaderKind::Vendor => html! {
            <RoleHeader audience={HeaderKind::Vendor} profile={props.user_profile.clone()} />
        },
    }
}

// ---------- landing (public) header ----------

const LANDING_NAV: &[&str] = &["Solutions", "Marketplace", "Pricing", "Support"];

#[derive(Properties, PartialEq)]
pub struct LandingHeaderProps {
    #[prop_or_default]
    pub menu_open: bool,
    #[prop_or_default]
    pub on_menu_toggle: Callback<()>,
}

#[function_component(LandingHeader)]
pub fn landing_header(props: &LandingHeaderProps) -> Html {
    let actions = use_context::<AppActions>().unwrap_or_default();
    let signin_open = use_state(|| false);

    let nav_button = |label: &'static str| {
        let navigate = actions.navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| match label {
            "Marketplace" => navigate.emit(Route::Home),
            "Support" => navigate.emit(Route::Support),
            _ => toast::info(format!("{label} is not wired up in this preview.")),
        });
        html! { <button class="btn ghost" {onclick}>{ label }</button> }
    };

    let signin_choices = {
        let signin_open = signin_open.clone();
        let login = actions.login.clone();
        [UserRole::Clinic, UserRole::Supplier, UserRole::Vendor]
            .into_iter()
            .map(|role| {
                let signin_open = signin_open.clone();
                let login = login.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    signin_open.set(false);
                    login.emit(role);
                });
                html! {
                  <button class="btn small" {onclick}>
                    { format!("Continue as {}", role.label()) }
                  </button>
                }
            })
            .collect::<Html>()
    };

    let on_signin_toggle = {
        let signin_open = signin_open.clone();
        Callback::from(move |_: MouseEvent| signin_open.set(!*signin_open))
    };

    let on_menu_click = {
        let on_menu_toggle = props.on_menu_toggle.clone();
        Callback::from(move |_: MouseEvent| on_menu_toggle.emit(()))
    };

    let on_logo_click = {
        let navigate = actions.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Home))
    };

    html! {
      <header class="site-header">
        <div class="container">
          <div class="header-row">
            <DentivaLogo size={LogoSize::Md} onclick={on_logo_click} />

            <nav class="header-nav desktop">
              { for LANDING_NAV.iter().copied().map(&nav_button) }
            </nav>

            <div class="header-actions desktop">
              <button class="btn primary" onclick={on_signin_toggle.clone()}>
                <IconGlyph icon={Icon::UserRound} />
                { " Sign In" }
              </button>
            </div>

            <button class="btn icon menu-button" onclick={on_menu_click} aria-label="Toggle menu">
              <IconGlyph icon={if props.menu_open { Icon::Close } else { Icon::Menu }} />
            </button>
          </div>

          if *signin_open {
            <div class="header-panel">
              <span class="muted">{ "Demo accounts: pick an audience" }</span>
              <div class="row">
                { signin_choices }
              </div>
            </div>
          }

          if props.menu_open {
            <div class="header-panel">
              { for LANDING_NAV.iter().copied().map(&nav_button) }
              <button class="btn primary wide" onclick={on_signin_toggle}>
                { "Sign In" }
              </button>
            </div>
          }
        </div>
      </header>
    }
}

// ---------- authenticated headers ----------

fn role_nav(audience: HeaderKind) -> &'static [&'static str] {
    match audience {
        HeaderKind::Clinic => &["Procurement", "Orders", "Insurance"],
        HeaderKind::Supplier => &["Catalog", "Orders", "Analytics"],
        HeaderKind::Vendor => &["Services", "Leads", "Billing"],
        HeaderKind::Landing => &[],
    }
}

#[derive(Properties, PartialEq)]
pub struct RoleHeaderProps {
    pub audience: HeaderKind,
    #[prop_or_default]
    pub profile: Option<UserProfile>,
    #[prop_or_default]
    pub filter_open: bool,
    #[prop_or_default]
    pub on_filter_toggle: Callback<()>,
}

#[function_component(RoleHeader)]
pub fn role_header(props: &RoleHeaderProps) -> Html {
    let actions = use_context::<AppActions>().unwrap_or_default();

    let nav_button = |label: &'static str| {
        let onclick = Callback::from(move |_: MouseEvent| {
            toast::info(format!("{label} is not wired up in this preview."));
        });
        html! { <button class="btn ghost" {onclick}>{ label }</button> }
    };

    // Clinic accounts surface the clinic name, everyone else the company.
    let who = props.profile.as_ref().map(|profile| {
        let org = match props.audience {
            HeaderKind::Clinic => clinic_display(profile).to_string(),
            _ => profile.company.clone(),
        };
        html! {
          <span class="who">
            <span class="name">{ profile.name.clone() }</span>
            <span class="org">{ org }</span>
          </span>
        }
    });

    let filter_button = matches!(props.audience, HeaderKind::Clinic | HeaderKind::Supplier)
        .then(|| {
            let on_filter_toggle = props.on_filter_toggle.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_filter_toggle.emit(()));
            let label = if props.filter_open { "Filters: ON" } else { "Filters: OFF" };
            html! { <button class="btn small" {onclick}>{ label }</button> }
        });

    let on_logout = {
        let logout = actions.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let on_logo_click = {
        let navigate = actions.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Home))
    };

    html! {
      <header class="site-header">
        <div class="container">
          <div class="header-row">
            <DentivaLogo size={LogoSize::Md} onclick={on_logo_click} />

            <nav class="header-nav desktop">
              { for role_nav(props.audience).iter().copied().map(&nav_button) }
            </nav>

            <div class="header-actions">
              { filter_button }
              { who }
              <button class="btn icon" aria-label="Cart">
                <IconGlyph icon={Icon::Cart} />
              </button>
              <button class="btn" onclick={on_logout}>{ "Sign Out" }</button>
            </div>
          </div>
        </div>
      </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Dr. A".into(),
            company: "ClinicCo".into(),
            clinic: None,
            avatar: None,
        }
    }

    #[test]
    fn logged_out_resolves_to_landing() {
        assert_eq!(HeaderKind::select(None, false), HeaderKind::Landing);
        assert_eq!(HeaderKind::select(None, true), HeaderKind::Landing);
    }

    #[test]
    fn role_without_authentication_resolves_to_landing() {
        // Extraneous role data from a caller must not unlock a role header.
        assert_eq!(
            HeaderKind::select(Some(UserRole::Clinic), false),
            HeaderKind::Landing
        );
        assert_eq!(
            HeaderKind::select(Some(UserRole::Vendor), false),
            HeaderKind::Landing
        );
    }

    #[test]
    fn authenticated_roles_get_their_own_header() {
        assert_eq!(
            HeaderKind::select(Some(UserRole::Clinic), true),
            HeaderKind::Clinic
        );
        assert_eq!(
            HeaderKind::select(Some(UserRole::Supplier), true),
            HeaderKind::Supplier
        );
        assert_eq!(
            HeaderKind::select(Some(UserRole::Vendor), true),
            HeaderKind::Vendor
        );
    }

    #[test]
    fn clinic_display_falls_back_to_company() {
        let mut p = profile();
        assert_eq!(clinic_display(&p), "ClinicCo");
        p.clinic = Some("Downtown Dental".into());
        assert_eq!(clinic_display(&p), "Downtown Dental");
    }

    #[test]
    fn every_audience_has_nav_except_landing() {
        assert!(role_nav(HeaderKind::Landing).is_empty());
        for kind in [HeaderKind::Clinic, HeaderKind::Supplier, HeaderKind::Vendor] {
            assert_eq!(role_nav(kind).len(), 3);
        }
    }
}

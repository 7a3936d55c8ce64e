use yew::prelude::*;

use crate::components::toast;
use crate::context::{self, AppActions, Session, UserContext, UserRole};
use crate::pages::{HomePage, SupportPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Support,
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(Route::default);
    let session = use_state(|| None::<Session>);

    // Restore a persisted session once on startup.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if let Some(stored) = context::load_session() {
                session.set(Some(stored));
            }
            || ()
        });
    }

    let login = {
        let session = session.clone();
        Callback::from(move |role: UserRole| {
            let fresh = context::demo_session(role);
            if let Err(e) = context::store_session(&fresh) {
                toast::error(format!("Could not persist the session: {e}"));
            }
            toast::success(format!("Signed in as {}.", fresh.profile.name));
            session.set(Some(fresh));
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_| {
            context::clear_session();
            session.set(None);
            toast::info("Signed out.");
        })
    };

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| route.set(target))
    };

    let actions = AppActions {
        login,
        logout,
        navigate,
    };

    let user = match &*session {
        Some(active) => UserContext::from_session(active),
        None => UserContext::logged_out(),
    };

    let page = match *route {
        Route::Home => html! { <HomePage {user} /> },
        Route::Support => html! { <SupportPage /> },
    };

    html! {
      <ContextProvider<AppActions> context={actions}>
        { page }
      </ContextProvider<AppActions>>
    }
}

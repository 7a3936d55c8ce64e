// User/auth context handed to the page shell, plus session persistence.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::app::Route;

const SESSION_KEY: &str = "dentiva_session_v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Clinic,
    Supplier,
    Vendor,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Clinic => "Clinic",
            UserRole::Supplier => "Supplier",
            UserRole::Vendor => "Vendor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub company: String,
    #[serde(default)]
    pub clinic: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A signed-in identity as stored in the browser. The profile part is what
/// the header family actually renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub profile: UserProfile,
}

/// Immutable role/auth snapshot passed into [`PageShell`] for one render.
/// Owned by the caller; the shell never mutates it.
///
/// [`PageShell`]: crate::layout::PageShell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserContext {
    pub user_type: Option<UserRole>,
    pub is_authenticated: bool,
    pub user_profile: Option<UserProfile>,
}

impl UserContext {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn from_session(session: &Session) -> Self {
        Self {
            user_type: Some(session.role),
            is_authenticated: true,
            user_profile: Some(session.profile.clone()),
        }
    }
}

/// App-level actions the header family reaches through a Yew context, so the
/// page shell's own props stay limited to the user snapshot.
#[derive(Clone, PartialEq, Default)]
pub struct AppActions {
    pub login: Callback<UserRole>,
    pub logout: Callback<()>,
    pub navigate: Callback<Route>,
}

// ---------- demo identities ----------

pub fn demo_session(role: UserRole) -> Session {
    match role {
        UserRole::Clinic => Session {
            id: "1".into(),
            email: "dr.johnson@downtowndental.com".into(),
            role,
            profile: UserProfile {
                name: "Dr. Sarah Johnson".into(),
                company: "Downtown Dental Clinic".into(),
                clinic: Some("Downtown Dental Clinic".into()),
                avatar: None,
            },
        },
        UserRole::Supplier => Session {
            id: "2".into(),
            email: "maria@dentaltech.com".into(),
            role,
            profile: UserProfile {
                name: "Maria Rodriguez".into(),
                company: "DentalTech Solutions".into(),
                clinic: None,
                avatar: None,
            },
        },
        UserRole::Vendor => Session {
            id: "3".into(),
            email: "james@mitchellservices.com".into(),
            role,
            profile: UserProfile {
                name: "Dr. James Mitchell".into(),
                company: "Mitchell Services Group".into(),
                clinic: None,
                avatar: None,
            },
        },
    }
}

// ---------- persistence (localStorage) ----------

pub fn load_session() -> Option<Session> {
    LocalStorage::get::<Session>(SESSION_KEY).ok()
}

pub fn store_session(session: &Session) -> gloo_storage::Result<()> {
    LocalStorage::set(SESSION_KEY, session)
}

pub fn clear_session() {
    LocalStorage::delete(SESSION_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_context_is_all_absent() {
        let ctx = UserContext::logged_out();
        assert_eq!(ctx.user_type, None);
        assert!(!ctx.is_authenticated);
        assert_eq!(ctx.user_profile, None);
    }

    #[test]
    fn session_context_carries_profile_verbatim() {
        let session = demo_session(UserRole::Clinic);
        let ctx = UserContext::from_session(&session);
        assert_eq!(ctx.user_type, Some(UserRole::Clinic));
        assert!(ctx.is_authenticated);
        assert_eq!(ctx.user_profile.as_ref(), Some(&session.profile));
    }

    #[test]
    fn demo_identities_are_distinct_per_role() {
        let roles = [UserRole::Clinic, UserRole::Supplier, UserRole::Vendor];
        for role in roles {
            assert_eq!(demo_session(role).role, role);
        }
        let ids: Vec<_> = roles.iter().map(|r| demo_session(*r).id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn clinic_demo_has_a_clinic_name() {
        let session = demo_session(UserRole::Clinic);
        assert!(session.profile.clinic.is_some());
        assert_eq!(demo_session(UserRole::Supplier).profile.clinic, None);
    }

    #[test]
    fn session_survives_a_serde_round_trip() {
        let session = demo_session(UserRole::Vendor);
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Supplier).unwrap(),
            "\"supplier\""
        );
    }
}

use dioxus::prelude::*;
use shared_types::{AuthUser, UserRole};

/// Global session state: the authenticated user (if any) and whether the
/// startup restore is still resolving.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: Signal<Option<AuthUser>>,
    /// True only during the window before the persisted session has been
    /// checked once; permanently false afterwards. `current_user` is only
    /// meaningful once this is false.
    pub is_loading: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            is_loading: Signal::new(true),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    /// Complete the one-shot startup resolution.
    pub fn resolve(&mut self, user: Option<AuthUser>) {
        self.current_user.set(user);
        self.is_loading.set(false);
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// The current user's parsed role. `Unknown` when signed out or when the
/// stored role string is unrecognized.
pub fn use_user_role() -> UserRole {
    let session = use_session();
    let user = session.current_user.read().clone();
    user.map(|u| u.user_role()).unwrap_or_default()
}

/// Access requirement declared per navigable route.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RouteAccess {
    /// Requires a resolved, present authenticated user.
    Protected,
    /// Intended for anonymous sessions only (e.g. the login form).
    PublicOnly,
}

/// Outcome of evaluating a navigation attempt against session state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GateDecision {
    Loading,
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Decide what to do with a navigation attempt.
///
/// Pure function of current session state, re-evaluated on every render
/// pass, so revoking authentication while on a protected page redirects
/// immediately. A missing user is a legitimate decision input, not an
/// error; there is no retry path.
pub fn evaluate_gate(access: RouteAccess, is_loading: bool, authenticated: bool) -> GateDecision {
    if is_loading {
        return GateDecision::Loading;
    }
    match access {
        RouteAccess::Protected if !authenticated => GateDecision::RedirectToLogin,
        RouteAccess::PublicOnly if authenticated => GateDecision::RedirectToDashboard,
        _ => GateDecision::Render,
    }
}

/// Which sidebar groups are visible for a role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarVisibility {
    pub academics: bool,
    pub finance: bool,
    pub assessments: bool,
    pub communication: bool,
}

/// Sidebar visibility for a role. Pure so it can be tested without a
/// component tree.
pub fn sidebar_visibility(role: UserRole) -> SidebarVisibility {
    match role {
        UserRole::SuperAdmin | UserRole::Admin | UserRole::Principal => SidebarVisibility {
            academics: true,
            finance: true,
            assessments: true,
            communication: true,
        },
        UserRole::Faculty => SidebarVisibility {
            academics: true,
            finance: false,
            assessments: true,
            communication: true,
        },
        UserRole::Student | UserRole::Parent => SidebarVisibility {
            academics: false,
            finance: true,
            assessments: true,
            communication: true,
        },
        UserRole::Unknown => SidebarVisibility {
            academics: false,
            finance: false,
            assessments: false,
            communication: false,
        },
    }
}

pub fn use_sidebar_visibility() -> SidebarVisibility {
    sidebar_visibility(use_user_role())
}

const SESSION_COOKIE: &str = "campanile_session";

/// Persist the signed-in account's email so a reload stays signed in.
pub fn persist_session(email: &str) {
    document::eval(&format!(
        "document.cookie = '{SESSION_COOKIE}={email};path=/;max-age=604800;SameSite=Lax';"
    ));
}

/// Drop the persisted session cookie.
pub fn clear_persisted_session() {
    document::eval(&format!(
        "document.cookie = '{SESSION_COOKIE}=;path=/;max-age=0;SameSite=Lax';"
    ));
}

/// Read the persisted session cookie, returning the stored account email.
pub async fn read_persisted_session() -> Option<String> {
    let value = document::eval(&format!(
        r#"
        var m = document.cookie.match(/(?:^|;\s*){SESSION_COOKIE}=([^;]*)/);
        return m ? m[1] : "";
        "#
    ))
    .await
    .ok()?;
    match value.as_str() {
        Some(email) if !email.is_empty() => Some(email.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_regardless_of_user_or_requirement() {
        for access in [RouteAccess::Protected, RouteAccess::PublicOnly] {
            for authenticated in [true, false] {
                assert_eq!(
                    evaluate_gate(access, true, authenticated),
                    GateDecision::Loading
                );
            }
        }
    }

    #[test]
    fn protected_without_user_redirects_to_login() {
        assert_eq!(
            evaluate_gate(RouteAccess::Protected, false, false),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn protected_with_user_renders() {
        assert_eq!(
            evaluate_gate(RouteAccess::Protected, false, true),
            GateDecision::Render
        );
    }

    #[test]
    fn public_only_with_user_redirects_to_dashboard() {
        assert_eq!(
            evaluate_gate(RouteAccess::PublicOnly, false, true),
            GateDecision::RedirectToDashboard
        );
    }

    #[test]
    fn public_only_without_user_renders() {
        assert_eq!(
            evaluate_gate(RouteAccess::PublicOnly, false, false),
            GateDecision::Render
        );
    }

    #[test]
    fn staff_roles_see_all_groups() {
        for role in [UserRole::SuperAdmin, UserRole::Admin, UserRole::Principal] {
            let vis = sidebar_visibility(role);
            assert!(vis.academics && vis.finance && vis.assessments && vis.communication);
        }
    }

    #[test]
    fn faculty_does_not_see_finance() {
        let vis = sidebar_visibility(UserRole::Faculty);
        assert!(vis.academics);
        assert!(!vis.finance);
        assert!(vis.assessments);
    }

    #[test]
    fn students_and_parents_see_own_slice_only() {
        for role in [UserRole::Student, UserRole::Parent] {
            let vis = sidebar_visibility(role);
            assert!(!vis.academics);
            assert!(vis.finance && vis.assessments && vis.communication);
        }
    }

    #[test]
    fn unknown_role_sees_nothing() {
        let vis = sidebar_visibility(UserRole::Unknown);
        assert!(!vis.academics && !vis.finance && !vis.assessments && !vis.communication);
    }
}

pub mod admin;
pub mod faculty;
pub mod parent;
pub mod principal;
pub mod student;
pub mod super_admin;

use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::session::use_user_role;

/// Role-adaptive dashboard: renders the appropriate view for the user's
/// role. Exactly one branch renders; unrecognized roles get a visible
/// fallback instead of nothing.
#[component]
pub fn Dashboard() -> Element {
    let role = use_user_role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        match role {
            UserRole::SuperAdmin => rsx! { super_admin::SuperAdminDashboard {} },
            UserRole::Admin => rsx! { admin::AdminDashboard {} },
            UserRole::Principal => rsx! { principal::PrincipalDashboard {} },
            UserRole::Faculty => rsx! { faculty::FacultyDashboard {} },
            UserRole::Student => rsx! { student::StudentDashboard {} },
            UserRole::Parent => rsx! { parent::ParentDashboard {} },
            UserRole::Unknown => rsx! { UnknownRoleDashboard {} },
        }
    }
}

/// Shown when the account carries a role string this client does not
/// recognize.
#[component]
fn UnknownRoleDashboard() -> Element {
    rsx! {
        div { class: "dashboard-fallback",
            Card {
                CardHeader {
                    CardTitle { "Account needs attention" }
                    CardDescription { "Your account role is not recognized by this portal." }
                }
                CardContent {
                    p { "Ask a school administrator to assign your account a valid role, then sign in again." }
                }
            }
        }
    }
}

pub mod attendance;
pub mod dashboard;
pub mod examinations;
pub mod fees;
pub mod login;
pub mod not_found;
pub mod notices;
pub mod students;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendarCheck, LdClipboardList, LdGraduationCap, LdLayoutDashboard, LdLogOut, LdMegaphone,
    LdReceipt,
};
use dioxus_free_icons::Icon;
use shared_types::ModuleFlags;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Navbar, NavbarActions, Separator, Sidebar,
    SidebarFooter, SidebarGroup, SidebarHeader, SidebarItem,
};

use crate::session::{
    clear_persisted_session, evaluate_gate, use_session, use_sidebar_visibility, GateDecision,
    RouteAccess,
};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(GuestGuard)]
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[end_layout]
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/students")]
    StudentList {},
    #[route("/students/:id")]
    StudentDetail { id: String },
    #[route("/attendance")]
    AttendanceList {},
    #[route("/fees")]
    FeeList {},
    #[route("/examinations")]
    ExamResultList {},
    #[route("/notices")]
    NoticeBoard {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Gate layout for protected routes.
///
/// A pure function of session state evaluated on every render pass: while
/// the startup restore is resolving it shows a spinner, without a user it
/// redirects to the login view, otherwise it renders the target. Because it
/// re-runs on every session change, signing out on a protected page
/// redirects immediately.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();
    let decision = evaluate_gate(
        RouteAccess::Protected,
        *session.is_loading.read(),
        session.is_authenticated(),
    );

    match decision {
        GateDecision::Loading => rsx! {
            div { class: "session-gate-loading",
                p { "Loading..." }
            }
        },
        GateDecision::RedirectToLogin => {
            navigator().push(Route::Login { redirect: None });
            rsx! {
                div { class: "session-gate-loading",
                    p { "Redirecting to sign in..." }
                }
            }
        }
        GateDecision::RedirectToDashboard => {
            navigator().push(Route::Dashboard {});
            rsx! {
                div { class: "session-gate-loading",
                    p { "Redirecting..." }
                }
            }
        }
        GateDecision::Render => rsx! { Outlet::<Route> {} },
    }
}

/// Gate layout for anonymous-only routes (the login form).
///
/// An already-authenticated user is sent to the dashboard instead.
#[component]
fn GuestGuard() -> Element {
    let session = use_session();
    let decision = evaluate_gate(
        RouteAccess::PublicOnly,
        *session.is_loading.read(),
        session.is_authenticated(),
    );

    match decision {
        GateDecision::Loading => rsx! {
            div { class: "session-gate-loading",
                p { "Loading..." }
            }
        },
        GateDecision::RedirectToDashboard => {
            navigator().push(Route::Dashboard {});
            rsx! {
                div { class: "session-gate-loading",
                    p { "Redirecting..." }
                }
            }
        }
        GateDecision::RedirectToLogin => {
            navigator().push(Route::Login { redirect: None });
            rsx! {
                div { class: "session-gate-loading",
                    p { "Redirecting to sign in..." }
                }
            }
        }
        GateDecision::Render => rsx! { Outlet::<Route> {} },
    }
}

/// Main app layout with sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let flags: ModuleFlags = use_context();
    let vis = use_sidebar_visibility();

    let mut theme_state = use_context_provider(|| shared_ui::theme::ThemeState {
        family: Signal::new("slate".to_string()),
        is_dark: Signal::new(true),
    });

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::StudentList {} | Route::StudentDetail { .. } => "Students",
        Route::AttendanceList {} => "Attendance",
        Route::FeeList {} => "Fees",
        Route::ExamResultList {} => "Examinations",
        Route::NoticeBoard {} => "Notices",
        Route::Login { .. } => "Sign In",
        _ => "",
    };

    let user = session.current_user.read().clone();
    let display_name = user
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_else(|| "Guest".to_string());
    let role_label = user
        .as_ref()
        .map(|u| u.user_role().display_name())
        .unwrap_or("Unknown");

    let sign_out = move |_| {
        tracing::info!("user signed out");
        clear_persisted_session();
        session.clear();
        navigator().push(Route::Login { redirect: None });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            Sidebar {
                SidebarHeader {
                    span { class: "sidebar-brand", "Campanile" }
                    span { class: "sidebar-brand-sub", "School ERP" }
                }

                SidebarGroup { label: "Overview",
                    Link { to: Route::Dashboard {},
                        SidebarItem { active: matches!(route, Route::Dashboard {}),
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                            "Dashboard"
                        }
                    }
                }

                if vis.academics {
                    SidebarGroup { label: "Academics",
                        Link { to: Route::StudentList {},
                            SidebarItem { active: matches!(route, Route::StudentList {} | Route::StudentDetail { .. }),
                                Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 18, height: 18 }
                                "Students"
                            }
                        }
                        Link { to: Route::AttendanceList {},
                            SidebarItem { active: matches!(route, Route::AttendanceList {}),
                                Icon::<LdCalendarCheck> { icon: LdCalendarCheck, width: 18, height: 18 }
                                "Attendance"
                            }
                        }
                    }
                }

                if vis.finance && flags.fees {
                    SidebarGroup { label: "Finance",
                        Link { to: Route::FeeList {},
                            SidebarItem { active: matches!(route, Route::FeeList {}),
                                Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 }
                                "Fees"
                            }
                        }
                    }
                }

                if vis.assessments && flags.examinations {
                    SidebarGroup { label: "Assessments",
                        Link { to: Route::ExamResultList {},
                            SidebarItem { active: matches!(route, Route::ExamResultList {}),
                                Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 }
                                "Examinations"
                            }
                        }
                    }
                }

                if vis.communication && flags.notices {
                    SidebarGroup { label: "Communication",
                        Link { to: Route::NoticeBoard {},
                            SidebarItem { active: matches!(route, Route::NoticeBoard {}),
                                Icon::<LdMegaphone> { icon: LdMegaphone, width: 18, height: 18 }
                                "Notices"
                            }
                        }
                    }
                }

                SidebarFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            let dark = !(theme_state.is_dark)();
                            theme_state.is_dark.set(dark);
                            theme_state.apply();
                        },
                        if (theme_state.is_dark)() { "Switch to light" } else { "Switch to dark" }
                    }
                }
            }

            div { class: "app-main",
                Navbar {
                    span { class: "navbar-title", "{page_title}" }
                    NavbarActions {
                        span { class: "navbar-user", "{display_name}" }
                        Badge { variant: BadgeVariant::Outline, "{role_label}" }
                        Separator { horizontal: false }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: sign_out,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Sign Out"
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

// Route components

#[component]
fn StudentList() -> Element {
    students::list::StudentListPage()
}

#[component]
fn StudentDetail(id: String) -> Element {
    rsx! { students::detail::StudentDetailPage { id: id } }
}

#[component]
fn AttendanceList() -> Element {
    attendance::AttendanceListPage()
}

#[component]
fn FeeList() -> Element {
    fees::FeeListPage()
}

#[component]
fn ExamResultList() -> Element {
    examinations::ExamResultListPage()
}

#[component]
fn NoticeBoard() -> Element {
    notices::NoticeBoardPage()
}

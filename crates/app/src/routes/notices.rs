use dioxus::prelude::*;
use shared_types::ModuleFlags;
use shared_ui::{
    Badge, BadgeVariant, Breadcrumb, BreadcrumbItem, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, PageTitle, Skeleton,
};

use crate::demo;
use crate::format_helpers::format_date_human;
use crate::routes::Route;
use crate::session::use_user_role;

#[component]
pub fn NoticeBoardPage() -> Element {
    let flags: ModuleFlags = use_context();
    let role = use_user_role();

    let notices = use_resource(move || async move { demo::notices_for(role) });

    if !flags.notices {
        return rsx! {
            div { class: "container",
                PageHeader {
                    PageTitle { "Notices" }
                }
                p { "The notice board is not enabled for this school." }
            }
        };
    }

    rsx! {
        div { class: "container",
            Breadcrumb {
                BreadcrumbItem {
                    Link { to: Route::Dashboard {}, "Dashboard" }
                }
                BreadcrumbItem { current: true, "Notices" }
            }

            PageHeader {
                PageTitle { "Notice Board" }
            }

            match &*notices.read() {
                Some(board) => rsx! {
                    if board.is_empty() {
                        p { "No notices for you right now." }
                    } else {
                        div { class: "notice-stack",
                            for notice in board {
                                NoticeCard {
                                    key: "{notice.id}",
                                    title: notice.title.clone(),
                                    body: notice.body.clone(),
                                    audience: notice.audience.display_name(),
                                    published_at: notice.published_at.clone(),
                                }
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "notice-stack",
                        for _ in 0..3 {
                            Card {
                                CardContent { Skeleton { style: "height: 48px;" } }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn NoticeCard(
    title: String,
    body: String,
    audience: &'static str,
    published_at: String,
) -> Element {
    let date = format_date_human(&published_at);
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{title}" }
                CardDescription {
                    Badge { variant: BadgeVariant::Outline, "{audience}" }
                    span { class: "notice-date", " {date}" }
                }
            }
            CardContent {
                p { "{body}" }
            }
        }
    }
}

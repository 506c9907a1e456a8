use dioxus::prelude::*;
use shared_types::{AppConfig, ModuleFlags};

mod demo;
mod format_helpers;
mod routes;
mod session;

use routes::Route;
use session::{use_session, SessionState};

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_CHALKBOARD: Asset = asset!("/assets/themes/chalkboard.css");
const THEME_PAPER: Asset = asset!("/assets/themes/paper.css");

/// Parse the embedded deployment config.
///
/// A malformed file disables all optional modules rather than failing the
/// whole client.
fn load_module_flags() -> ModuleFlags {
    match toml::from_str::<AppConfig>(include_str!("../config.toml")) {
        Ok(config) => config.modules,
        Err(err) => {
            tracing::warn!(%err, "invalid config.toml, disabling optional modules");
            ModuleFlags::default()
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(load_module_flags);
    use_context_provider(SessionState::new);

    let mut session = use_session();

    // One-shot startup resolution of the persisted session. `is_loading`
    // stays true until this completes, then never flips back.
    use_future(move || async move {
        let user = match session::read_persisted_session().await {
            Some(email) => demo::find_account(&email),
            None => None,
        };
        match &user {
            Some(u) => tracing::info!(email = %u.email, "restored persisted session"),
            None => tracing::info!("no persisted session"),
        }
        session.resolve(user);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_CHALKBOARD }
        document::Link { rel: "stylesheet", href: THEME_PAPER }
        shared_ui::theme::ThemeSeed {}
        Router::<Route> {}
    }
}

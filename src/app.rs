use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::AppConfig;
use crate::cookies::DocumentCookies;
use crate::media::{use_min_width, Viewport};
use crate::navigation::WIDE_BREAKPOINT_PX;
use crate::pages::home::HomePage;
use crate::pages::package::PackagePage;
use crate::pages::privacy::PrivacyPage;
use crate::session::load_session;
use crate::session_context::provide_session;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config.clone());

    // Fetched once for the whole app; pages share it through context
    provide_session(
        move || {
            let config = config.clone();
            async move { load_session(&config, &DocumentCookies).await }
        },
        DocumentCookies,
    );

    // One listener for the whole page; sidebars read it from context
    provide_context(Viewport {
        wide: use_min_width(WIDE_BREAKPOINT_PX),
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/home") view=HomePage />
                <Route path=path!("/package") view=PackagePage />
                <Route path=path!("/privacy") view=PrivacyPage />
            </Routes>
        </Router>
    }
}

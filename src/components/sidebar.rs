use leptos::prelude::*;
use log::warn;

use crate::components::compact_nav::CompactNav;
use crate::components::full_nav::FullNav;
use crate::media::Viewport;
use crate::navigation::LayoutVariant;
use crate::session::{Profile, SessionState};
use crate::session_context::SessionContext;

/// Logo and wordmark linking back to the landing page.
#[component]
pub fn Brand(
    /// Hide the wordmark on small screens.
    compact: bool,
) -> impl IntoView {
    view! {
        <a href="/" class="brand">
            <img class="brand-logo" alt="retrievifyLogo" draggable="false" src="/images/logo.png" />
            <h1 class="brand-name" class:brand-name-compact=compact>"Retrievify"</h1>
        </a>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! { <div class="loading-screen">"Loading..."</div> }
}

#[component]
fn SidebarLayout(profile: Profile, active: Signal<i32>, wide: Signal<bool>) -> impl IntoView {
    view! {
        {move || match LayoutVariant::select(wide.get()) {
            LayoutVariant::Compact => {
                view! { <CompactNav profile=profile.clone() active=active /> }.into_any()
            }
            LayoutVariant::Full => {
                view! { <FullNav profile=profile.clone() active=active /> }.into_any()
            }
        }}
    }
}

/// Navigation sidebar showing the signed-in user.
///
/// Reads the app-wide session from context. Until the profile request
/// resolves (or if it fails) only a full-viewport loading placeholder is
/// rendered.
#[component]
pub fn Sidebar(
    /// Ordinal of the current section: 1 = Home, 2 = Data Package.
    #[prop(into)]
    active: Signal<i32>,
) -> impl IntoView {
    let session = use_context::<SessionContext>();
    if session.is_none() {
        warn!("Sidebar mounted without a session context");
    }
    let wide = use_context::<Viewport>()
        .map(|v| v.wide)
        .unwrap_or_else(|| Signal::stored(false));

    view! {
        <style>{include_str!("sidebar.css")}</style>
        {move || match session.map(|ctx| ctx.state()).unwrap_or(SessionState::Loading) {
            SessionState::Loading => view! { <LoadingScreen /> }.into_any(),
            SessionState::Ready(profile) => {
                view! { <SidebarLayout profile=profile active=active wide=wide /> }.into_any()
            }
        }}
    }
}

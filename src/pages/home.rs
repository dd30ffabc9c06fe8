use leptos::prelude::*;

use crate::components::sidebar::Sidebar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page-shell">
            <Sidebar active=1 />
            <main class="content">
                <h2>"Home"</h2>
                <p class="page-description">
                    "See what your Spotify listening history says about you."
                </p>
                <div class="card">
                    <h3>"Get your data package"</h3>
                    <p>"Request your extended streaming history from Spotify, then upload it here."</p>
                    <a href="/package" class="btn btn-primary">"Open Data Package"</a>
                </div>
            </main>
        </div>
    }
}

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="page-shell">
            // not a navigation section, so nothing is highlighted
            <Sidebar active=0 />
            <main class="content">
                <h2>"Privacy Policy"</h2>
                <p>
                    "Retrievify reads your Spotify profile to show your name and picture. "
                    "Access tokens stay in your browser's cookies and are only sent to the Retrievify API."
                </p>
                <p>
                    "You can revoke access at any time from your Spotify account's app settings."
                </p>
            </main>
        </div>
    }
}

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;

#[component]
pub fn PackagePage() -> impl IntoView {
    view! {
        <div class="page-shell">
            <Sidebar active=2 />
            <main class="content">
                <h2>"Data Package"</h2>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">"1"</span>
                        <div class="step-content">
                            <strong>"Request"</strong>
                            <p>"Ask Spotify for your extended streaming history from your privacy settings"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"2"</span>
                        <div class="step-content">
                            <strong>"Wait"</strong>
                            <p>"Spotify emails a download link once the archive is ready"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"3"</span>
                        <div class="step-content">
                            <strong>"Upload"</strong>
                            <p>"Drop the archive here to explore it"</p>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}

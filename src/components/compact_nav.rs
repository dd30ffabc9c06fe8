use leptos::prelude::*;

use crate::components::account_menu::AccountMenu;
use crate::components::avatar::AvatarView;
use crate::components::icons::Hamburger;
use crate::components::sidebar::Brand;
use crate::navigation::{navigation_entries, LayoutVariant, MenuAnchor, ProfileControl};
use crate::session::Profile;

fn link_class(current: bool, layout: &str) -> String {
    let state = if current { "nav-link current" } else { "nav-link" };
    format!("{} {}", state, layout)
}

/// Top bar layout for narrow viewports.
///
/// On small screens the links fold into a disclosure panel opened by the
/// hamburger toggle; otherwise they sit inline next to the brand.
#[component]
pub fn CompactNav(profile: Profile, active: Signal<i32>) -> impl IntoView {
    let (panel_open, set_panel_open) = signal(false);
    let control = ProfileControl::for_variant(LayoutVariant::Compact, &profile);

    view! {
        <nav class="compact-nav">
            <div class="compact-bar">
                <button
                    type="button"
                    class="disclosure-toggle"
                    aria-expanded=move || panel_open.get().to_string()
                    on:click=move |_| set_panel_open.update(|open| *open = !*open)
                >
                    <span class="sr-only">"Open main menu"</span>
                    <Hamburger open=panel_open />
                </button>
                <div class="compact-brand">
                    <Brand compact=true />
                    <div class="compact-links">
                        {move || {
                            navigation_entries(active.get())
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <a
                                            href=entry.href
                                            class=link_class(entry.current, "inline-link")
                                            aria-current=entry.current.then_some("page")
                                        >
                                            {entry.name}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
                <AccountMenu anchor=MenuAnchor::Below trigger_class="avatar-trigger">
                    <AvatarView avatar=control.avatar />
                </AccountMenu>
            </div>
            <Show when=move || panel_open.get()>
                <div class="disclosure-panel">
                    {move || {
                        navigation_entries(active.get())
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <a
                                        href=entry.href
                                        class=link_class(entry.current, "panel-link")
                                        aria-current=entry.current.then_some("page")
                                        on:click=move |_| set_panel_open.set(false)
                                    >
                                        {entry.name}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </nav>
    }
}

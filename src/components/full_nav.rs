use leptos::prelude::*;

use crate::components::account_menu::AccountMenu;
use crate::components::avatar::AvatarView;
use crate::components::icons::{Chevron, NavIconView};
use crate::components::sidebar::Brand;
use crate::navigation::{navigation_entries, LayoutVariant, MenuAnchor, ProfileControl};
use crate::session::Profile;

/// Fixed full-height rail for wide viewports.
#[component]
pub fn FullNav(profile: Profile, active: Signal<i32>) -> impl IntoView {
    let ProfileControl { avatar, label } = ProfileControl::for_variant(LayoutVariant::Full, &profile);

    view! {
        <div class="full-nav">
            <div class="full-nav-body">
                <div class="full-nav-brand">
                    <Brand compact=false />
                </div>
                <nav class="full-nav-list" aria-label="Sidebar">
                    {move || {
                        navigation_entries(active.get())
                            .into_iter()
                            .map(|entry| {
                                let class = if entry.current { "nav-link rail-link current" } else { "nav-link rail-link" };
                                view! {
                                    <a
                                        href=entry.href
                                        class=class
                                        aria-current=entry.current.then_some("page")
                                    >
                                        <NavIconView icon=entry.icon class_name="nav-icon" />
                                        <span class="nav-label">{entry.name}</span>
                                        {(entry.count != 0).then(|| view! {
                                            <span class="nav-badge">{entry.count}</span>
                                        })}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
            </div>
            <div class="full-nav-footer">
                <AccountMenu anchor=MenuAnchor::Above trigger_class="profile-trigger">
                    <span class="profile-control">
                        <AvatarView avatar=avatar />
                        <span class="profile-name">{label.unwrap_or_default()}</span>
                        <Chevron />
                    </span>
                </AccountMenu>
            </div>
        </div>
        <div class="full-nav-spacer"></div>
    }
}

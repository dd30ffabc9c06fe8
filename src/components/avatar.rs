use leptos::prelude::*;

use crate::components::icons::UserGlyph;
use crate::navigation::Avatar;

#[component]
pub fn AvatarView(avatar: Avatar) -> impl IntoView {
    let inner = match avatar {
        Avatar::Image(url) => view! { <img class="avatar-img" alt="user-pfp" src=url /> }.into_any(),
        Avatar::Placeholder => view! {
            <span class="avatar-placeholder">
                <UserGlyph />
            </span>
        }
        .into_any(),
    };

    view! { <span class="avatar">{inner}</span> }
}

use leptos::prelude::*;

use crate::navigation::NavIcon;

const HOUSE_PATH: &str = "M3 10.5 12 3l9 7.5M5 9v11a1 1 0 0 0 1 1h4v-6h4v6h4a1 1 0 0 0 1-1V9";
const BOX_OPEN_PATH: &str = "M3 7.5 12 3l9 4.5v9L12 21l-9-4.5zM3 7.5l9 4.5 9-4.5M12 12v9";
const CHEVRON_PATH: &str = "M9 5l7 7-7 7";
const USER_PATH: &str = "M10.165 11.101a2.5 2.5 0 01-.67 3.766L5.5 17.173A2.998 2.998 0 004 19.771v.232h16.001v-.232a3 3 0 00-1.5-2.598l-3.995-2.306a2.5 2.5 0 01-.67-3.766l.521-.626.002-.002c.8-.955 1.303-1.987 1.375-3.19.041-.706-.088-1.433-.187-1.727a3.717 3.717 0 00-.768-1.334 3.767 3.767 0 00-5.557 0c-.34.37-.593.82-.768 1.334-.1.294-.228 1.021-.187 1.727.072 1.203.575 2.235 1.375 3.19l.002.002.521.626zm5.727.657l-.52.624a.5.5 0 00.134.753l3.995 2.306a5 5 0 012.5 4.33v2.232H2V19.77a5 5 0 012.5-4.33l3.995-2.306a.5.5 0 00.134-.753l-.518-.622-.002-.002c-1-1.192-1.735-2.62-1.838-4.356-.056-.947.101-1.935.29-2.49A5.713 5.713 0 017.748 2.87a5.768 5.768 0 018.505 0 5.713 5.713 0 011.187 2.043c.189.554.346 1.542.29 2.489-.103 1.736-.838 3.163-1.837 4.355m-.001.001z";

#[component]
pub fn NavIconView(icon: NavIcon, #[prop(into)] class_name: String) -> impl IntoView {
    let path = match icon {
        NavIcon::House => HOUSE_PATH,
        NavIcon::BoxOpen => BOX_OPEN_PATH,
    };

    view! {
        <svg
            class=class_name
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Silhouette shown when the user has no profile picture.
#[component]
pub fn UserGlyph() -> impl IntoView {
    view! {
        <svg class="user-glyph" role="img" height="22" width="22" viewBox="0 0 24 24" aria-hidden="true">
            <path d=USER_PATH></path>
        </svg>
    }
}

#[component]
pub fn Chevron() -> impl IntoView {
    view! {
        <svg class="chevron" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=CHEVRON_PATH></path>
        </svg>
    }
}

/// Three bars that squash into a cross while `open`.
#[component]
pub fn Hamburger(open: ReadSignal<bool>) -> impl IntoView {
    view! {
        <span class="hamburger" class:open=move || open.get() aria-hidden="true">
            <span class="hamburger-bar"></span>
            <span class="hamburger-bar"></span>
            <span class="hamburger-bar"></span>
        </span>
    }
}

//! Overflow menu behind the profile control.
//!
//! Shared by both sidebar layouts; only the direction it opens in differs.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::navigation::{MenuAnchor, ACCOUNT_LINKS};

/// Keys that close an open menu.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[component]
pub fn AccountMenu(
    /// Whether the item list drops below the trigger or rises above it.
    anchor: MenuAnchor,
    /// Extra class for the trigger button.
    #[prop(optional, into)]
    trigger_class: String,
    /// Trigger content, e.g. the avatar.
    children: Children,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let container_ref = NodeRef::<leptos::html::Div>::new();

    // Close when a press lands outside the menu
    let outside = window_event_listener(leptos::ev::mousedown, move |ev| {
        if !is_open.get_untracked() {
            return;
        }
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| container.contains(Some(&node)));
        if !inside {
            set_is_open.set(false);
        }
    });
    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_open.get_untracked() && is_dismiss_key(&ev.key()) {
            set_is_open.set(false);
        }
    });
    on_cleanup(move || {
        outside.remove();
        escape.remove();
    });

    view! {
        <div class="account-menu-container" node_ref=container_ref>
            <button
                type="button"
                class=format!("account-trigger {}", trigger_class)
                aria-haspopup="menu"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span class="sr-only">"Open user menu"</span>
                {children()}
            </button>
            <Show when=move || is_open.get()>
                <div class=anchor.class() role="menu">
                    {ACCOUNT_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    rel=link.external.then_some("external")
                                    class="account-menu-item"
                                    role="menuitem"
                                    on:click=move |_| set_is_open.set(false)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
    }

    #[test]
    fn test_other_keys_keep_menu_open() {
        for key in ["Enter", " ", "Tab", "ArrowDown", "e", ""] {
            assert!(!is_dismiss_key(key), "key={:?}", key);
        }
    }
}

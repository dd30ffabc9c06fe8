use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Whether the viewport is wider than the navigation breakpoint.
#[derive(Clone, Copy)]
pub struct Viewport {
    pub wide: Signal<bool>,
}

pub fn min_width_query(px: u32) -> String {
    format!("(min-width: {}px)", px)
}

/// Track a `(min-width: <px>px)` media query as a signal.
///
/// The listener lives as long as the page, so call this once from the root.
pub fn use_min_width(px: u32) -> Signal<bool> {
    let list = web_sys::window().and_then(|w| w.match_media(&min_width_query(px)).ok().flatten());
    let (matches, set_matches) = signal(list.as_ref().map(|l| l.matches()).unwrap_or(false));

    if let Some(list) = list {
        let watched = list.clone();
        let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
            set_matches.set(watched.matches());
        });
        if list
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Could not watch media query for {}px", px);
        }
        closure.forget();
    }

    matches.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_width_query_format() {
        assert_eq!(min_width_query(894), "(min-width: 894px)");
    }
}

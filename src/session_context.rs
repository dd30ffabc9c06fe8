//! App-wide session resource.
//!
//! The profile is fetched once when the app mounts and shared with every
//! page through context, so moving between pages neither re-posts the
//! credentials nor flashes the loading screen.

use std::future::Future;

use leptos::prelude::*;
use log::warn;

use crate::cookies::CredentialStore;
use crate::session::{SessionResult, SessionState, TokenRotator};

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: LocalResource<SessionResult>,
}

impl SessionContext {
    /// Tracked read of the current session state.
    pub fn state(&self) -> SessionState {
        SessionState::from_result(self.session.get().as_ref())
    }
}

/// Start the profile fetch, persist rotated tokens into `store`, and share
/// the session through context.
///
/// `loader` reads no signals, so nothing rendered below it can trigger a
/// second request.
pub fn provide_session<F, Fut, S>(loader: F, store: S) -> SessionContext
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = SessionResult> + 'static,
    S: CredentialStore + 'static,
{
    let session = LocalResource::new(loader);

    let mut rotator = TokenRotator::new(store);
    Effect::new(move |_| {
        if let Some(Ok(loaded)) = session.get() {
            if let Err(e) = rotator.observe(&loaded) {
                warn!("Failed to persist rotated access token: {}", e);
            }
        }
    });

    let context = SessionContext { session };
    provide_context(context);
    context
}

//! Session bootstrap: fetch the signed-in user's profile with the stored
//! token pair and persist a rotated access token when the backend mints one.

use std::sync::atomic::{AtomicU64, Ordering};

use gloo_net::http::Request;
use log::{debug, info, warn};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::AppConfig;
use crate::cookies::{CredentialStore, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::error::{SessionError, StorageError};

pub const GET_USER_PATH: &str = "spotify/getuser";

/// Response status the backend uses when it minted a new access token.
pub const TOKEN_ROTATED_STATUS: u16 = 201;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

// -- Wire types --

/// Token pair sent to the identity endpoint. A missing cookie leaves its key
/// out of the body entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl Credentials {
    pub fn read(store: &impl CredentialStore) -> Self {
        Self {
            access_token: store.get(ACCESS_TOKEN_COOKIE),
            refresh_token: store.get(REFRESH_TOKEN_COOKIE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileImage {
    pub url: String,
}

/// Spotify user profile as relayed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub images: Vec<ProfileImage>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }

    pub fn first_image_url(&self) -> Option<&str> {
        self.images.first().map(|img| img.url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserResponse {
    pub status: u16,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub expires_in: Option<u64>,
    pub data: Profile,
}

/// Accept `3600`, `3600.0` or `"3600"`; anything else (negative, fractional,
/// non-numeric) decodes as absent instead of failing the whole response.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

pub fn parse_user_response(body: &str) -> Result<UserResponse, SessionError> {
    serde_json::from_str(body).map_err(|e| SessionError::Decode(e.to_string()))
}

// -- Loading --

/// A resolved profile response, stamped with a version unique to this receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSession {
    pub version: u64,
    pub response: UserResponse,
}

impl LoadedSession {
    pub fn new(response: UserResponse) -> Self {
        Self {
            version: NEXT_VERSION.fetch_add(1, Ordering::Relaxed),
            response,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.response.data
    }
}

/// POST the credential pair to the identity endpoint.
///
/// The body goes out as a plain JSON string and the reply is decoded whatever
/// its HTTP status; the `status` field inside the payload is what matters.
pub async fn fetch_user(
    config: &AppConfig,
    credentials: &Credentials,
) -> Result<UserResponse, SessionError> {
    let url = config.endpoint(GET_USER_PATH);
    let body =
        serde_json::to_string(credentials).map_err(|e| SessionError::Request(e.to_string()))?;

    debug!("Fetching user profile from {}", url);
    let response = Request::post(&url)
        .body(body)
        .map_err(|e| SessionError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| SessionError::Request(e.to_string()))?;

    let text = response
        .text()
        .await
        .map_err(|e| SessionError::Decode(e.to_string()))?;
    parse_user_response(&text)
}

pub type SessionResult = Result<LoadedSession, SessionError>;

pub async fn load_session(
    config: &AppConfig,
    store: &impl CredentialStore,
) -> Result<LoadedSession, SessionError> {
    let credentials = Credentials::read(store);
    match fetch_user(config, &credentials).await {
        Ok(response) => {
            let session = LoadedSession::new(response);
            debug!(
                "Session resolved (version {}, status {})",
                session.version, session.response.status
            );
            Ok(session)
        }
        Err(e) => {
            warn!("Failed to load user session: {}", e);
            Err(e)
        }
    }
}

/// The two states the sidebar can observe. Errors are folded into `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Ready(Profile),
}

impl SessionState {
    pub fn from_result(result: Option<&Result<LoadedSession, SessionError>>) -> Self {
        match result {
            Some(Ok(session)) => SessionState::Ready(session.profile().clone()),
            _ => SessionState::Loading,
        }
    }
}

// -- Token rotation --

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRotation {
    pub access_token: String,
    pub max_age_secs: u64,
}

impl TokenRotation {
    pub fn from_response(response: &UserResponse) -> Option<Self> {
        if response.status != TOKEN_ROTATED_STATUS {
            return None;
        }
        match (&response.access_token, response.expires_in) {
            (Some(token), Some(expires_in)) => Some(Self {
                access_token: token.clone(),
                max_age_secs: expires_in,
            }),
            _ => {
                warn!("Backend reported a rotated token but omitted access_token or expires_in");
                None
            }
        }
    }
}

/// Remembers the newest session version already handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationGuard {
    seen: Option<u64>,
}

impl RotationGuard {
    /// Returns true the first time a version newer than any seen is offered.
    pub fn claim(&mut self, version: u64) -> bool {
        match self.seen {
            Some(seen) if version <= seen => false,
            _ => {
                self.seen = Some(version);
                true
            }
        }
    }
}

/// Applies token rotations to a credential store, once per resolved session.
pub struct TokenRotator<S> {
    store: S,
    guard: RotationGuard,
}

impl<S: CredentialStore> TokenRotator<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            guard: RotationGuard::default(),
        }
    }

    /// Returns whether the access token cookie was rewritten.
    pub fn observe(&mut self, session: &LoadedSession) -> Result<bool, StorageError> {
        if !self.guard.claim(session.version) {
            return Ok(false);
        }
        let Some(rotation) = TokenRotation::from_response(&session.response) else {
            return Ok(false);
        };
        self.store.set(
            ACCESS_TOKEN_COOKIE,
            &rotation.access_token,
            rotation.max_age_secs,
        )?;
        info!(
            "Access token rotated (max-age {}s)",
            rotation.max_age_secs
        );
        Ok(true)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

//! One-shot notices carried across the POST/redirect/GET cycle in a signed cookie.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Flash {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Flash {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Stores the notice in the jar, replacing any pending one.
    pub fn attach(&self, jar: SignedCookieJar) -> SignedCookieJar {
        let encoded = match serde_json::to_vec(self) {
            Ok(json) => URL_SAFE_NO_PAD.encode(json),
            Err(e) => {
                tracing::error!("Could not encode flash notice: {e}");
                return jar;
            }
        };
        let cookie = Cookie::build((FLASH_COOKIE, encoded))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        jar.add(cookie)
    }

    /// Removes and returns the pending notice, if any.
    /// Tampered or malformed cookies are dropped silently.
    pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
        let Some(cookie) = jar.get(FLASH_COOKIE) else {
            return (jar, None);
        };
        let flash = URL_SAFE_NO_PAD
            .decode(cookie.value())
            .ok()
            .and_then(|bytes| serde_json::from_slice::<Flash>(&bytes).ok());
        if flash.is_none() {
            debug!("Discarding unreadable flash cookie");
        }
        let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        (jar, flash)
    }
}

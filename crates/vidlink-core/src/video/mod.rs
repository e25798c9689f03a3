//! Video link resolution.
//!
//! Classifies a pasted link into a hosting provider and derives the URL a
//! player should embed. Resolution is pure: no network access, no shared
//! mutable state, and malformed input yields `None` rather than an error.

mod batch;
mod provider;
mod rules;

pub use batch::{resolve_batch, BatchEntry, BatchReport};
pub use provider::{ParseProviderError, PlayerKind, Provider};

use rules::{Candidate, Hit};
use serde::{Deserialize, Serialize};

/// Normalized descriptor for a recognized video link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReference {
    pub provider: Provider,
    /// Provider-native id; always `None` for `file` and `unknown`.
    pub id: Option<String>,
    pub embed_url: String,
    /// The input link with surrounding whitespace removed.
    pub original: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl VideoReference {
    /// Reference whose playable source is the link itself (`file`, `unknown`).
    fn passthrough(provider: Provider, original: &str) -> Self {
        Self {
            provider,
            id: None,
            embed_url: original.to_string(),
            original: original.to_string(),
            thumbnail: None,
        }
    }

    fn from_hit(provider: Provider, hit: Hit<'_>, original: &str) -> Self {
        match hit {
            Hit::Whole => Self::passthrough(provider, original),
            Hit::Id(id) => Self {
                provider,
                id: Some(id.to_string()),
                embed_url: provider
                    .embed_url(id)
                    .unwrap_or_else(|| original.to_string()),
                original: original.to_string(),
                thumbnail: provider.thumbnail_url(id),
            },
        }
    }

    pub fn player_kind(&self) -> PlayerKind {
        self.provider.player_kind()
    }
}

/// Resolves a raw, possibly absent link into a [`VideoReference`].
///
/// Rules are tried in a fixed order (direct file, YouTube, Vimeo, Loom,
/// Google Drive) and the first match wins. If none match, the link is kept
/// as `unknown` when it parses as an absolute URL; otherwise the result is
/// `None`. Empty input is `None`.
pub fn resolve(raw: Option<&str>) -> Option<VideoReference> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let url = raw.trim();
    let candidate = Candidate::new(url);

    if let Some((provider, hit)) = rules::classify(&candidate) {
        tracing::debug!(%provider, link = url, "classified video link");
        return Some(VideoReference::from_hit(provider, hit, url));
    }

    match url::Url::parse(url) {
        Ok(_) => {
            tracing::debug!(link = url, "no provider rule matched; keeping as unknown");
            Some(VideoReference::passthrough(Provider::Unknown, url))
        }
        Err(err) => {
            tracing::trace!(link = url, %err, "not an absolute URL");
            None
        }
    }
}

/// Shorthand for [`resolve`] on a present string.
pub fn resolve_str(raw: &str) -> Option<VideoReference> {
    resolve(Some(raw))
}

//! Provider tags and the embed/thumbnail URLs derived from a provider id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hosting platform a video link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Direct media file (`.mp4`, `.webm`, `.mkv`, `.m4v`) on any host.
    File,
    Youtube,
    Vimeo,
    Loom,
    Gdrive,
    /// Valid absolute URL that no provider rule recognized.
    Unknown,
}

impl Provider {
    pub const ALL: [Provider; 6] = [
        Provider::File,
        Provider::Youtube,
        Provider::Vimeo,
        Provider::Loom,
        Provider::Gdrive,
        Provider::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::File => "file",
            Provider::Youtube => "youtube",
            Provider::Vimeo => "vimeo",
            Provider::Loom => "loom",
            Provider::Gdrive => "gdrive",
            Provider::Unknown => "unknown",
        }
    }

    /// Player embed URL for a provider-native id.
    ///
    /// `None` for `file` and `unknown`, which have no id and embed the link itself.
    pub fn embed_url(&self, id: &str) -> Option<String> {
        match self {
            Provider::Youtube => Some(format!("https://www.youtube.com/embed/{id}")),
            Provider::Vimeo => Some(format!("https://player.vimeo.com/video/{id}")),
            Provider::Loom => Some(format!("https://www.loom.com/embed/{id}")),
            Provider::Gdrive => Some(format!("https://drive.google.com/file/d/{id}/preview")),
            Provider::File | Provider::Unknown => None,
        }
    }

    /// Preview image URL; only YouTube exposes one derivable from the id.
    pub fn thumbnail_url(&self, id: &str) -> Option<String> {
        match self {
            Provider::Youtube => Some(format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg")),
            _ => None,
        }
    }

    /// How a player should present links from this provider.
    pub fn player_kind(&self) -> PlayerKind {
        match self {
            Provider::File => PlayerKind::Native,
            _ => PlayerKind::Frame,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the provider tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider {0:?} (expected one of: file, youtube, vimeo, loom, gdrive, unknown)")]
pub struct ParseProviderError(pub String);

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseProviderError(s.to_string()))
    }
}

/// Rendering strategy: a native `<video>` element or an embedded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Native,
    Frame,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Native => f.write_str("native"),
            PlayerKind::Frame => f.write_str("frame"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_roundtrip_through_from_str() {
        for p in Provider::ALL {
            assert_eq!(p.as_str().parse::<Provider>(), Ok(p));
        }
        assert_eq!("YouTube".parse::<Provider>(), Ok(Provider::Youtube));
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = "dailymotion".parse::<Provider>().unwrap_err();
        assert_eq!(err, ParseProviderError("dailymotion".to_string()));
        assert!(err.to_string().contains("dailymotion"));
    }

    #[test]
    fn embed_urls_per_provider() {
        assert_eq!(
            Provider::Gdrive.embed_url("1AbC").as_deref(),
            Some("https://drive.google.com/file/d/1AbC/preview")
        );
        assert_eq!(Provider::File.embed_url("x"), None);
        assert_eq!(Provider::Unknown.embed_url("x"), None);
        assert_eq!(Provider::Vimeo.thumbnail_url("1"), None);
    }

    #[test]
    fn only_files_play_natively() {
        assert_eq!(Provider::File.player_kind(), PlayerKind::Native);
        assert_eq!(Provider::Loom.player_kind(), PlayerKind::Frame);
        assert_eq!(Provider::Unknown.player_kind(), PlayerKind::Frame);
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Provider::Gdrive).unwrap(), "\"gdrive\"");
        let p: Provider = serde_json::from_str("\"loom\"").unwrap();
        assert_eq!(p, Provider::Loom);
    }
}

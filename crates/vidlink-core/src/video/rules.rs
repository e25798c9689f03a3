//! Ordered link classification rules.
//!
//! Evaluated top to bottom; the first rule that matches decides the provider.
//! Direct-file detection runs first so a `.mp4` on any host is never
//! mistaken for a provider page.

use once_cell::sync::Lazy;
use regex::Regex;

use super::provider::Provider;

static FILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(?:mp4|webm|mkv|m4v)(?:\?.*)?$").expect("file extension regex"));

static YOUTUBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|shorts/|embed/)|youtu\.be/)([A-Za-z0-9_-]{6,})")
        .expect("youtube regex")
});

static VIMEO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"vimeo\.com/(?:video/)?(\d+)").expect("vimeo regex"));

// Share ids are exactly 32 lowercase hex chars; anything longer or mixed-case falls through.
static LOOM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"loom\.com/share/([a-f0-9]{32})(?:[/?#]|$)").expect("loom regex")
});

static GDRIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"drive\.google\.com/file/d/([^/]+)/").expect("gdrive regex"));

/// A trimmed link plus the lowercase copy used for case-insensitive checks.
#[derive(Debug)]
pub(super) struct Candidate<'a> {
    pub original: &'a str,
    pub lower: String,
}

impl<'a> Candidate<'a> {
    pub fn new(trimmed: &'a str) -> Self {
        Self {
            original: trimmed,
            lower: trimmed.to_lowercase(),
        }
    }
}

/// Which copy of the candidate a rule's pattern runs against.
#[derive(Debug, Clone, Copy)]
enum Haystack {
    Lowercase,
    Original,
}

/// Outcome of a matching rule.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Hit<'a> {
    /// The whole link is the playable source.
    Whole,
    /// Provider-native id captured from the link.
    Id(&'a str),
}

pub(super) struct Rule {
    pub provider: Provider,
    pattern: &'static Lazy<Regex>,
    haystack: Haystack,
}

impl Rule {
    /// Returns a hit if this rule recognizes the candidate.
    ///
    /// Patterns with a capture group yield the captured id, sliced from the
    /// original so its casing is preserved.
    pub fn apply<'a>(&self, candidate: &'a Candidate<'_>) -> Option<Hit<'a>> {
        match self.haystack {
            Haystack::Lowercase => self
                .pattern
                .is_match(&candidate.lower)
                .then_some(Hit::Whole),
            Haystack::Original => {
                let caps = self.pattern.captures(candidate.original)?;
                Some(caps.get(1).map_or(Hit::Whole, |m| Hit::Id(m.as_str())))
            }
        }
    }
}

pub(super) static RULES: [Rule; 5] = [
    Rule {
        provider: Provider::File,
        pattern: &FILE_RE,
        haystack: Haystack::Lowercase,
    },
    Rule {
        provider: Provider::Youtube,
        pattern: &YOUTUBE_RE,
        haystack: Haystack::Original,
    },
    Rule {
        provider: Provider::Vimeo,
        pattern: &VIMEO_RE,
        haystack: Haystack::Original,
    },
    Rule {
        provider: Provider::Loom,
        pattern: &LOOM_RE,
        haystack: Haystack::Original,
    },
    Rule {
        provider: Provider::Gdrive,
        pattern: &GDRIVE_RE,
        haystack: Haystack::Original,
    },
];

/// First rule (in table order) that matches, with its hit.
pub(super) fn classify<'a>(candidate: &'a Candidate<'_>) -> Option<(Provider, Hit<'a>)> {
    RULES
        .iter()
        .find_map(|rule| rule.apply(candidate).map(|hit| (rule.provider, hit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_str(s: &str) -> Option<(Provider, Option<String>)> {
        let c = Candidate::new(s);
        classify(&c).map(|(p, hit)| {
            let id = match hit {
                Hit::Whole => None,
                Hit::Id(id) => Some(id.to_string()),
            };
            (p, id)
        })
    }

    #[test]
    fn file_extensions_any_case_with_query() {
        for link in [
            "https://cdn.example.com/a.mp4",
            "https://cdn.example.com/a.WEBM",
            "https://cdn.example.com/a.mkv?token=abc&x=1",
            "https://cdn.example.com/a.M4V?",
        ] {
            assert_eq!(classify_str(link), Some((Provider::File, None)), "{link}");
        }
    }

    #[test]
    fn file_extension_must_end_the_path() {
        assert_eq!(classify_str("https://example.com/a.mp4/page"), None);
        assert_eq!(classify_str("https://example.com/a.mp3"), None);
    }

    #[test]
    fn file_rule_wins_over_provider_rules() {
        assert_eq!(
            classify_str("https://www.youtube.com/watch?v=dQw4w9WgXcQ&f=clip.mp4"),
            Some((Provider::File, None))
        );
    }

    #[test]
    fn youtube_forms() {
        let id = Some("dQw4w9WgXcQ".to_string());
        for link in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ?start=10",
            "https://youtu.be/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgXcQ?t=42",
        ] {
            assert_eq!(classify_str(link), Some((Provider::Youtube, id.clone())), "{link}");
        }
    }

    #[test]
    fn youtube_id_needs_six_chars() {
        assert_eq!(
            classify_str("https://youtu.be/abcdef"),
            Some((Provider::Youtube, Some("abcdef".to_string())))
        );
        assert_eq!(classify_str("https://youtu.be/abcde"), None);
    }

    #[test]
    fn youtube_id_keeps_case() {
        assert_eq!(
            classify_str("https://youtu.be/AbC_d-E"),
            Some((Provider::Youtube, Some("AbC_d-E".to_string())))
        );
    }

    #[test]
    fn vimeo_plain_and_video_path() {
        assert_eq!(
            classify_str("https://vimeo.com/76979871"),
            Some((Provider::Vimeo, Some("76979871".to_string())))
        );
        assert_eq!(
            classify_str("https://vimeo.com/video/123"),
            Some((Provider::Vimeo, Some("123".to_string())))
        );
        assert_eq!(classify_str("https://vimeo.com/channels/staff"), None);
    }

    #[test]
    fn loom_requires_32_lowercase_hex() {
        let id = "0123456789abcdef0123456789abcdef";
        assert_eq!(
            classify_str(&format!("https://www.loom.com/share/{id}")),
            Some((Provider::Loom, Some(id.to_string())))
        );
        assert_eq!(
            classify_str(&format!("https://www.loom.com/share/{id}?sid=1")),
            Some((Provider::Loom, Some(id.to_string())))
        );
        let upper = id.to_uppercase();
        assert_eq!(classify_str(&format!("https://www.loom.com/share/{upper}")), None);
        assert_eq!(classify_str(&format!("https://www.loom.com/share/{id}0")), None);
        assert_eq!(classify_str(&format!("https://www.loom.com/share/{}", &id[1..])), None);
    }

    #[test]
    fn gdrive_needs_trailing_slash() {
        assert_eq!(
            classify_str("https://drive.google.com/file/d/1A2b_C3/view?usp=sharing"),
            Some((Provider::Gdrive, Some("1A2b_C3".to_string())))
        );
        assert_eq!(classify_str("https://drive.google.com/file/d/1A2b_C3"), None);
    }

    #[test]
    fn unmatched_returns_none() {
        assert_eq!(classify_str("https://example.com/random-page"), None);
        assert_eq!(classify_str(""), None);
    }
}

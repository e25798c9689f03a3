//! Rendering of resolution results for the terminal.

use anyhow::Result;
use vidlink_core::video::{BatchEntry, VideoReference};

/// `provider<TAB>id<TAB>embed_url<TAB>player`, with `-` for a missing id.
pub fn text_line(reference: &VideoReference) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        reference.provider,
        reference.id.as_deref().unwrap_or("-"),
        reference.embed_url,
        reference.player_kind()
    )
}

pub fn text_unresolved(input: &str) -> String {
    format!("unresolved: {input}")
}

/// Compact JSON object for a result, or `null` when unresolved.
pub fn json_line(reference: Option<&VideoReference>) -> Result<String> {
    Ok(serde_json::to_string(&reference)?)
}

/// Text rendering of a batch entry, prefixed by its input line number.
pub fn batch_text_line(entry: &BatchEntry) -> String {
    let body = match &entry.reference {
        Some(reference) => text_line(reference),
        None => text_unresolved(&entry.input),
    };
    format!("{}:\t{}", entry.line, body)
}

pub fn batch_json_line(entry: &BatchEntry) -> Result<String> {
    Ok(serde_json::to_string(entry)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidlink_core::video::{resolve_batch, resolve_str};

    #[test]
    fn text_for_provider_and_file() {
        let yt = resolve_str("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(
            text_line(&yt),
            "youtube\tdQw4w9WgXcQ\thttps://www.youtube.com/embed/dQw4w9WgXcQ\tframe"
        );
        let file = resolve_str("https://x.test/clip.mp4").unwrap();
        assert_eq!(text_line(&file), "file\t-\thttps://x.test/clip.mp4\tnative");
    }

    #[test]
    fn json_null_for_unresolved() {
        assert_eq!(json_line(None).unwrap(), "null");
        let v = resolve_str("https://vimeo.com/5").unwrap();
        let line = json_line(Some(&v)).unwrap();
        assert!(line.contains("\"embedUrl\":\"https://player.vimeo.com/video/5\""));
    }

    #[test]
    fn batch_lines_carry_line_numbers() {
        let report = resolve_batch(["", "junk", "https://vimeo.com/7"]);
        assert_eq!(batch_text_line(&report.entries[0]), "2:\tunresolved: junk");
        assert_eq!(
            batch_text_line(&report.entries[1]),
            "3:\tvimeo\t7\thttps://player.vimeo.com/video/7\tframe"
        );
        let json = batch_json_line(&report.entries[0]).unwrap();
        assert_eq!(json, r#"{"line":2,"input":"junk","reference":null}"#);
    }
}

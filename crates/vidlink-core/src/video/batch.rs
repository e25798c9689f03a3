//! Resolving many links at once, e.g. a file with one link per line.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{resolve_str, Provider, VideoReference};

/// One considered input line and what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    /// 1-based line number in the input.
    pub line: usize,
    pub input: String,
    pub reference: Option<VideoReference>,
}

/// Results of [`resolve_batch`] in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Number of resolved links per provider.
    pub fn counts(&self) -> BTreeMap<Provider, usize> {
        let mut counts = BTreeMap::new();
        for reference in self.entries.iter().filter_map(|e| e.reference.as_ref()) {
            *counts.entry(reference.provider).or_insert(0) += 1;
        }
        counts
    }

    pub fn unresolved(&self) -> usize {
        self.entries.iter().filter(|e| e.reference.is_none()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One-line summary such as `youtube=2 file=1 unresolved=1`.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = self
            .counts()
            .into_iter()
            .map(|(provider, n)| format!("{provider}={n}"))
            .collect();
        parts.push(format!("unresolved={}", self.unresolved()));
        parts.join(" ")
    }
}

/// Resolves every line that is neither blank nor a `#` comment.
pub fn resolve_batch<'a, I>(lines: I) -> BatchReport
where
    I: IntoIterator<Item = &'a str>,
{
    let entries = lines
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let input = line.trim();
            if input.is_empty() || input.starts_with('#') {
                return None;
            }
            Some(BatchEntry {
                line: idx + 1,
                input: input.to_string(),
                reference: resolve_str(input),
            })
        })
        .collect();
    BatchReport { entries }
}

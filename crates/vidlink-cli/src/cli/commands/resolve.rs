//! `vidlink resolve <LINK>...` – resolve links given on the command line.

use anyhow::Result;
use vidlink_core::config::OutputFormat;
use vidlink_core::video;

use crate::cli::output;

/// Prints one line per link. Returns `false` if any link was unresolved and
/// `fail_on_unresolved` is set.
pub fn run_resolve(links: &[String], format: OutputFormat, fail_on_unresolved: bool) -> Result<bool> {
    let mut unresolved = 0usize;
    for link in links {
        let reference = video::resolve_str(link);
        if reference.is_none() {
            unresolved += 1;
        }
        let line = match format {
            OutputFormat::Json => output::json_line(reference.as_ref())?,
            OutputFormat::Text => match &reference {
                Some(r) => output::text_line(r),
                None => output::text_unresolved(link.trim()),
            },
        };
        println!("{line}");
    }
    if unresolved > 0 {
        tracing::info!("{} of {} links unresolved", unresolved, links.len());
    }
    Ok(unresolved == 0 || !fail_on_unresolved)
}

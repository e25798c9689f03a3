//! `vidlink check <LINK> --provider <PROVIDER>`

use vidlink_core::video::{self, Provider};

/// `true` when `link` resolves to `expected`; otherwise explains what it got.
pub fn run_check(link: &str, expected: Provider) -> bool {
    match video::resolve_str(link) {
        Some(r) if r.provider == expected => true,
        Some(r) => {
            println!("expected {expected}, got {}", r.provider);
            false
        }
        None => {
            println!("expected {expected}, link is unresolved");
            false
        }
    }
}

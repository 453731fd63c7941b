//! # Superheroes
//!
//! `superheroes` is a small REST service over three related records: heroes,
//! powers, and the hero powers that link them with a strength rating.
//!
//! ## Records
//!
//! - **Heroes** carry a name and a super name.
//! - **Powers** carry a name and a description of at least 20 characters.
//!   The rule holds on creation and on every description update.
//! - **Hero powers** join one hero to one power with a strength of `Strong`,
//!   `Weak` or `Average`. Removing a hero or a power removes its links.
//!
//! ## Responses
//!
//! Responses are fixed projections of the records. A hero embeds its hero
//! powers, each with a power summary; a hero power embeds hero and power
//! summaries. No projection embeds the record it was reached from, so
//! payloads are acyclic by construction.
//!
//! ## Storage
//!
//! State lives in a single SQLite database. The schema ships with the binary
//! and is applied on startup; every handler receives the [`roster::Store`]
//! handle explicitly.

pub mod api;
pub mod cli;
pub mod roster;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}

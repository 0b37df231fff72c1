//! filecast core library — entry classification for a local media server.
//!
//! `filecast-core` knows how to turn a filesystem path into the small
//! `{type, name}` record the HTTP layer hands to the browser. It has no
//! knowledge of HTTP; `filecast-web` wires it to axum.
//!
//! # Modules
//!
//! - [`fs`] — Entry types, classification, directory listing and base-relative path resolution.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod error;
pub mod fs;

pub use error::{CoreError, CoreResult};
pub use fs::entry::{EntryInfo, EntryType};
pub use fs::ops::{basename, classify, list_directory};
pub use fs::path::resolve;


//! File system abstractions for filecast.
//!
//! [`entry`] holds the wire types ([`entry::EntryType`], [`entry::EntryInfo`]),
//! [`ops`] classifies paths and lists directories, and [`path`] maps
//! client-supplied relative paths onto the served base directory.

pub mod entry;
pub mod ops;
pub mod path;

//! Persistent alias storage.
//!
//! Alias records live in a single JSON file in the home directory. The store
//! is the source of truth for listing and running aliases; the shell startup
//! file is only a mirror.

pub mod file;
pub mod record;

pub use file::RecordStore;
pub use record::{validate_alias_name, AliasOptions, AliasRecord, RESERVED_NAMES};

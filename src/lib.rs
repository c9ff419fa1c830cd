//! Publication lifecycle for video records.
//!
//! A record's `state` says what an editor intends; whether end users see it is
//! derived from `active`, `state` and `publish_timestamp` against the current
//! time. The same derivation backs both the per-record check and the
//! published-only listing.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

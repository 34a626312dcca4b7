//! Test module - Central organization for all test submodules
//!
//! - Request classification and the filesystem operations behind it
//! - Full HTTP flows through the catch-all route
//! - Config loading, CLI overrides, error mapping, browser selection
//!
//! WHY: Organize tests by functional area, one file per source module, so coverage for a
//! feature is easy to find and extend.

pub(crate) mod config;
pub(crate) mod intent;
pub(crate) mod reply;

//! Google Drive sharing-link translation and single-stream download.

pub mod config;
pub mod fetch;
pub mod link;
pub mod logging;

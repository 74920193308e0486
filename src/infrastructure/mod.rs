//! Filesystem conventions of the Zellij plugin sandbox.
//!
//! Inside the sandbox the host's home directory is mounted under `/host`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, SPAN_FILE_NAME};

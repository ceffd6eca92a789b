//! The `req` command: argument parsing, ureq transport, and terminal output
//! around `req_core`.

pub mod app;
pub mod args;
pub mod style;
pub mod transport;

pub use app::{run, EXIT_FAILURE, EXIT_SUCCESS};
pub use args::{Cli, Command, RequestArgs};
pub use style::Palette;
pub use transport::UreqTransport;

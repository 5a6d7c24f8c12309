// Tabulate web server
//
// Serves a single page that posts pasted text to the extraction pipeline
// and offers the resulting table as a CSV or JSON download.

pub mod config;
pub mod server;

pub use config::*;

pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod record;
pub mod report;

pub use error::{Error, Result};

//! Data types shared by the pipeline stages.

pub mod config;
pub mod export;
pub mod extraction;
pub mod record;
pub mod table;

//! Core trait abstractions for the tabulate library.
//!
//! Applications implement these to plug in LLM providers.

pub mod llm;

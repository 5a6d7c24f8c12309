//! Built-in LLM backends.
//!
//! Each backend sits behind a cargo feature (`openai`, `anthropic`) and
//! implements [`Llm`]. Use [`build_llm`] to pick one at runtime.

use std::sync::Arc;

use crate::error::{Result, TabulateError};
use crate::security::LlmCredentials;
use crate::traits::llm::Llm;
use crate::types::config::LlmProvider;

#[cfg(feature = "anthropic")]
mod anthropic;
#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "anthropic")]
pub use anthropic::Anthropic;
#[cfg(feature = "openai")]
pub use openai::OpenAI;

/// Construct the backend for `provider` from explicit credentials.
///
/// Fails with [`TabulateError::Config`] when the credentials are blank or
/// the provider's feature was not compiled in.
pub fn build_llm(provider: LlmProvider, credentials: LlmCredentials) -> Result<Arc<dyn Llm>> {
    match provider {
        #[cfg(feature = "openai")]
        LlmProvider::OpenAI => Ok(Arc::new(OpenAI::new(credentials)?)),
        #[cfg(feature = "anthropic")]
        LlmProvider::Anthropic => Ok(Arc::new(Anthropic::new(credentials)?)),
        #[allow(unreachable_patterns)]
        other => {
            drop(credentials);
            Err(TabulateError::Config(format!(
                "provider '{}' is not enabled in this build",
                other
            )))
        }
    }
}

use crate::domain::ApiKey;
use crate::ports::GenerationClient;

/// Application context holding dependencies for command execution.
///
/// The credential is resolved by the caller and injected here; nothing below
/// this point reads the process environment.
pub struct AppContext<G: GenerationClient> {
    client: G,
    api_key: Option<ApiKey>,
    api_key_env: String,
}

impl<G: GenerationClient> AppContext<G> {
    /// Create a new application context.
    pub fn new(client: G, api_key: Option<ApiKey>, api_key_env: impl Into<String>) -> Self {
        Self { client, api_key, api_key_env: api_key_env.into() }
    }

    /// Get a reference to the generation client.
    pub fn client(&self) -> &G {
        &self.client
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Name of the variable the credential is expected in, for error messages.
    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }
}

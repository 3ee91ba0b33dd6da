//! Application context providing the dependency root.

use crate::client::TroccoClient;
use crate::config::Config;
use crate::di::FromRef;
use crate::error::AppError;

/// Root application context.
///
/// Holds the shared dependencies; services pull what they need through
/// `FromRef<Context>`.
#[derive(Clone)]
pub struct Context {
    /// Authenticated TROCCO API client.
    pub client: TroccoClient,
}

impl Context {
    /// Creates a new context, building the API client from `config`.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        if !config.has_api_key() {
            tracing::warn!("TROCCO_API_KEY is not set; remote calls will be rejected with 401");
        }

        Ok(Self {
            client: TroccoClient::new(config)?,
        })
    }
}

impl FromRef<Context> for TroccoClient {
    fn from_ref(ctx: &Context) -> Self {
        ctx.client.clone()
    }
}

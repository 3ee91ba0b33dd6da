//! User listing.

use validator::Validate;

use crate::client::TroccoClient;
use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::{PageParams, User};

/// Read-only access to the organisation's users.
#[derive(Clone)]
pub struct UserService {
    client: TroccoClient,
}

impl FromRef<Context> for UserService {
    fn from_ref(ctx: &Context) -> Self {
        Self {
            client: TroccoClient::from_ref(ctx),
        }
    }
}

impl UserService {
    pub fn new(client: TroccoClient) -> Self {
        Self { client }
    }

    /// List every user, `limit` per page, starting at `cursor` if given.
    pub async fn list_users(&self, params: &PageParams) -> Result<Vec<User>, AppError> {
        params.validate()?;

        let url = self.client.endpoint(&["api", "users"])?;
        self.client.get_all(url, &params.to_query()).await
    }
}

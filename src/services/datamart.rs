//! Datamart definition lookups and description updates.

use validator::Validate;

use crate::client::TroccoClient;
use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::{
    DatamartDefinitionDetail, DatamartDefinitionIdParams, DatamartDefinitionRecord,
    UpdateDatamartDescriptionParams,
};

const DATAMART_DEFINITIONS: &str = "datamart_definitions";

/// Access to datamart definitions.
#[derive(Clone)]
pub struct DatamartService {
    client: TroccoClient,
}

impl FromRef<Context> for DatamartService {
    fn from_ref(ctx: &Context) -> Self {
        Self {
            client: TroccoClient::from_ref(ctx),
        }
    }
}

impl DatamartService {
    pub fn new(client: TroccoClient) -> Self {
        Self { client }
    }

    /// Get the full definition of one datamart.
    pub async fn get_datamart_definition(
        &self,
        params: &DatamartDefinitionIdParams,
    ) -> Result<DatamartDefinitionDetail, AppError> {
        params.validate()?;
        self.fetch(&params.datamart_definition_id).await
    }

    /// Replace the description of a datamart definition.
    ///
    /// The service only accepts whole records, so the current definition is
    /// fetched as raw JSON, its description replaced, and the record sent back
    /// with every other field exactly as received.
    /// Returns the definition as stored after the update.
    ///
    /// Not atomic: a change made by someone else between the GET and the
    /// PATCH is overwritten. The API exposes no version field to guard it.
    pub async fn update_description(
        &self,
        params: &UpdateDatamartDescriptionParams,
    ) -> Result<DatamartDefinitionDetail, AppError> {
        params.validate()?;

        let id = params.datamart_definition_id.as_str();
        let url = self.url(id)?;
        let current: DatamartDefinitionRecord = self.client.get(url.clone()).await?;
        let updated = current.with_description(params.description.as_str());

        tracing::debug!(id, "Writing back datamart definition with new description");
        self.client.patch(url, &updated).await
    }

    async fn fetch(&self, id: &str) -> Result<DatamartDefinitionDetail, AppError> {
        let url = self.url(id)?;
        self.client.get(url).await
    }

    fn url(&self, id: &str) -> Result<url::Url, AppError> {
        self.client.endpoint(&["api", DATAMART_DEFINITIONS, id])
    }
}

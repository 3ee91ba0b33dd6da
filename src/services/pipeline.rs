//! Pipeline definition lookups.

use validator::Validate;

use crate::client::TroccoClient;
use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::{
    PageParams, PipelineDefinitionDetail, PipelineDefinitionIdParams, PipelineDefinitionSummary,
};

const PIPELINE_DEFINITIONS: &str = "pipeline_definitions";

/// Read-only access to pipeline definitions.
#[derive(Clone)]
pub struct PipelineService {
    client: TroccoClient,
}

impl FromRef<Context> for PipelineService {
    fn from_ref(ctx: &Context) -> Self {
        Self {
            client: TroccoClient::from_ref(ctx),
        }
    }
}

impl PipelineService {
    pub fn new(client: TroccoClient) -> Self {
        Self { client }
    }

    /// List every pipeline definition (id and name only).
    pub async fn list_pipeline_definitions(
        &self,
        params: &PageParams,
    ) -> Result<Vec<PipelineDefinitionSummary>, AppError> {
        params.validate()?;

        let url = self.client.endpoint(&["api", PIPELINE_DEFINITIONS])?;
        self.client.get_all(url, &params.to_query()).await
    }

    /// Get the full definition of one pipeline.
    pub async fn get_pipeline_definition(
        &self,
        params: &PipelineDefinitionIdParams,
    ) -> Result<PipelineDefinitionDetail, AppError> {
        params.validate()?;

        let url = self.client.endpoint(&[
            "api",
            PIPELINE_DEFINITIONS,
            params.pipeline_definition_id.as_str(),
        ])?;
        self.client.get(url).await
    }
}

//! Data shapes exchanged with the TROCCO API and tool arguments.

mod datamart;
mod page;
mod params;
mod pipeline;
mod user;

pub use datamart::{DatamartDefinitionDetail, DatamartDefinitionRecord};
pub use page::Page;
pub use params::{
    DatamartDefinitionIdParams, PageParams, PipelineDefinitionIdParams,
    UpdateDatamartDescriptionParams, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, MIN_PAGE_LIMIT,
};
pub use pipeline::{PipelineDefinitionDetail, PipelineDefinitionSummary};
pub use user::User;

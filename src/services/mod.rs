//! Domain operations against the TROCCO API.
//!
//! Each service validates its arguments before building a URL, so invalid
//! input never reaches the network. Services are resolved from the
//! [`crate::context::Context`] through `FromRef`.

mod datamart;
mod pipeline;
mod user;

pub use datamart::DatamartService;
pub use pipeline::PipelineService;
pub use user::UserService;

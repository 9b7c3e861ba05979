//! Commit-message synthesis: diff preparation, response cleanup, header
//! validation and the bounded retry loop that ties them to a model.

pub mod diff;
pub mod error;
pub mod normalize;
pub mod observer;
pub mod pipeline;
pub mod validate;

pub use error::CommitError;
pub use observer::{LogObserver, PipelineObserver};
pub use pipeline::CommitPipeline;

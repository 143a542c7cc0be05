//! TaskMaster API
//!
//! Typed client for the TaskMaster REST API: task models, response
//! envelopes, errors, and the [`TaskApi`] trait with its HTTP implementation.

mod client;
mod envelope;
mod error;
mod models;

#[cfg(test)]
mod tests;

pub use client::{encode_query, HttpTaskApi, TaskApi};
pub use error::{ApiError, ApiResult};
pub use models::{ExportFormat, Priority, Task, TaskDraft, TaskFilter, TaskId, TaskPatch};

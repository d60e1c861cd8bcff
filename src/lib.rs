//! In-memory issue tracking REST API.
//!
//! Issues are grouped by project name and served under
//! `/api/issues/{project}`: `GET` lists and filters, `POST` creates, `PUT`
//! updates and `DELETE` removes. Nothing is persisted; an [`IssueStore`]
//! lives as long as the process that created it.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use error::IssueError;
pub use store::IssueStore;

//! Domain models for the issue tracker.
//!
//! - [`Issue`]: a single tracked work item, owned by a project.
//! - [`IssuePatch`]: the fields submitted on an update, minus the identifier
//!   and any empty values.
//! - Request inputs ([`CreateIssueInput`], [`UpdateIssueInput`],
//!   [`DeleteIssueInput`]) and response bodies ([`ActionResponse`],
//!   [`ErrorResponse`]) as they appear on the wire.

mod input;
mod issue;
mod response;

pub use input::*;
pub use issue::*;
pub use response::*;

//! Data models for Issueboard entities.
//!
//! - `Workspace`: a named group of repositories, identified by id
//! - `Issue`: a backlog entry belonging to the workspace whose fetch
//!   path produced it

pub mod issue;
pub mod workspace;

pub use issue::Issue;
pub use workspace::Workspace;

/// Entity models for the MegaOrg console
///
/// This module contains the records served by the remote API together with
/// the payload types the client submits. Wire JSON uses camelCase field
/// names and snake_case enum values, matching the backend contract.
///
/// # Models
///
/// - `task`: Tasks with status, priority, due date and an assignee
/// - `user`: User accounts with role and optional avatar

pub mod task;
pub mod user;

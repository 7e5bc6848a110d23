/// Task model and submission payloads
///
/// Tasks are the central entity of the console: each one carries a status,
/// a priority, a due date and exactly one assigned user. The server assigns
/// `id`, `createdAt` and `updatedAt`; the client never submits them.
///
/// # Wire format
///
/// ```json
/// {
///   "id": 12,
///   "title": "Fix login bug",
///   "description": "…",
///   "notes": "…",
///   "dueDate": "2025-03-01",
///   "status": "in_progress",
///   "priority": "high",
///   "assignedTo": { "id": 7, "user": "mgarcia", "fullname": "María García", … },
///   "createdAt": "2025-01-10T09:00:00Z",
///   "updatedAt": "2025-02-01T17:30:00Z"
/// }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;
use crate::validate::{self, FieldError};

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Freshly created, not yet picked up
    New,

    /// Waiting on something before work can start
    Pending,

    /// Actively being worked on
    InProgress,

    /// Work finished, not yet reviewed
    Completed,

    /// Under review
    InReview,

    /// Reviewed and closed
    Done,
}

impl TaskStatus {
    /// String value as sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::New => "new",
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::InReview => "in_review",
            TaskStatus::Done => "done",
        }
    }

    /// All statuses, in the order the selector presents them
    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::New,
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::InReview,
            TaskStatus::Done,
        ]
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::New
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl TaskPriority {
    /// String value as sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Critical => "critical",
        }
    }

    /// All priorities, in the order the selector presents them
    pub fn all() -> &'static [TaskPriority] {
        &[
            TaskPriority::Low,
            TaskPriority::Medium,
            TaskPriority::High,
            TaskPriority::Critical,
        ]
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

/// Task record as served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier
    pub id: i64,

    /// Short task title
    pub title: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Due date as an ISO calendar string (`YYYY-MM-DD`), no time component
    pub due_date: String,

    /// Workflow status
    pub status: TaskStatus,

    /// Priority
    pub priority: TaskPriority,

    /// The user this task is assigned to
    pub assigned_to: User,

    /// When the record was created (server-assigned)
    pub created_at: DateTime<Utc>,

    /// When the record was last updated (server-assigned)
    pub updated_at: DateTime<Utc>,
}

/// Reduced task projection embedded in user detail responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    /// Server-assigned identifier
    pub id: i64,

    /// Short task title
    pub title: String,

    /// Priority
    pub priority: TaskPriority,
}

/// Payload for creating a task
///
/// The create schema: title, due date and assignee are required; description
/// and notes are optional. `id` is never part of the payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    #[validate(length(min = 3, message = "El título es obligatorio"))]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[validate(length(min = 1, message = "La fecha límite es obligatoria"))]
    pub due_date: String,

    pub status: TaskStatus,

    pub priority: TaskPriority,

    #[validate(required(message = "Debes asignar un usuario"))]
    pub assigned_to_id: Option<i64>,
}

impl CreateTask {
    /// Runs the create schema and returns field-scoped errors
    ///
    /// The due date must be a parseable `YYYY-MM-DD` string on top of the
    /// declared non-empty constraint.
    pub fn validate_fields(&self) -> Vec<FieldError> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => validate::collect(&e),
        };
        if !self.due_date.is_empty() && !validate::is_iso_date(&self.due_date) {
            errors.push(FieldError::new("due_date", "Fecha inválida"));
        }
        errors
    }
}

/// Payload for updating a task
///
/// The edit schema relaxes the create schema: every field is optional, and
/// fields left out of the payload mean "unchanged" to the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, message = "El título es obligatorio"))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "La fecha límite es obligatoria"))]
    pub due_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<i64>,
}

impl UpdateTask {
    /// Runs the edit schema and returns field-scoped errors
    pub fn validate_fields(&self) -> Vec<FieldError> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => validate::collect(&e),
        };
        if let Some(due) = &self.due_date {
            if !due.is_empty() && !validate::is_iso_date(due) {
                errors.push(FieldError::new("due_date", "Fecha inválida"));
            }
        }
        errors
    }
}

/// Task dialog controller
///
/// Owns the field state for the create/edit dialogs and the delete
/// confirmation. The create and edit schemas from `megaorg-shared` are the
/// single source of truth for submittability: confirm builds a payload,
/// runs the schema, and only hands a command to the page when it passes.

use crossterm::event::{KeyCode, KeyEvent};

use megaorg_shared::models::task::{CreateTask, Task, TaskPriority, TaskStatus, UpdateTask};
use megaorg_shared::models::user::User;
use megaorg_shared::validate::{self, FieldError};

use crate::commands::Command;
use crate::forms::{FormAction, FormMode, SubmitState, TextField};

/// Focusable fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    DueDate,
    Status,
    Priority,
    Assignee,
    Description,
    Notes,
}

const FIELD_ORDER: [TaskField; 7] = [
    TaskField::Title,
    TaskField::DueDate,
    TaskField::Status,
    TaskField::Priority,
    TaskField::Assignee,
    TaskField::Description,
    TaskField::Notes,
];

/// The task CRUD dialog
#[derive(Debug)]
pub struct TaskForm {
    pub mode: FormMode<Task>,
    pub state: SubmitState,
    pub focus: TaskField,
    pub errors: Vec<FieldError>,

    pub title: TextField,
    pub description: TextField,
    pub notes: TextField,
    /// ISO calendar string; the canonical value, whatever the display shows
    pub due_date: TextField,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee: Option<i64>,
    assignee_touched: bool,
}

impl TaskForm {
    /// A create dialog with declared defaults
    pub fn create() -> Self {
        TaskForm {
            mode: FormMode::Create,
            state: SubmitState::Editing,
            focus: TaskField::Title,
            errors: Vec::new(),
            title: TextField::empty(),
            description: TextField::empty(),
            notes: TextField::empty(),
            due_date: TextField::empty(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            assignee: None,
            assignee_touched: false,
        }
    }

    /// An edit dialog pre-populated from the target's current values
    pub fn edit(task: Task) -> Self {
        TaskForm {
            state: SubmitState::Editing,
            focus: TaskField::Title,
            errors: Vec::new(),
            title: TextField::prefilled(&task.title),
            description: TextField::prefilled(task.description.clone().unwrap_or_default()),
            notes: TextField::prefilled(task.notes.clone().unwrap_or_default()),
            due_date: TextField::prefilled(&task.due_date),
            status: task.status,
            priority: task.priority,
            assignee: Some(task.assigned_to.id),
            assignee_touched: false,
            mode: FormMode::Edit(task),
        }
    }

    /// A delete confirmation for the target
    pub fn delete(task: Task) -> Self {
        let mut form = TaskForm::create();
        form.mode = FormMode::Delete(task);
        form
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// First error recorded for a field, for the inline error line
    pub fn error_for(&self, field: &str) -> Option<&str> {
        validate::message_for(&self.errors, field)
    }

    /// Routes a key press; `assignees` is the candidate list for cycling
    pub fn handle_key(&mut self, key: KeyEvent, assignees: &[User]) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Confirm,
            _ => {}
        }
        if self.mode.is_delete() {
            return FormAction::None;
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_step(1),
            KeyCode::BackTab | KeyCode::Up => self.focus_step(-1),
            KeyCode::Left => self.cycle(-1, assignees),
            KeyCode::Right => self.cycle(1, assignees),
            KeyCode::Backspace => {
                if let Some(field) = self.focused_text_mut() {
                    field.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.focused_text_mut() {
                    field.insert(c);
                }
            }
            _ => {}
        }
        FormAction::None
    }

    /// Validates and, when the schema passes, enters `Submitting` and
    /// returns the mutation to dispatch. Re-entrant confirms while a
    /// submission is in flight return `None`.
    pub fn confirm(&mut self) -> Option<Command> {
        if self.is_submitting() {
            return None;
        }
        match &self.mode {
            FormMode::Create => {
                let payload = self.create_payload();
                let errors = payload.validate_fields();
                if !errors.is_empty() {
                    self.errors = errors;
                    return None;
                }
                self.errors.clear();
                self.state = SubmitState::Submitting;
                Some(Command::CreateTask(payload))
            }
            FormMode::Edit(task) => {
                let payload = self.edit_payload();
                let errors = payload.validate_fields();
                if !errors.is_empty() {
                    self.errors = errors;
                    return None;
                }
                self.errors.clear();
                self.state = SubmitState::Submitting;
                Some(Command::UpdateTask {
                    id: task.id,
                    payload,
                })
            }
            FormMode::Delete(task) => {
                self.state = SubmitState::Submitting;
                Some(Command::DeleteTask(task.id))
            }
        }
    }

    /// Returns to `Editing` after a failed submission; field values and
    /// inline errors are left untouched so the operator can retry
    pub fn submission_failed(&mut self) {
        self.state = SubmitState::Editing;
    }

    /// The create schema payload: every current field value
    fn create_payload(&self) -> CreateTask {
        CreateTask {
            title: self.title.value.clone(),
            description: self.description.as_option(),
            notes: self.notes.as_option(),
            due_date: self.due_date.value.clone(),
            status: self.status,
            priority: self.priority,
            assigned_to_id: self.assignee,
        }
    }

    /// The edit schema payload: touched fields only, plus the selects at
    /// their pre-populated values. An untouched assignee stays out of the
    /// payload; the server reads absence as "unchanged".
    fn edit_payload(&self) -> UpdateTask {
        UpdateTask {
            title: self.title.touched.then(|| self.title.value.clone()),
            description: self
                .description
                .touched
                .then(|| self.description.value.clone()),
            notes: self.notes.touched.then(|| self.notes.value.clone()),
            due_date: self.due_date.touched.then(|| self.due_date.value.clone()),
            status: Some(self.status),
            priority: Some(self.priority),
            assigned_to_id: self.assignee_touched.then_some(self.assignee).flatten(),
        }
    }

    fn focus_step(&mut self, step: isize) {
        let i = FIELD_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0) as isize;
        let len = FIELD_ORDER.len() as isize;
        self.focus = FIELD_ORDER[(i + step).rem_euclid(len) as usize];
    }

    fn focused_text_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            TaskField::Title => Some(&mut self.title),
            TaskField::DueDate => Some(&mut self.due_date),
            TaskField::Description => Some(&mut self.description),
            TaskField::Notes => Some(&mut self.notes),
            _ => None,
        }
    }

    fn cycle(&mut self, step: isize, assignees: &[User]) {
        match self.focus {
            TaskField::Status => {
                let all = TaskStatus::all();
                let i = all.iter().position(|s| *s == self.status).unwrap_or(0) as isize;
                self.status = all[(i + step).rem_euclid(all.len() as isize) as usize];
            }
            TaskField::Priority => {
                let all = TaskPriority::all();
                let i = all.iter().position(|p| *p == self.priority).unwrap_or(0) as isize;
                self.priority = all[(i + step).rem_euclid(all.len() as isize) as usize];
            }
            TaskField::Assignee => {
                if assignees.is_empty() {
                    return;
                }
                let next = match self.assignee.and_then(|id| {
                    assignees.iter().position(|u| u.id == id)
                }) {
                    Some(i) => {
                        (i as isize + step).rem_euclid(assignees.len() as isize) as usize
                    }
                    None => 0,
                };
                self.assignee = Some(assignees[next].id);
                self.assignee_touched = true;
            }
            _ => {}
        }
    }

    /// Display name of the currently selected assignee
    pub fn assignee_name<'a>(&self, assignees: &'a [User]) -> Option<&'a str> {
        let id = self.assignee?;
        assignees
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.fullname.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn sample_user(id: i64) -> User {
        User {
            id,
            user: "mgarcia".to_string(),
            fullname: "María García".to_string(),
            role: "user".to_string(),
            avatar_url: None,
            tasks: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_task(status: TaskStatus) -> Task {
        Task {
            id: 12,
            title: "Fix login bug".to_string(),
            description: None,
            notes: None,
            due_date: "2025-03-01".to_string(),
            status,
            priority: TaskPriority::Medium,
            assigned_to: sample_user(7),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_starts_from_defaults() {
        let form = TaskForm::create();
        assert_eq!(form.status, TaskStatus::New);
        assert_eq!(form.priority, TaskPriority::Medium);
        assert!(form.title.is_blank());
        assert!(form.assignee.is_none());
        assert_eq!(form.state, SubmitState::Editing);
    }

    #[test]
    fn test_create_blocks_on_required_fields() {
        let mut form = TaskForm::create();
        assert!(form.confirm().is_none());
        assert!(form.error_for("title").is_some());
        assert!(form.error_for("due_date").is_some());
        assert_eq!(
            form.error_for("assigned_to_id"),
            Some("Debes asignar un usuario")
        );
        // Still editing: nothing was dispatched
        assert_eq!(form.state, SubmitState::Editing);
    }

    #[test]
    fn test_create_submits_exact_payload() {
        let mut form = TaskForm::create();
        form.title.set("Fix login bug");
        form.due_date.set("2025-03-01");
        form.priority = TaskPriority::High;
        form.assignee = Some(7);

        let command = form.confirm().expect("schema passes");
        let payload = match command {
            Command::CreateTask(p) => p,
            other => panic!("unexpected command: {other:?}"),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "title": "Fix login bug",
                "dueDate": "2025-03-01",
                "status": "new",
                "priority": "high",
                "assignedToId": 7
            })
        );
        assert!(form.is_submitting());
    }

    #[test]
    fn test_confirm_is_not_reentrant() {
        let mut form = TaskForm::create();
        form.title.set("Fix login bug");
        form.due_date.set("2025-03-01");
        form.assignee = Some(7);

        assert!(form.confirm().is_some());
        assert!(form.confirm().is_none());

        form.submission_failed();
        assert!(form.confirm().is_some());
    }

    #[test]
    fn test_edit_prepopulates_fields() {
        let form = TaskForm::edit(sample_task(TaskStatus::Pending));
        assert_eq!(form.title.value, "Fix login bug");
        assert_eq!(form.due_date.value, "2025-03-01");
        assert_eq!(form.status, TaskStatus::Pending);
        assert_eq!(form.assignee, Some(7));
        assert!(!form.title.touched);
    }

    #[test]
    fn test_edit_untouched_fields_stay_out_of_payload() {
        let mut form = TaskForm::edit(sample_task(TaskStatus::Pending));
        form.status = TaskStatus::InProgress;

        let command = form.confirm().expect("schema passes");
        let payload = match command {
            Command::UpdateTask { id, payload } => {
                assert_eq!(id, 12);
                payload
            }
            other => panic!("unexpected command: {other:?}"),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "status": "in_progress", "priority": "medium" })
        );
    }

    #[test]
    fn test_edit_touched_title_joins_payload() {
        let mut form = TaskForm::edit(sample_task(TaskStatus::New));
        form.title.set("Fix login bug (urgent)");

        let command = form.confirm().expect("schema passes");
        let payload = match command {
            Command::UpdateTask { payload, .. } => payload,
            other => panic!("unexpected command: {other:?}"),
        };
        assert_eq!(payload.title.as_deref(), Some("Fix login bug (urgent)"));
        assert!(payload.due_date.is_none());
    }

    #[test]
    fn test_cycle_assignee_tracks_candidates() {
        let mut form = TaskForm::create();
        let users = vec![sample_user(1), sample_user(2), sample_user(3)];
        form.focus = TaskField::Assignee;

        form.cycle(1, &users);
        assert_eq!(form.assignee, Some(1));
        form.cycle(1, &users);
        assert_eq!(form.assignee, Some(2));
        form.cycle(-1, &users);
        assert_eq!(form.assignee, Some(1));
    }

    #[test]
    fn test_delete_confirm_dispatches_delete() {
        let mut form = TaskForm::delete(sample_task(TaskStatus::Done));
        match form.confirm() {
            Some(Command::DeleteTask(12)) => {}
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(form.confirm().is_none());
    }
}

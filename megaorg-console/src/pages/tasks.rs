/// Tareas page controller
///
/// Holds the task collection, the cursor, the optional details panel and
/// the optional CRUD dialog. After any successful mutation the whole
/// collection is reloaded from the server rather than patched in place;
/// the server remains the single source of truth for ordering and derived
/// fields.

use crossterm::event::{KeyCode, KeyEvent};

use megaorg_client::ClientError;
use megaorg_shared::models::task::Task;
use megaorg_shared::models::user::User;

use crate::commands::{Command, MutationOp};
use crate::forms::{FormAction, TaskForm};
use crate::notify::Notices;
use crate::pages::LoadState;

pub struct TasksPage {
    pub tasks: LoadState<Vec<Task>>,
    /// Assignee candidates for the dialog selector
    pub assignees: Vec<User>,
    /// Cursor position in the visible list
    pub selected: usize,
    pub dialog: Option<TaskForm>,
    /// Task shown in the details panel, when open
    pub details: Option<Task>,
}

impl TasksPage {
    pub fn new() -> Self {
        TasksPage {
            tasks: LoadState::Loading,
            assignees: Vec::new(),
            selected: 0,
            dialog: None,
            details: None,
        }
    }

    /// Called on every route entry. Both the collection and the assignee
    /// candidates re-fetch each time, so mutations made on other pages are
    /// picked up; the current collection stays rendered while the reload
    /// is in flight.
    pub fn enter(&mut self) -> Vec<Command> {
        vec![Command::LoadTasks, Command::LoadAssignees]
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    fn selected_task(&self) -> Option<Task> {
        self.tasks
            .loaded()
            .and_then(|tasks| tasks.get(self.selected))
            .cloned()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if let Some(form) = self.dialog.as_mut() {
            match form.handle_key(key, &self.assignees) {
                FormAction::Cancel => {
                    // Dropping the dialog discards its field state entirely
                    self.dialog = None;
                }
                FormAction::Confirm => {
                    if let Some(command) = form.confirm() {
                        return vec![command];
                    }
                }
                FormAction::None => {}
            }
            return Vec::new();
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.tasks.loaded().map_or(0, Vec::len);
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Char('n') => {
                self.dialog = Some(TaskForm::create());
            }
            KeyCode::Char('e') => {
                if let Some(task) = self.selected_task() {
                    self.dialog = Some(TaskForm::edit(task));
                }
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.selected_task() {
                    self.dialog = Some(TaskForm::delete(task));
                }
            }
            KeyCode::Enter => {
                self.details = self.selected_task();
            }
            KeyCode::Esc => {
                self.details = None;
            }
            _ => {}
        }
        Vec::new()
    }

    pub fn on_tasks_loaded(&mut self, result: Result<Vec<Task>, ClientError>) {
        self.tasks = match result {
            Ok(tasks) => {
                if self.selected >= tasks.len() {
                    self.selected = tasks.len().saturating_sub(1);
                }
                LoadState::Loaded(tasks)
            }
            Err(err) => LoadState::Error(
                err.server_message()
                    .unwrap_or("Error al cargar las tareas")
                    .to_string(),
            ),
        };
    }

    pub fn on_assignees_loaded(&mut self, result: Result<Vec<User>, ClientError>) {
        if let Ok(users) = result {
            self.assignees = users;
        }
    }

    /// Outcome of a task mutation. Success closes the dialog and reloads
    /// the collection; failure keeps the dialog open with its values. The
    /// dialog may already be gone if the operator pressed Esc while the
    /// call was in flight.
    pub fn on_mutation_done(
        &mut self,
        op: MutationOp,
        result: Result<(), ClientError>,
        notices: &mut Notices,
    ) -> Vec<Command> {
        match result {
            Ok(()) => {
                notices.success(match op {
                    MutationOp::Create => "Tarea creada correctamente",
                    MutationOp::Update => "Tarea actualizada correctamente",
                    MutationOp::Delete => "Tarea eliminada correctamente",
                });
                self.dialog = None;
                self.details = None;
                vec![Command::LoadTasks]
            }
            Err(err) => {
                let fallback = match op {
                    MutationOp::Create => "Error al crear la tarea",
                    MutationOp::Update => "Error al actualizar la tarea",
                    MutationOp::Delete => "Error al eliminar la tarea",
                };
                notices.error(err.server_message().unwrap_or(fallback).to_string());
                if let Some(form) = self.dialog.as_mut() {
                    form.submission_failed();
                }
                Vec::new()
            }
        }
    }
}

impl Default for TasksPage {
    fn default() -> Self {
        TasksPage::new()
    }
}

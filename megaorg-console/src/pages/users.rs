/// Usuarios page controller
///
/// Same shape as the Tareas page plus a lazily-fetched details panel: the
/// list endpoint serves users without their assigned tasks, so opening a
/// user's details triggers a dedicated fetch. A generation counter guards
/// against a slow fetch landing after the panel moved on.

use crossterm::event::{KeyCode, KeyEvent};

use megaorg_client::ClientError;
use megaorg_shared::models::user::User;

use crate::commands::{Command, MutationOp};
use crate::forms::{FormAction, UserForm};
use crate::notify::Notices;
use crate::pages::LoadState;

/// The lazily-fetched details panel
pub struct UserDetails {
    pub state: LoadState<User>,
    generation: u64,
}

pub struct UsersPage {
    pub users: LoadState<Vec<User>>,
    pub selected: usize,
    pub dialog: Option<UserForm>,
    pub details: Option<UserDetails>,
    /// Bumped on every panel open; a result tagged with an older value is
    /// stale and dropped
    generation: u64,
}

impl UsersPage {
    pub fn new() -> Self {
        UsersPage {
            users: LoadState::Loading,
            selected: 0,
            dialog: None,
            details: None,
            generation: 0,
        }
    }

    /// Called on every route entry; the collection re-fetches each time
    /// while the current one stays rendered
    pub fn enter(&mut self) -> Vec<Command> {
        vec![Command::LoadUsers]
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    fn selected_user(&self) -> Option<User> {
        self.users
            .loaded()
            .and_then(|users| users.get(self.selected))
            .cloned()
    }

    fn open_details(&mut self, id: i64) -> Vec<Command> {
        self.generation += 1;
        self.details = Some(UserDetails {
            state: LoadState::Loading,
            generation: self.generation,
        });
        vec![Command::FetchUserDetail {
            id,
            generation: self.generation,
        }]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if let Some(form) = self.dialog.as_mut() {
            match form.handle_key(key) {
                FormAction::Cancel => {
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
                let len = self.users.loaded().map_or(0, Vec::len);
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Char('n') => {
                self.dialog = Some(UserForm::create());
            }
            KeyCode::Char('e') => {
                if let Some(user) = self.selected_user() {
                    self.dialog = Some(UserForm::edit(user));
                }
            }
            KeyCode::Char('d') => {
                if let Some(user) = self.selected_user() {
                    self.dialog = Some(UserForm::delete(user));
                }
            }
            KeyCode::Enter => {
                if let Some(user) = self.selected_user() {
                    return self.open_details(user.id);
                }
            }
            KeyCode::Esc => {
                self.details = None;
            }
            _ => {}
        }
        Vec::new()
    }

    pub fn on_users_loaded(&mut self, result: Result<Vec<User>, ClientError>) {
        self.users = match result {
            Ok(users) => {
                if self.selected >= users.len() {
                    self.selected = users.len().saturating_sub(1);
                }
                LoadState::Loaded(users)
            }
            Err(err) => LoadState::Error(
                err.server_message()
                    .unwrap_or("Error al cargar los usuarios")
                    .to_string(),
            ),
        };
    }

    /// A detail fetch came back. Dropped when the panel was closed in the
    /// meantime or belongs to an older open, so a slow response can never
    /// overwrite a newer panel.
    pub fn on_detail_loaded(&mut self, generation: u64, result: Result<User, ClientError>) {
        let Some(details) = self.details.as_mut() else {
            return;
        };
        if details.generation != generation {
            return;
        }
        details.state = match result {
            Ok(user) => LoadState::Loaded(user),
            Err(err) => LoadState::Error(
                err.server_message()
                    .unwrap_or("Error al cargar el usuario")
                    .to_string(),
            ),
        };
    }

    pub fn on_mutation_done(
        &mut self,
        op: MutationOp,
        result: Result<(), ClientError>,
        notices: &mut Notices,
    ) -> Vec<Command> {
        match result {
            Ok(()) => {
                notices.success(match op {
                    MutationOp::Create => "Usuario creado correctamente",
                    MutationOp::Update => "Usuario actualizado correctamente",
                    MutationOp::Delete => "Usuario eliminado correctamente",
                });
                self.dialog = None;
                self.details = None;
                vec![Command::LoadUsers]
            }
            Err(err) => {
                let fallback = match op {
                    MutationOp::Create => "Error al crear el usuario",
                    MutationOp::Update => "Error al actualizar el usuario",
                    MutationOp::Delete => "Error al eliminar el usuario",
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

impl Default for UsersPage {
    fn default() -> Self {
        UsersPage::new()
    }
}

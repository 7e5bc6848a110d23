/// User dialog controller
///
/// Same shape as the task dialog with one extra rule: the password is
/// write-only. Create requires it; edit treats a blank field as "keep the
/// current password" and never sends an empty string.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use validator::Validate;

use megaorg_shared::models::user::{CreateUser, UpdateUser, User, UserRole};
use megaorg_shared::validate::{self, FieldError};

use crate::commands::Command;
use crate::forms::{FormAction, FormMode, SubmitState, TextField};

/// Focusable fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Fullname,
    Username,
    Password,
    Role,
    Avatar,
}

const FIELD_ORDER: [UserField; 5] = [
    UserField::Fullname,
    UserField::Username,
    UserField::Password,
    UserField::Role,
    UserField::Avatar,
];

/// The user CRUD dialog
#[derive(Debug)]
pub struct UserForm {
    pub mode: FormMode<User>,
    pub state: SubmitState,
    pub focus: UserField,
    pub errors: Vec<FieldError>,

    pub fullname: TextField,
    pub username: TextField,
    /// Blank on edit entry; blank means "no change"
    pub password: TextField,
    /// Wire role string; `None` until the operator picks one on create
    pub role: Option<String>,
    /// Optional path to an avatar image to upload with the submission
    pub avatar: TextField,
}

impl UserForm {
    /// A create dialog with empty fields and no role picked
    pub fn create() -> Self {
        UserForm {
            mode: FormMode::Create,
            state: SubmitState::Editing,
            focus: UserField::Fullname,
            errors: Vec::new(),
            fullname: TextField::empty(),
            username: TextField::empty(),
            password: TextField::empty(),
            role: None,
            avatar: TextField::empty(),
        }
    }

    /// An edit dialog pre-populated from the target, password left blank
    pub fn edit(user: User) -> Self {
        UserForm {
            state: SubmitState::Editing,
            focus: UserField::Fullname,
            errors: Vec::new(),
            fullname: TextField::prefilled(&user.fullname),
            username: TextField::prefilled(&user.user),
            password: TextField::empty(),
            role: Some(user.role.clone()),
            avatar: TextField::empty(),
            mode: FormMode::Edit(user),
        }
    }

    /// A delete confirmation for the target
    pub fn delete(user: User) -> Self {
        let mut form = UserForm::create();
        form.mode = FormMode::Delete(user);
        form
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// First error recorded for a field, for the inline error line
    pub fn error_for(&self, field: &str) -> Option<&str> {
        validate::message_for(&self.errors, field)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
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
            KeyCode::Left => self.cycle_role(-1),
            KeyCode::Right => self.cycle_role(1),
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
    /// returns the mutation to dispatch
    pub fn confirm(&mut self) -> Option<Command> {
        if self.is_submitting() {
            return None;
        }
        match &self.mode {
            FormMode::Create => {
                let payload = self.create_payload();
                let errors = match payload.validate() {
                    Ok(()) => Vec::new(),
                    Err(e) => validate::collect(&e),
                };
                if !errors.is_empty() {
                    self.errors = errors;
                    return None;
                }
                self.errors.clear();
                self.state = SubmitState::Submitting;
                Some(Command::CreateUser {
                    payload,
                    avatar: self.avatar_path(),
                })
            }
            FormMode::Edit(user) => {
                let payload = self.edit_payload();
                let errors = match payload.validate() {
                    Ok(()) => Vec::new(),
                    Err(e) => validate::collect(&e),
                };
                if !errors.is_empty() {
                    self.errors = errors;
                    return None;
                }
                self.errors.clear();
                self.state = SubmitState::Submitting;
                Some(Command::UpdateUser {
                    id: user.id,
                    payload,
                    avatar: self.avatar_path(),
                })
            }
            FormMode::Delete(user) => {
                self.state = SubmitState::Submitting;
                Some(Command::DeleteUser(user.id))
            }
        }
    }

    /// Returns to `Editing` after a failed submission, values preserved
    pub fn submission_failed(&mut self) {
        self.state = SubmitState::Editing;
    }

    fn create_payload(&self) -> CreateUser {
        CreateUser {
            user: self.username.value.clone(),
            fullname: self.fullname.value.clone(),
            password: self.password.value.clone(),
            role: self.role.clone().unwrap_or_default(),
        }
    }

    /// The edit schema still requires handle, fullname and role, so those
    /// always travel at their current (pre-populated) values. The password
    /// joins only when the operator typed one.
    fn edit_payload(&self) -> UpdateUser {
        UpdateUser {
            user: Some(self.username.value.clone()),
            fullname: Some(self.fullname.value.clone()),
            password: self.password.as_option(),
            role: Some(self.role.clone().unwrap_or_default()),
        }
    }

    fn avatar_path(&self) -> Option<PathBuf> {
        self.avatar.as_option().map(PathBuf::from)
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
            UserField::Fullname => Some(&mut self.fullname),
            UserField::Username => Some(&mut self.username),
            UserField::Password => Some(&mut self.password),
            UserField::Avatar => Some(&mut self.avatar),
            UserField::Role => None,
        }
    }

    fn cycle_role(&mut self, step: isize) {
        if self.focus != UserField::Role {
            return;
        }
        let all = UserRole::all();
        let next = match self
            .role
            .as_deref()
            .and_then(|r| all.iter().position(|known| known.as_str() == r))
        {
            Some(i) => (i as isize + step).rem_euclid(all.len() as isize) as usize,
            None => 0,
        };
        self.role = Some(all[next].as_str().to_string());
    }
}

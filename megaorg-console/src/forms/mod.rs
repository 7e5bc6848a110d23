/// CRUD form controllers
///
/// One dialog controller per entity, each presenting one of three mutually
/// exclusive modes. The mode is a closed sum type, so edit and delete
/// carrying a target entity is guaranteed by construction rather than
/// checked at runtime. A mode change is always a fresh controller value
/// built by the page; create and edit never share field state.
///
/// Within create/edit the dialog runs a two-state machine:
///
/// ```text
/// Editing ──confirm (schema passes)──> Submitting
/// Submitting ──success──> closed (dialog dropped by the page)
/// Submitting ──failure──> Editing (dialog stays open, values preserved)
/// ```
///
/// Submission is attempted only when local validation passes, and while
/// one is in flight further confirms are rejected.

pub mod task_form;
pub mod user_form;

pub use task_form::{TaskField, TaskForm};
pub use user_form::{UserField, UserForm};

/// Dialog mode, tagged with the target entity where one is required
#[derive(Debug, Clone)]
pub enum FormMode<T> {
    Create,
    Edit(T),
    Delete(T),
}

impl<T> FormMode<T> {
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, FormMode::Delete(_))
    }

    /// The entity being edited or deleted
    pub fn target(&self) -> Option<&T> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(t) | FormMode::Delete(t) => Some(t),
        }
    }
}

/// Submission half of the dialog state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Editing,
    Submitting,
}

/// What a key press did to the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    /// The operator dismissed the dialog
    Cancel,
    /// The operator confirmed; the page should ask the form to submit
    Confirm,
}

/// A plain text field with touch tracking
///
/// `touched` distinguishes "the operator typed here" from "pre-populated
/// and left alone", which decides whether the field joins an edit payload.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub value: String,
    pub touched: bool,
}

impl TextField {
    pub fn empty() -> Self {
        TextField::default()
    }

    /// A field pre-populated from an existing record, not yet touched
    pub fn prefilled(value: impl Into<String>) -> Self {
        TextField {
            value: value.into(),
            touched: false,
        }
    }

    /// Replaces the value, marking the field as touched
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = true;
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
        self.touched = true;
    }

    pub fn backspace(&mut self) {
        self.value.pop();
        self.touched = true;
    }

    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
    }

    /// The value as an optional payload field: empty becomes `None`
    pub fn as_option(&self) -> Option<String> {
        if self.value.is_empty() {
            None
        } else {
            Some(self.value.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_mode_target() {
        let create: FormMode<i64> = FormMode::Create;
        assert!(create.is_create());
        assert!(create.target().is_none());

        let edit = FormMode::Edit(7);
        assert_eq!(edit.target(), Some(&7));
        assert!(!edit.is_delete());

        let delete = FormMode::Delete(3);
        assert!(delete.is_delete());
        assert_eq!(delete.target(), Some(&3));
    }

    #[test]
    fn test_text_field_touch_tracking() {
        let mut field = TextField::prefilled("María García");
        assert!(!field.touched);

        field.insert('!');
        assert!(field.touched);
        assert_eq!(field.value, "María García!");

        field.backspace();
        assert_eq!(field.value, "María García");
    }

    #[test]
    fn test_text_field_as_option() {
        assert_eq!(TextField::empty().as_option(), None);
        assert_eq!(
            TextField::prefilled("notas").as_option(),
            Some("notas".to_string())
        );
    }
}

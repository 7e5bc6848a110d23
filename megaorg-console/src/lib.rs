//! # MegaOrg Console
//!
//! Terminal dashboard for the MegaOrg organizational tool. The shell offers
//! four routes (dashboard, projects, tasks, users); the task and user pages
//! render tables, detail panels and create/edit/delete dialogs, delegating
//! all persistence to the remote API through the store traits.
//!
//! ## Modules
//!
//! - `app`: Application shell, routing and the event loop
//! - `commands`: Commands the pages emit and the events that come back
//! - `forms`: The CRUD form controllers (the dialogs' state machines)
//! - `pages`: Per-route controllers owning selection and dialog state
//! - `views`: ratatui rendering for the shell, tables, panels and dialogs
//! - `notify`: Success/error notifications
//! - `input`: Keyboard input thread

pub mod app;
pub mod commands;
pub mod forms;
pub mod input;
pub mod notify;
pub mod pages;
pub mod views;

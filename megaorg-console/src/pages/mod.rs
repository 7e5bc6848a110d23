/// Page controllers
///
/// One controller per sidebar route. Controllers are synchronous: they
/// react to key presses and app events, mutate their own state, and return
/// the commands to dispatch. Nothing in here awaits.

pub mod dashboard;
pub mod projects;
pub mod tasks;
pub mod users;

pub use tasks::TasksPage;
pub use users::UsersPage;

/// Lifecycle of one fetched collection or record
///
/// Pending-ness lives here as data rather than in a blocked task, so a
/// page is always renderable.
#[derive(Debug)]
pub enum LoadState<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

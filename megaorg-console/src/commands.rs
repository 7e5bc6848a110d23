/// Commands and app events
///
/// Pages never touch the network themselves: key handling returns
/// `Command` values, the `Dispatcher` executes each one as a spawned store
/// call, and the outcome comes back into the event loop as an `AppEvent`.
/// Pending-ness is therefore always a state flag on the page or dialog,
/// never a blocked task.

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

use megaorg_client::{ClientError, TaskStore, UserStore};
use megaorg_shared::models::task::{CreateTask, Task, UpdateTask};
use megaorg_shared::models::user::{CreateUser, UpdateUser, User};

/// Which mutation an outcome belongs to, for notification wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    Create,
    Update,
    Delete,
}

/// Side effects requested by the pages
#[derive(Debug)]
pub enum Command {
    LoadTasks,
    /// Assignee candidates for the task dialog
    LoadAssignees,
    LoadUsers,
    CreateTask(CreateTask),
    UpdateTask {
        id: i64,
        payload: UpdateTask,
    },
    DeleteTask(i64),
    CreateUser {
        payload: CreateUser,
        avatar: Option<PathBuf>,
    },
    UpdateUser {
        id: i64,
        payload: UpdateUser,
        avatar: Option<PathBuf>,
    },
    DeleteUser(i64),
    /// Lazy detail fetch; the generation tag guards against stale results
    FetchUserDetail {
        id: i64,
        generation: u64,
    },
}

/// Everything the event loop consumes
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    TasksLoaded(Result<Vec<Task>, ClientError>),
    AssigneesLoaded(Result<Vec<User>, ClientError>),
    UsersLoaded(Result<Vec<User>, ClientError>),
    TaskMutationDone {
        op: MutationOp,
        result: Result<(), ClientError>,
    },
    UserMutationDone {
        op: MutationOp,
        result: Result<(), ClientError>,
    },
    UserDetailLoaded {
        generation: u64,
        result: Result<User, ClientError>,
    },
}

/// Executes commands against the stores and reports back over the channel
///
/// Each command spawns one task performing exactly one store call. A send
/// failure means the event loop is gone, so results are dropped silently.
pub struct Dispatcher {
    tasks: Arc<dyn TaskStore>,
    users: Arc<dyn UserStore>,
    events: UnboundedSender<AppEvent>,
}

impl Dispatcher {
    pub fn new(
        tasks: Arc<dyn TaskStore>,
        users: Arc<dyn UserStore>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Dispatcher {
            tasks,
            users,
            events,
        }
    }

    pub fn dispatch_all(&self, commands: Vec<Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    pub fn dispatch(&self, command: Command) {
        let events = self.events.clone();
        match command {
            Command::LoadTasks => {
                let store = self.tasks.clone();
                tokio::spawn(async move {
                    let _ = events.send(AppEvent::TasksLoaded(store.list().await));
                });
            }
            Command::LoadAssignees => {
                let store = self.users.clone();
                tokio::spawn(async move {
                    let _ = events.send(AppEvent::AssigneesLoaded(store.list().await));
                });
            }
            Command::LoadUsers => {
                let store = self.users.clone();
                tokio::spawn(async move {
                    let _ = events.send(AppEvent::UsersLoaded(store.list().await));
                });
            }
            Command::CreateTask(payload) => {
                let store = self.tasks.clone();
                tokio::spawn(async move {
                    let result = store.create(payload).await.map(|_| ());
                    let _ = events.send(AppEvent::TaskMutationDone {
                        op: MutationOp::Create,
                        result,
                    });
                });
            }
            Command::UpdateTask { id, payload } => {
                let store = self.tasks.clone();
                tokio::spawn(async move {
                    let result = store.update(id, payload).await.map(|_| ());
                    let _ = events.send(AppEvent::TaskMutationDone {
                        op: MutationOp::Update,
                        result,
                    });
                });
            }
            Command::DeleteTask(id) => {
                let store = self.tasks.clone();
                tokio::spawn(async move {
                    let result = store.delete(id).await;
                    let _ = events.send(AppEvent::TaskMutationDone {
                        op: MutationOp::Delete,
                        result,
                    });
                });
            }
            Command::CreateUser { payload, avatar } => {
                let store = self.users.clone();
                tokio::spawn(async move {
                    let result = store.create(payload, avatar).await.map(|_| ());
                    let _ = events.send(AppEvent::UserMutationDone {
                        op: MutationOp::Create,
                        result,
                    });
                });
            }
            Command::UpdateUser {
                id,
                payload,
                avatar,
            } => {
                let store = self.users.clone();
                tokio::spawn(async move {
                    let result = store.update(id, payload, avatar).await.map(|_| ());
                    let _ = events.send(AppEvent::UserMutationDone {
                        op: MutationOp::Update,
                        result,
                    });
                });
            }
            Command::DeleteUser(id) => {
                let store = self.users.clone();
                tokio::spawn(async move {
                    let result = store.delete(id).await;
                    let _ = events.send(AppEvent::UserMutationDone {
                        op: MutationOp::Delete,
                        result,
                    });
                });
            }
            Command::FetchUserDetail { id, generation } => {
                let store = self.users.clone();
                tokio::spawn(async move {
                    let result = store.get(id).await;
                    let _ = events.send(AppEvent::UserDetailLoaded { generation, result });
                });
            }
        }
    }
}

/// Application shell: routing and the event loop
///
/// The shell owns the pages, the notification queue and the quit flag.
/// Events arrive on one channel regardless of origin (keyboard thread,
/// tick, store results) and are folded into state synchronously; every
/// fold may return commands for the dispatcher.

use crossterm::event::{KeyCode, KeyEvent};

use crate::commands::{AppEvent, Command};
use crate::notify::Notices;
use crate::pages::{TasksPage, UsersPage};

/// Sidebar routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Projects,
    Tasks,
    Users,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[Route::Dashboard, Route::Projects, Route::Tasks, Route::Users]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Projects => "Proyectos",
            Route::Tasks => "Tareas",
            Route::Users => "Usuarios",
        }
    }
}

pub struct App {
    pub route: Route,
    pub tasks_page: TasksPage,
    pub users_page: UsersPage,
    pub notices: Notices,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            route: Route::Dashboard,
            tasks_page: TasksPage::new(),
            users_page: UsersPage::new(),
            notices: Notices::new(),
            should_quit: false,
        }
    }

    fn dialog_open(&self) -> bool {
        match self.route {
            Route::Tasks => self.tasks_page.dialog_open(),
            Route::Users => self.users_page.dialog_open(),
            _ => false,
        }
    }

    /// Switches route, triggering the target page's first load if needed
    fn go_to(&mut self, route: Route) -> Vec<Command> {
        self.route = route;
        match route {
            Route::Tasks => self.tasks_page.enter(),
            Route::Users => self.users_page.enter(),
            _ => Vec::new(),
        }
    }

    /// Folds one event into state, returning commands to dispatch
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<Command> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => {
                self.notices.prune();
                Vec::new()
            }
            AppEvent::TasksLoaded(result) => {
                self.tasks_page.on_tasks_loaded(result);
                Vec::new()
            }
            AppEvent::AssigneesLoaded(result) => {
                self.tasks_page.on_assignees_loaded(result);
                Vec::new()
            }
            AppEvent::UsersLoaded(result) => {
                self.users_page.on_users_loaded(result);
                Vec::new()
            }
            AppEvent::TaskMutationDone { op, result } => {
                self.tasks_page.on_mutation_done(op, result, &mut self.notices)
            }
            AppEvent::UserMutationDone { op, result } => {
                self.users_page.on_mutation_done(op, result, &mut self.notices)
            }
            AppEvent::UserDetailLoaded { generation, result } => {
                self.users_page.on_detail_loaded(generation, result);
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        // Global keys apply only while no dialog is capturing input
        if !self.dialog_open() {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return Vec::new();
                }
                KeyCode::Char('1') => return self.go_to(Route::Dashboard),
                KeyCode::Char('2') => return self.go_to(Route::Projects),
                KeyCode::Char('3') => return self.go_to(Route::Tasks),
                KeyCode::Char('4') => return self.go_to(Route::Users),
                KeyCode::Tab => {
                    let routes = Route::all();
                    let i = routes
                        .iter()
                        .position(|r| *r == self.route)
                        .unwrap_or(0);
                    let next = routes[(i + 1) % routes.len()];
                    return self.go_to(next);
                }
                _ => {}
            }
        }

        match self.route {
            Route::Tasks => self.tasks_page.handle_key(key),
            Route::Users => self.users_page.handle_key(key),
            _ => Vec::new(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

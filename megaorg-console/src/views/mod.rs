/// Rendering
///
/// Pure drawing over the controller state. Nothing in here mutates pages
/// or dispatches commands; the widgets read whatever the controllers hold
/// and the event loop redraws after every event.

pub mod dialog;
pub mod layout;
pub mod task_list;
pub mod user_list;

use ratatui::Frame;

use crate::app::{App, Route};

pub fn draw(f: &mut Frame, app: &App) {
    let content = layout::shell(f, app);
    match app.route {
        Route::Dashboard => layout::dashboard(f, content),
        Route::Projects => layout::projects(f, content),
        Route::Tasks => task_list::draw(f, content, &app.tasks_page),
        Route::Users => user_list::draw(f, content, &app.users_page),
    }
}

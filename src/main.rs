#![windows_subsystem = "windows"]

mod app;
mod i18n;
mod state;
mod task;
mod ui;

use iced::window;
use uuid::Uuid;

use task::Task;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    // Initialize i18n by accessing the lazy static
    std::sync::LazyLock::force(&i18n::LANGUAGE_LOADER);

    iced::application(app::Todos::title, app::Todos::update, app::Todos::view)
        .subscription(app::Todos::subscription)
        .window(window::Settings {
            size: (500.0, 800.0).into(),
            min_size: Some((500.0, 600.0).into()),
            ..window::Settings::default()
        })
        .run_with(|| app::Todos::new(initial_tasks()))
}

/// The startup task list. There is no persistence; whatever is listed here
/// is the whole session's starting point.
fn initial_tasks() -> Vec<Task> {
    [("Eat", true), ("Sleep", false), ("Repeat", false)]
        .into_iter()
        .map(|(name, completed)| Task::from_parts(Uuid::new_v4(), name.to_string(), completed))
        .collect()
}

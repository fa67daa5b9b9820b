pub mod action;
pub mod filter;

use uuid::Uuid;

use crate::i18n::Language;
use crate::task::Task;
pub use action::Action;
pub use filter::Filter;

/// The authoritative application state: the ordered task list plus the two
/// view selectors. `apply` never mutates; it builds the next snapshot and
/// leaves the previous one untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub tasks: Vec<Task>,
    pub filter: Filter,
    pub language: Language,
}

impl State {
    pub fn new(tasks: Vec<Task>) -> Self {
        State {
            tasks,
            ..State::default()
        }
    }

    /// The single update function. Absent ids are silently ignored; the list
    /// order only ever changes by appending or removing.
    pub fn apply(&self, action: Action) -> State {
        match action {
            Action::AddTask(name) => self.add_task(name),
            Action::ToggleTask(id) => self.toggle_task(id),
            Action::EditTask(id, name) => self.edit_task(id, name),
            Action::DeleteTask(id) => self.delete_task(id),
            Action::SetFilter(filter) => State {
                filter,
                ..self.clone()
            },
            Action::SetLanguage(language) => State {
                language,
                ..self.clone()
            },
        }
    }

    // Rejects names that trim to nothing, but stores accepted names verbatim.
    fn add_task(&self, name: String) -> State {
        if name.trim().is_empty() {
            return self.clone();
        }

        let mut tasks = self.tasks.clone();
        tasks.push(Task::new(name));

        State {
            tasks,
            ..self.clone()
        }
    }

    fn toggle_task(&self, id: Uuid) -> State {
        self.map_task(id, |task| {
            let completed = !task.completed();
            task.with_completed(completed)
        })
    }

    // Renaming is permissive: the new name is stored untrimmed and may be
    // empty.
    fn edit_task(&self, id: Uuid, name: String) -> State {
        self.map_task(id, move |task| task.with_name(name.clone()))
    }

    fn delete_task(&self, id: Uuid) -> State {
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();

        State {
            tasks,
            ..self.clone()
        }
    }

    fn map_task(&self, id: Uuid, f: impl Fn(Task) -> Task) -> State {
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id() == id {
                    f(task.clone())
                } else {
                    task.clone()
                }
            })
            .collect();

        State {
            tasks,
            ..self.clone()
        }
    }
}

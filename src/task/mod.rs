pub mod view;

use iced::Element;
use uuid::Uuid;

/// A single user-entered item. Identity is the `id`; the name is free text
/// and only validated at creation time by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: Uuid,
    name: String,
    completed: bool,
}

#[derive(Debug, Clone)]
pub enum TaskMessage {
    Completed(bool),
    Edit,
    NameEdited(String),
    FinishEdition,
    Delete,
}

impl Task {
    pub fn new(name: String) -> Self {
        Task {
            id: Uuid::new_v4(),
            name,
            completed: false,
        }
    }

    pub fn from_parts(id: Uuid, name: String, completed: bool) -> Self {
        Task {
            id,
            name,
            completed,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn with_completed(self, completed: bool) -> Self {
        Task { completed, ..self }
    }

    pub fn with_name(self, name: String) -> Self {
        Task { name, ..self }
    }

    pub fn text_input_id(id: Uuid) -> iced::widget::text_input::Id {
        iced::widget::text_input::Id::new(format!("task-{id}"))
    }

    pub fn view(&self, editing: bool) -> Element<'_, TaskMessage> {
        view::task_view(self, editing)
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn new_tasks_start_uncompleted_with_distinct_ids() {
        let first = Task::new("Eat".to_string());
        let second = Task::new("Eat".to_string());

        assert!(!first.completed());
        assert!(!second.completed());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn with_completed_replaces_only_the_flag() {
        let task = Task::new("Sleep".to_string());
        let id = task.id();

        let done = task.with_completed(true);

        assert!(done.completed());
        assert_eq!(done.id(), id);
        assert_eq!(done.name(), "Sleep");
    }
}

use iced::keyboard::{self, key};
use iced::widget::{
    column, container, keyed_column, mouse_area, row, scrollable, text, text_input,
};
use iced::{window, Element, Fill, Subscription, Task as Command, Theme};
use uuid::Uuid;

use crate::i18n::{translate, Language};
use crate::state::{Action, Filter, State};
use crate::task::{Task, TaskMessage};
use crate::ui::{controls::view_controls, icons::plus_icon, styles::subtle};

/// The iced shell around the task-list state machine: owns the current
/// snapshot plus view-local state that never enters the reducer.
#[derive(Debug)]
pub struct Todos {
    state: State,
    input_value: String,
    input_hovered: bool,
    editing: Option<Uuid>,
    prev_task_count: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    InputHovered,
    InputUnhovered,
    CreateTask,
    FilterChanged(Filter),
    LanguageChanged(Language),
    TaskMessage(Uuid, TaskMessage),
    TabPressed { shift: bool },
    ToggleFullscreen(window::Mode),
}

impl Todos {
    const TASK_LIST_ID: &'static str = "tasks";

    pub fn new(tasks: Vec<Task>) -> (Self, Command<Message>) {
        let state = State::new(tasks);
        let prev_task_count = state.tasks.len();

        (
            Todos {
                state,
                input_value: String::new(),
                input_hovered: false,
                editing: None,
                prev_task_count,
            },
            text_input::focus(Self::new_task_input_id()),
        )
    }

    fn new_task_input_id() -> text_input::Id {
        text_input::Id::new("new-task")
    }

    pub fn title(&self) -> String {
        translate("app-title", self.state.language)
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input_value = value;
                Command::none()
            }
            Message::InputHovered => {
                self.input_hovered = true;
                Command::none()
            }
            Message::InputUnhovered => {
                self.input_hovered = false;
                Command::none()
            }
            Message::CreateTask => {
                // A rejected submit keeps the draft in the input.
                if self.input_value.trim().is_empty() {
                    return Command::none();
                }

                let name = std::mem::take(&mut self.input_value);
                self.dispatch(Action::AddTask(name))
            }
            Message::FilterChanged(filter) => self.dispatch(Action::SetFilter(filter)),
            Message::LanguageChanged(language) => {
                crate::i18n::update_language(language);
                self.dispatch(Action::SetLanguage(language))
            }
            Message::TaskMessage(id, TaskMessage::Edit) => {
                self.editing = Some(id);

                let input = Task::text_input_id(id);
                Command::batch(vec![
                    text_input::focus(input.clone()),
                    text_input::select_all(input),
                ])
            }
            Message::TaskMessage(id, TaskMessage::FinishEdition) => {
                let has_name = self
                    .state
                    .tasks
                    .iter()
                    .any(|task| task.id() == id && !task.name().is_empty());

                if has_name {
                    self.editing = None;
                }

                Command::none()
            }
            Message::TaskMessage(id, TaskMessage::Completed(_)) => {
                self.dispatch(Action::ToggleTask(id))
            }
            Message::TaskMessage(id, TaskMessage::NameEdited(name)) => {
                self.dispatch(Action::EditTask(id, name))
            }
            Message::TaskMessage(id, TaskMessage::Delete) => {
                if self.editing == Some(id) {
                    self.editing = None;
                }

                self.dispatch(Action::DeleteTask(id))
            }
            Message::TabPressed { shift } => {
                if shift {
                    iced::widget::focus_previous()
                } else {
                    iced::widget::focus_next()
                }
            }
            Message::ToggleFullscreen(mode) => {
                window::get_latest().and_then(move |window| window::change_mode(window, mode))
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Command<Message> {
        tracing::debug!(?action, "applying action");
        self.state = self.state.apply(action);
        self.after_commit()
    }

    // Runs after every committed action. When the total task count shrank,
    // the list viewport snaps back to its start, right under the heading;
    // the operation reaches the widget tree after the next layout.
    fn after_commit(&mut self) -> Command<Message> {
        let total = self.state.tasks.len();
        let shrunk = total < self.prev_task_count;
        self.prev_task_count = total;

        if shrunk {
            scrollable::snap_to(
                scrollable::Id::new(Self::TASK_LIST_ID),
                scrollable::RelativeOffset::START,
            )
        } else {
            Command::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let state = &self.state;

        let title = text(translate("app-title", state.language)).size(32);

        let visible_tasks = state.filter.apply(&state.tasks).count();
        let controls = view_controls(visible_tasks, state.filter, state.language);
        let tasks_view = self.tasks_view();

        let input = self.create_input(&self.input_value, state.language);
        let input_container = self.create_input_container(input, self.input_hovered);
        let footer_input = mouse_area(input_container)
            .on_enter(Message::InputHovered)
            .on_exit(Message::InputUnhovered);

        let content = column![title, controls, tasks_view, footer_input]
            .spacing(20)
            .height(Fill);

        container(content)
            .center_x(Fill)
            .padding(iced::Padding {
                top: 24.0,
                left: 16.0,
                bottom: 32.0,
                right: 16.0,
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| {
            let keyboard::Key::Named(key) = key else {
                return None;
            };

            match (key, modifiers) {
                (key::Named::Tab, _) => Some(Message::TabPressed {
                    shift: modifiers.shift(),
                }),
                (key::Named::ArrowUp, keyboard::Modifiers::SHIFT) => {
                    Some(Message::ToggleFullscreen(window::Mode::Fullscreen))
                }
                (key::Named::ArrowDown, keyboard::Modifiers::SHIFT) => {
                    Some(Message::ToggleFullscreen(window::Mode::Windowed))
                }
                _ => None,
            }
        })
    }

    fn tasks_view(&self) -> Element<'_, Message> {
        let state = &self.state;

        if state.filter.apply(&state.tasks).count() > 0 {
            let tasks_column = keyed_column(state.filter.apply(&state.tasks).map(|task| {
                let id = task.id();
                let editing = self.editing == Some(id);

                (
                    id,
                    task.view(editing)
                        .map(move |message| Message::TaskMessage(id, message)),
                )
            }))
            .spacing(10);

            scrollable(tasks_column)
                .id(scrollable::Id::new(Self::TASK_LIST_ID))
                .height(Fill)
                .into()
        } else {
            let key = match state.filter {
                Filter::All => "empty-no-tasks",
                Filter::Active => "empty-all-done",
                Filter::Completed => "empty-no-completed",
            };

            self.empty_message(key, state.language)
        }
    }

    fn empty_message<'a>(&'a self, key: &str, language: Language) -> Element<'a, Message> {
        iced::widget::center(
            iced::widget::text(translate(key, language))
                .width(Fill)
                .size(25)
                .align_x(iced::Center)
                .style(subtle),
        )
        .height(Fill)
        .into()
    }

    fn create_input(&self, input_value: &str, language: Language) -> Element<'_, Message> {
        text_input(&translate("add-task-placeholder", language), input_value)
            .id(Self::new_task_input_id())
            .on_input(Message::InputChanged)
            .on_submit(Message::CreateTask)
            .padding(iced::Padding {
                top: 8.0,
                left: 0.0,
                bottom: 8.0,
                right: 0.0,
            })
            .size(16)
            .style(|theme: &Theme, status| {
                let default_style = text_input::default(theme, status);

                text_input::Style {
                    background: iced::Color::TRANSPARENT.into(),
                    border: iced::Border {
                        color: iced::Color::TRANSPARENT,
                        width: 0.0,
                        radius: 0.0.into(),
                    },
                    icon: default_style.icon,
                    placeholder: default_style.placeholder,
                    value: default_style.value,
                    selection: default_style.selection,
                }
            })
            .width(Fill)
            .into()
    }

    fn create_input_container<'a>(
        &self,
        input: Element<'a, Message>,
        is_hovered: bool,
    ) -> Element<'a, Message> {
        let input_row = row![plus_icon(), input].spacing(8).align_y(iced::Center);

        container(input_row)
            .padding(iced::Padding {
                top: 8.0,
                left: 16.0,
                bottom: 8.0,
                right: 4.0,
            })
            .style(move |theme| {
                let background_color = if is_hovered {
                    theme.extended_palette().background.strong.color
                } else {
                    theme.extended_palette().background.weak.color
                };

                container::Style {
                    background: Some(background_color.into()),
                    border: iced::Border {
                        color: background_color,
                        width: 1.0,
                        radius: 12.0.into(),
                    },
                    ..Default::default()
                }
            })
            .width(Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{Message, Todos};
    use crate::state::Filter;
    use crate::task::{Task, TaskMessage};

    fn todos_with(tasks: &[(&str, bool)]) -> Todos {
        let tasks = tasks
            .iter()
            .map(|(name, completed)| {
                Task::from_parts(Uuid::new_v4(), name.to_string(), *completed)
            })
            .collect();

        Todos::new(tasks).0
    }

    #[test]
    fn submit_rejects_blank_drafts_and_keeps_them() {
        let mut todos = todos_with(&[]);

        todos.input_value = "   ".to_string();
        let _ = todos.update(Message::CreateTask);

        assert!(todos.state.tasks.is_empty());
        assert_eq!(todos.input_value, "   ");
    }

    #[test]
    fn submit_appends_and_clears_the_draft() {
        let mut todos = todos_with(&[]);

        todos.input_value = " Walk dog".to_string();
        let _ = todos.update(Message::CreateTask);

        assert_eq!(todos.state.tasks.len(), 1);
        assert_eq!(todos.state.tasks[0].name(), " Walk dog");
        assert!(todos.input_value.is_empty());
    }

    #[test]
    fn deletion_lowers_the_tracked_count() {
        let mut todos = todos_with(&[("Eat", false), ("Sleep", false)]);
        assert_eq!(todos.prev_task_count, 2);

        let id = todos.state.tasks[0].id();
        let _ = todos.update(Message::TaskMessage(id, TaskMessage::Delete));

        assert_eq!(todos.state.tasks.len(), 1);
        assert_eq!(todos.prev_task_count, 1);
    }

    #[test]
    fn completion_does_not_shrink_the_list() {
        let mut todos = todos_with(&[("Eat", false)]);

        let id = todos.state.tasks[0].id();
        let _ = todos.update(Message::TaskMessage(id, TaskMessage::Completed(true)));

        assert!(todos.state.tasks[0].completed());
        assert_eq!(todos.prev_task_count, 1);
    }

    #[test]
    fn finishing_an_edit_requires_a_name() {
        let mut todos = todos_with(&[("Eat", false)]);
        let id = todos.state.tasks[0].id();

        let _ = todos.update(Message::TaskMessage(id, TaskMessage::Edit));
        assert_eq!(todos.editing, Some(id));

        let _ = todos.update(Message::TaskMessage(id, TaskMessage::NameEdited(String::new())));
        let _ = todos.update(Message::TaskMessage(id, TaskMessage::FinishEdition));
        assert_eq!(todos.editing, Some(id));

        let _ = todos.update(Message::TaskMessage(
            id,
            TaskMessage::NameEdited("Sleep in".to_string()),
        ));
        let _ = todos.update(Message::TaskMessage(id, TaskMessage::FinishEdition));
        assert_eq!(todos.editing, None);
        assert_eq!(todos.state.tasks[0].name(), "Sleep in");
    }

    #[test]
    fn deleting_the_edited_row_leaves_edit_mode() {
        let mut todos = todos_with(&[("Eat", false)]);
        let id = todos.state.tasks[0].id();

        let _ = todos.update(Message::TaskMessage(id, TaskMessage::Edit));
        let _ = todos.update(Message::TaskMessage(id, TaskMessage::Delete));

        assert!(todos.state.tasks.is_empty());
        assert_eq!(todos.editing, None);
    }

    #[test]
    fn filter_changes_touch_no_tasks() {
        let mut todos = todos_with(&[("Eat", true), ("Sleep", false)]);
        let before = todos.state.tasks.clone();

        let _ = todos.update(Message::FilterChanged(Filter::Completed));

        assert_eq!(todos.state.filter, Filter::Completed);
        assert_eq!(todos.state.tasks, before);
        assert_eq!(todos.prev_task_count, 2);
    }
}

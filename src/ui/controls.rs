use iced::widget::{button, row, text};
use iced::{Center, Element, Fill};

use crate::i18n::{translate, translate_tasks_remaining, Language};
use crate::state::Filter;

/// The heading row: the localized "N remaining" phrase for the currently
/// visible tasks, one button per filter, and the language toggle.
pub fn view_controls<'a>(
    visible_tasks: usize,
    current_filter: Filter,
    language: Language,
) -> Element<'a, crate::app::Message> {
    let filter_button = |key, filter, current_filter| {
        let label = text(translate(key, language));

        let button = button(label).style(if filter == current_filter {
            button::primary
        } else {
            button::text
        });

        button
            .on_press(crate::app::Message::FilterChanged(filter))
            .padding(iced::Padding {
                top: 5.0,
                left: 16.0,
                bottom: 5.0,
                right: 16.0,
            })
    };

    row![
        text(translate_tasks_remaining(visible_tasks, language)).width(Fill),
        row![
            filter_button("filter-all", Filter::All, current_filter),
            filter_button("filter-active", Filter::Active, current_filter),
            filter_button("filter-completed", Filter::Completed, current_filter),
            button(text(translate("language-toggle", language)).size(12))
                .on_press(crate::app::Message::LanguageChanged(language.toggled()))
                .padding(iced::Padding {
                    top: 5.0,
                    left: 8.0,
                    bottom: 5.0,
                    right: 8.0,
                })
                .style(button::text),
        ]
        .spacing(10)
        .align_y(Center)
    ]
    .spacing(20)
    .align_y(Center)
    .into()
}

use uuid::Uuid;

use super::Filter;
use crate::i18n::Language;

/// Every mutation the application can apply, as one tagged variant routed
/// through `State::apply`.
#[derive(Debug, Clone)]
pub enum Action {
    AddTask(String),
    ToggleTask(Uuid),
    EditTask(Uuid, String),
    DeleteTask(Uuid),
    SetFilter(Filter),
    SetLanguage(Language),
}

use i18n_embed::unic_langid::LanguageIdentifier;
use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    DesktopLanguageRequester,
};
use i18n_embed_fl::fl;
use rust_embed::RustEmbed;
use std::sync::LazyLock;

#[derive(RustEmbed)]
#[folder = "i18n"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader = fluent_language_loader!();
    let requested_languages = DesktopLanguageRequester::requested_languages();
    let _result = i18n_embed::select(&loader, &Localizations, &requested_languages);
    // Fluent wraps placeables in Unicode isolation marks by default; rendered
    // strings here must stay plain text. set_use_isolating has no effect until
    // the languages are loaded (select), so it must come after it.
    loader.set_use_isolating(false);
    loader
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Uzbek,
}

impl Default for Language {
    fn default() -> Self {
        let requested_languages = DesktopLanguageRequester::requested_languages();
        if requested_languages
            .iter()
            .any(|lang| lang.language.as_str() == "uz")
        {
            Language::Uzbek
        } else {
            Language::English
        }
    }
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Uzbek,
            Language::Uzbek => Language::English,
        }
    }

    fn lang_id(self) -> LanguageIdentifier {
        match self {
            Language::English => "en".parse::<LanguageIdentifier>().unwrap(),
            Language::Uzbek => "uz".parse::<LanguageIdentifier>().unwrap(),
        }
    }
}

pub fn translate(key: &str, language: Language) -> String {
    // The toggle button names the language it switches to.
    if key == "language-toggle" {
        return match language {
            Language::English => "UZB".to_string(),
            Language::Uzbek => "ENG".to_string(),
        };
    }

    match key {
        "app-title" => fl!(LANGUAGE_LOADER, "app-title"),
        "add-task-placeholder" => fl!(LANGUAGE_LOADER, "add-task-placeholder"),
        "describe-task-placeholder" => fl!(LANGUAGE_LOADER, "describe-task-placeholder"),
        "filter-all" => fl!(LANGUAGE_LOADER, "filter-all"),
        "filter-active" => fl!(LANGUAGE_LOADER, "filter-active"),
        "filter-completed" => fl!(LANGUAGE_LOADER, "filter-completed"),
        "empty-no-tasks" => fl!(LANGUAGE_LOADER, "empty-no-tasks"),
        "empty-all-done" => fl!(LANGUAGE_LOADER, "empty-all-done"),
        "empty-no-completed" => fl!(LANGUAGE_LOADER, "empty-no-completed"),
        _ => key.to_string(),
    }
}

// Only the English message varies with the count; the Uzbek one always uses
// the same word.
pub fn translate_tasks_remaining(count: usize, _language: Language) -> String {
    fl!(LANGUAGE_LOADER, "tasks-remaining", count = count)
}

pub fn update_language(language: Language) {
    let _result = i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &[language.lang_id()]);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test selects its language on a private loader so tests stay
    // independent of the process-wide one.
    fn loader_for(language: Language) -> FluentLanguageLoader {
        let loader = fluent_language_loader!();
        let _result = i18n_embed::select(&loader, &Localizations, &[language.lang_id()]);
        loader.set_use_isolating(false);
        loader
    }

    #[test]
    fn english_heading_pluralizes() {
        let loader = loader_for(Language::English);

        assert_eq!(
            fl!(loader, "tasks-remaining", count = 1usize),
            "1 task remaining"
        );
        assert_eq!(
            fl!(loader, "tasks-remaining", count = 3usize),
            "3 tasks remaining"
        );
        assert_eq!(
            fl!(loader, "tasks-remaining", count = 0usize),
            "0 tasks remaining"
        );
    }

    #[test]
    fn uzbek_heading_ignores_the_count_category() {
        let loader = loader_for(Language::Uzbek);

        assert_eq!(
            fl!(loader, "tasks-remaining", count = 1usize),
            "1 ta vazifa qoldi"
        );
        assert_eq!(
            fl!(loader, "tasks-remaining", count = 3usize),
            "3 ta vazifa qoldi"
        );
    }

    #[test]
    fn filter_labels_follow_the_language() {
        let english = loader_for(Language::English);
        assert_eq!(fl!(english, "filter-all"), "All");
        assert_eq!(fl!(english, "filter-active"), "Active");
        assert_eq!(fl!(english, "filter-completed"), "Completed");

        let uzbek = loader_for(Language::Uzbek);
        assert_eq!(fl!(uzbek, "filter-all"), "Hammasi");
        assert_eq!(fl!(uzbek, "filter-active"), "Aktiv");
        assert_eq!(fl!(uzbek, "filter-completed"), "Yakunlangan");
    }

    #[test]
    fn title_is_shared_between_languages() {
        assert_eq!(fl!(loader_for(Language::English), "app-title"), "TodoMatic");
        assert_eq!(fl!(loader_for(Language::Uzbek), "app-title"), "TodoMatic");
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(translate("language-toggle", Language::English), "UZB");
        assert_eq!(translate("language-toggle", Language::Uzbek), "ENG");
    }

    #[test]
    fn language_toggle_round_trips() {
        assert_eq!(Language::English.toggled(), Language::Uzbek);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
    }
}

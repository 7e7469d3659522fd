//! Rule editing messages in the user's language.
//!
//! Fluent resources are embedded in the crate. [`DEFAULT_LANGUAGE`] is active
//! until a caller picks another language for the whole process with
//! [`select_localizations`] or for one thread with [`ScopedLocalization`].

use std::cell::RefCell;
use std::sync::LazyLock;

use fluent::FluentArgs;
use i18n_embed::fluent::{FluentLanguageLoader, fluent_language_loader};
use i18n_embed::{I18nEmbedError, LanguageLoader};
use rust_embed::RustEmbed;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, langid};

/// Language shown before any selection and used as the fallback.
pub const DEFAULT_LANGUAGE: LanguageIdentifier = langid!("en-US");

/// Fluent resources embedded in the crate, one directory per language.
///
/// # Examples
/// ```
/// # use webaccess_rules::localization::Localizations;
/// # use i18n_embed::fluent::fluent_language_loader;
/// # use unic_langid::langid;
/// let loader = fluent_language_loader!();
/// let selected = i18n_embed::select(&loader, &Localizations, &[langid!("fr")])
///     .unwrap_or_else(|error| panic!("French resources should load: {error}"));
/// assert!(selected.contains(&langid!("fr")));
/// ```
#[derive(RustEmbed)]
#[folder = "i18n"]
pub struct Localizations;

static PROCESS_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    loader_for(&[DEFAULT_LANGUAGE])
        .unwrap_or_else(|error| panic!("embedded {DEFAULT_LANGUAGE} messages failed to load: {error}"))
});

thread_local! {
    static THREAD_LOADER: RefCell<Option<FluentLanguageLoader>> = const { RefCell::new(None) };
}

/// Failure to load the embedded messages.
#[derive(Debug, Error)]
pub enum LocalizationError {
    /// Reading or selecting Fluent resources failed.
    #[error("failed to load rule editing messages: {0}")]
    Loader(#[from] I18nEmbedError),
}

/// Keeps a thread-local language selection active until dropped.
#[must_use]
pub struct ScopedLocalization {
    previous: Option<FluentLanguageLoader>,
}

impl ScopedLocalization {
    /// Show messages in `requested` on this thread only.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizationError::Loader`] when the embedded resources
    /// cannot be read.
    pub fn new(requested: &[LanguageIdentifier]) -> Result<Self, LocalizationError> {
        let loader = loader_for(requested)?;
        let previous = THREAD_LOADER.with(|cell| cell.replace(Some(loader)));
        Ok(Self { previous })
    }
}

impl Drop for ScopedLocalization {
    fn drop(&mut self) {
        let previous = self.previous.take();
        THREAD_LOADER.with(|cell| *cell.borrow_mut() = previous);
    }
}

fn loader_for(requested: &[LanguageIdentifier]) -> Result<FluentLanguageLoader, I18nEmbedError> {
    let loader = fluent_language_loader!();
    i18n_embed::select(&loader, &Localizations, requested)?;
    Ok(loader)
}

/// Run `action` on this thread's scoped loader, else on the process loader.
fn with_active<R>(action: impl FnOnce(&FluentLanguageLoader) -> R) -> R {
    THREAD_LOADER.with(|cell| match cell.borrow().as_ref() {
        Some(loader) => action(loader),
        None => action(&PROCESS_LOADER),
    })
}

/// Switch the active loader to the best match for `requested`.
///
/// Unknown languages fall back to [`DEFAULT_LANGUAGE`]. The returned list
/// holds the languages actually loaded.
///
/// # Errors
///
/// Returns [`LocalizationError::Loader`] when resource selection fails.
pub fn select_localizations(
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, LocalizationError> {
    Ok(with_active(|loader| {
        i18n_embed::select(loader, &Localizations, requested)
    })?)
}

/// Languages of the active loader, most preferred first.
#[must_use]
pub fn current_languages() -> Vec<LanguageIdentifier> {
    with_active(FluentLanguageLoader::current_languages)
}

/// Languages with embedded messages.
///
/// # Errors
///
/// Returns [`LocalizationError::Loader`] when the embedded resources cannot
/// be listed.
pub fn available_languages() -> Result<Vec<LanguageIdentifier>, LocalizationError> {
    Ok(PROCESS_LOADER.available_languages(&Localizations)?)
}

/// Whether messages exist for the base language of `language`.
///
/// # Errors
///
/// Propagates failures from [`available_languages`].
///
/// # Examples
/// ```
/// # use webaccess_rules::localization::supports;
/// # use unic_langid::langid;
/// assert!(supports(&langid!("fr-CA")).unwrap_or_default());
/// assert!(!supports(&langid!("de")).unwrap_or_default());
/// ```
pub fn supports(language: &LanguageIdentifier) -> Result<bool, LocalizationError> {
    Ok(available_languages()?
        .iter()
        .any(|available| available.language == language.language))
}

/// Message `id` in the active language.
///
/// # Examples
/// ```
/// # use webaccess_rules::localization;
/// assert_eq!(localization::message("summary-general"), "General");
/// ```
#[must_use]
pub fn message(id: &str) -> String {
    with_active(|loader| loader.get(id))
}

/// Message `id` with the Fluent arguments set by `configure`.
///
/// # Examples
/// ```
/// # use webaccess_rules::localization;
/// let rendered = localization::message_with_args("rule-error-duplicate-name", |args| {
///     args.set("name", "Search field".to_string());
/// });
/// assert!(rendered.contains("Search field"));
/// ```
#[must_use]
pub fn message_with_args<F>(id: &str, configure: F) -> String
where
    F: FnOnce(&mut FluentArgs<'static>),
{
    let mut args = FluentArgs::new();
    configure(&mut args);
    with_active(|loader| loader.get_args_fluent(id, Some(&args)))
}

const DIRECTIONAL_ISOLATES: [char; 4] = ['\u{2066}', '\u{2067}', '\u{2068}', '\u{2069}'];

/// Drop the directional isolates Fluent wraps around interpolated values.
///
/// # Examples
/// ```
/// # use webaccess_rules::localization::strip_directional_isolates;
/// assert_eq!(strip_directional_isolates("\u{2068}link\u{2069}"), "link");
/// ```
#[must_use]
pub fn strip_directional_isolates(text: &str) -> String {
    text.replace(DIRECTIONAL_ISOLATES, "")
}

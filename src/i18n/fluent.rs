// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translation lookup.
//!
//! Bundles are built from the `.ftl` files embedded at compile time. When an
//! external directory is given (`--i18n-dir`), its files are loaded as well and
//! their messages take precedence over the embedded ones.

use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Prefix under which category keys are translated (`category-nature`).
pub const CATEGORY_PREFIX: &str = "category-";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the bundles and resolves the starting locale.
    ///
    /// Resolution order: `cli_lang`, `[general] language`, the OS locale,
    /// then [`DEFAULT_LOCALE`]. Unparseable `.ftl` files are skipped.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: HashMap<LanguageIdentifier, Vec<String>> = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources
                    .entry(locale)
                    .or_default()
                    .push(String::from_utf8_lossy(content.data.as_ref()).into_owned());
            }
        }

        if let Some(dir) = i18n_dir {
            load_external(Path::new(&dir), &mut sources);
        }

        let mut bundles = HashMap::new();
        for (locale, contents) in sources {
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            for content in contents {
                let resource = match FluentResource::try_new(content) {
                    Ok(resource) => resource,
                    // Keep the entries that did parse
                    Err((resource, _errors)) => resource,
                };
                // Later sources (external files) override embedded messages
                bundle.add_resource_overriding(resource);
            }
            bundles.insert(locale, bundle);
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches locale. Unknown locales are ignored; returns whether it changed.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) && self.current_locale != locale {
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Translates `key`, or returns `MISSING: key`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Translates `key` with Fluent variables, or returns `MISSING: key`.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            // Integers stay numeric so plural selectors work
            match value.parse::<i64>() {
                Ok(number) => fluent_args.set(*name, number),
                Err(_) => fluent_args.set(*name, *value),
            }
        }
        self.format(key, Some(&fluent_args))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Translates `key`, returning `None` when the message does not exist.
    #[must_use]
    pub fn translate(&self, key: &str) -> Option<String> {
        self.format(key, None)
    }

    /// Translation of a category key (`category-<key>`), if one exists.
    #[must_use]
    pub fn translate_category(&self, key: &str) -> Option<String> {
        self.translate(&format!("{CATEGORY_PREFIX}{key}"))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        errors.is_empty().then(|| value.into_owned())
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn load_external(dir: &Path, sources: &mut HashMap<LanguageIdentifier, Vec<String>>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(locale) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_filename)
        else {
            continue;
        };
        if let Ok(content) = fs::read_to_string(&path) {
            sources.entry(locale).or_default().push(content);
        }
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang.as_deref(), config_lang, os_locale.as_deref()];
    candidates.into_iter().flatten().find_map(|raw| {
        let lang = raw.parse::<LanguageIdentifier>().ok()?;
        if available.contains(&lang) {
            return Some(lang);
        }
        // "ta-IN" from the OS still selects the "ta" bundle
        available
            .iter()
            .find(|candidate| candidate.language == lang.language && candidate.region.is_none())
            .cloned()
    })
}

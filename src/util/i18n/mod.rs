//! Message catalogue for log output
//!
//! Every log line is looked up by [`MSG`] id. English text is built in;
//! additional languages are loaded from `locales/<lang>.json` files, which
//! map message keys to templates using `{0}`, `{1}`, ... placeholders.
//!
//! # Configuration
//!
//! Language priority (high → low):
//! 1. Environment variable (`TIMEWARP_LANG`)
//! 2. User-level config (`~/.config/timewarp/config.toml [i18n]`)
//! 3. English
//!
//! # Usage
//!
//! ```rust
//! use timewarp::util::i18n::{t, MSG};
//!
//! println!("{}", t(MSG::FileRead, "en", &[&"demo.tw"]));
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::OnceLock;

use once_cell::sync::Lazy;

pub use crate::util::config::I18nConfig;

/// Environment variable overriding the configured language
pub const LANG_ENV: &str = "TIMEWARP_LANG";

/// Cache for the i18n section of the user config
static CONFIG: OnceLock<I18nConfig> = OnceLock::new();

/// The i18n section of the user config, read once
pub fn get_i18n_config() -> &'static I18nConfig {
    CONFIG.get_or_init(|| {
        crate::util::config::load_user_config()
            .unwrap_or_default()
            .i18n
    })
}

/// Translation table loaded from JSON
type TranslationMap = HashMap<String, String>;

/// Load translations from `locales/<lang>.json`, empty when absent or malformed
fn load_translation_file(lang: &str) -> TranslationMap {
    let path = format!("locales/{}.json", lang);
    match std::fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("failed to parse {}: {}", path, e);
            HashMap::new()
        }),
        Err(_) => HashMap::new(),
    }
}

/// Translations found on disk, keyed by language code
static TRANSLATIONS: Lazy<HashMap<String, TranslationMap>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let locales_dir = std::path::Path::new("locales");
    if let Ok(entries) = std::fs::read_dir(locales_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    let translations = load_translation_file(stem);
                    if !translations.is_empty() {
                        map.insert(stem.to_string(), translations);
                    }
                }
            }
        }
    }
    map
});

/// Translate `id` into `lang`, substituting `args` for `{0}`, `{1}`, ...
pub fn t(
    id: MSG,
    lang: &str,
    args: &[&dyn Display],
) -> String {
    let template = TRANSLATIONS
        .get(lang)
        .and_then(|m| m.get(id.key()))
        .map(String::as_str)
        .unwrap_or_else(|| id.english());

    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), &arg.to_string());
    }
    result
}

/// Translate using the current language
#[inline]
pub fn t_cur(
    id: MSG,
    args: &[&dyn Display],
) -> String {
    t(id, &current_lang(), args)
}

/// Current language for log messages
///
/// Priority: `TIMEWARP_LANG` > `i18n.lang` > `i18n.fallback` > `en`
pub fn current_lang() -> String {
    if let Ok(env_lang) = std::env::var(LANG_ENV) {
        if is_known(&env_lang) {
            return env_lang;
        }
    }
    let config = get_i18n_config();
    if is_known(&config.lang) {
        return config.lang.clone();
    }
    if is_known(&config.fallback) {
        return config.fallback.clone();
    }
    "en".to_string()
}

fn is_known(lang: &str) -> bool {
    lang == "en" || TRANSLATIONS.contains_key(lang)
}

/// Message ids for log output
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum MSG {
    // Router
    InputReceived,
    ControlWord,
    ProgramLineStored,
    ProgramLineRejected,
    ImmediateStatement,
    RunProgram,
    ExecutorFailed,
    SessionExit,

    // Store
    StoreUpsert,
    StoreCleared,

    // Language
    Classified,
    Validated,

    // Files
    FileRead,
    FileWritten,
    ProgramLoaded,
    OpaqueLoaded,

    // Session
    SessionStart,
    SessionReset,
    ConfigLoaded,
    BatchRun,
}

impl MSG {
    /// Key used in locale files
    pub fn key(self) -> &'static str {
        match self {
            MSG::InputReceived => "input_received",
            MSG::ControlWord => "control_word",
            MSG::ProgramLineStored => "program_line_stored",
            MSG::ProgramLineRejected => "program_line_rejected",
            MSG::ImmediateStatement => "immediate_statement",
            MSG::RunProgram => "run_program",
            MSG::ExecutorFailed => "executor_failed",
            MSG::SessionExit => "session_exit",
            MSG::StoreUpsert => "store_upsert",
            MSG::StoreCleared => "store_cleared",
            MSG::Classified => "classified",
            MSG::Validated => "validated",
            MSG::FileRead => "file_read",
            MSG::FileWritten => "file_written",
            MSG::ProgramLoaded => "program_loaded",
            MSG::OpaqueLoaded => "opaque_loaded",
            MSG::SessionStart => "session_start",
            MSG::SessionReset => "session_reset",
            MSG::ConfigLoaded => "config_loaded",
            MSG::BatchRun => "batch_run",
        }
    }

    /// Built-in English template
    pub fn english(self) -> &'static str {
        match self {
            MSG::InputReceived => "input received: {0}",
            MSG::ControlWord => "control word: {0}",
            MSG::ProgramLineStored => "stored program line {0}",
            MSG::ProgramLineRejected => "rejected program line: {0}",
            MSG::ImmediateStatement => "immediate statement as {0}",
            MSG::RunProgram => "running stored program ({0} lines)",
            MSG::ExecutorFailed => "executor failed: {0}",
            MSG::SessionExit => "session exit requested",
            MSG::StoreUpsert => "upsert line {0}: {1}",
            MSG::StoreCleared => "program store cleared",
            MSG::Classified => "classified as {0} ({1})",
            MSG::Validated => "validated as {0}: {1} diagnostics",
            MSG::FileRead => "read file {0}",
            MSG::FileWritten => "wrote {1} lines to {0}",
            MSG::ProgramLoaded => "loaded program from {0} ({1} lines)",
            MSG::OpaqueLoaded => "{0} is not a program, displaying content",
            MSG::SessionStart => "session started",
            MSG::SessionReset => "session reset",
            MSG::ConfigLoaded => "configuration loaded from {0}",
            MSG::BatchRun => "batch run of {0} as {1}",
        }
    }
}

//! Structured logger matching the fixed wire format `[UIC] [LEVEL] message
//! {context}` on stderr. The level gating (`--verbose`/`--quiet`) and the
//! exact prefix are specified precisely enough that a hand-rolled leveled
//! logger fits better than pulling in a framework built for open-ended
//! spans and fields.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU8, Ordering};

use colored::Colorize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Warn,
    Error,
}

impl Level {
    fn rank(self) -> u8 {
        match self {
            Level::Debug => 0,
            Level::Warn => 1,
            Level::Error => 2,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

static MIN_LEVEL: AtomicU8 = AtomicU8::new(1); // Level::Warn by default

/// Set the minimum level that will be emitted, per `--verbose`/`--quiet`.
pub fn set_level(level: Level) {
    MIN_LEVEL.store(level.rank(), Ordering::Relaxed);
}

fn format_context(context: &BTreeMap<String, String>) -> String {
    if context.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = context.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!(" {{{}}}", pairs.join(", "))
}

fn colorize(level: Level, text: &str) -> String {
    match level {
        Level::Debug => text.dimmed().to_string(),
        Level::Warn => text.yellow().bold().to_string(),
        Level::Error => text.red().bold().to_string(),
    }
}

pub fn log(level: Level, message: &str, context: &BTreeMap<String, String>) {
    if level.rank() < MIN_LEVEL.load(Ordering::Relaxed) {
        return;
    }

    let label = colorize(level, &format!("[{}]", level.label()));
    let context_str = format_context(context);

    if level == Level::Debug {
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown-time".to_string());
        eprintln!("[UIC] {label} {timestamp} {message}{context_str}");
    } else {
        eprintln!("[UIC] {label} {message}{context_str}");
    }
}

pub fn warn(message: &str) {
    log(Level::Warn, message, &BTreeMap::new());
}

pub fn warn_with(message: &str, context: &BTreeMap<String, String>) {
    log(Level::Warn, message, context);
}

pub fn error_with(message: &str, context: &BTreeMap<String, String>) {
    log(Level::Error, message, context);
}

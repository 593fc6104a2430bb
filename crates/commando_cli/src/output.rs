//! Terminal output helpers: styled text for humans, structured JSON for machines.
//!
//! Uses `console` for colors (respects NO_COLOR, auto-disables when piped).

use std::sync::atomic::{AtomicBool, Ordering};

use console::style;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn to_json(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg {
        level,
        message,
        data,
    };
    serde_json::to_string(&msg).unwrap_or_else(|_| {
        format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}")
    })
}

// ── Public helpers ─────────────────────────────────────────────────

/// Result of a command. `text` is what a human sees; JSON mode emits `data`.
pub fn result(command: &str, text: &str, data: JsonValue) {
    if is_json() {
        println!("{}", to_json("result", command, Some(&data)));
    } else {
        println!("{text}");
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", to_json("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

/// Usage text shown after an error.
pub fn usage(text: &str) {
    if is_json() {
        eprintln!("{}", to_json("usage", text.trim_end(), None));
    } else {
        eprintln!("{}", style(text.trim_end()).dim());
    }
}

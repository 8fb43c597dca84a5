//! The flag-style menu grammar the backend consumes, e.g.
//!
//! ```text
//! --header LUNDI MARDI --custom-text-french "Bonjour" --custom-text-english "Hello"
//!   --content --day Lundi --day-content --is-meal --text "Poulet curry" --img PouletCurry
//! ```
//!
//! [`compose`] renders a [`MenuWeek`] into that grammar and [`parse`] reads
//! it back. Quoted strings survive as long as they contain no quote
//! characters; day names and image keys are single tokens.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};

/// The menu grid renders at most this many entries per day.
pub const MAX_ENTRIES_PER_DAY: usize = 2;

/// A full week of menu content as the backend understands it.
///
/// Field names follow the JSON the backend stores, which is why the
/// serde names differ from the flag grammar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuWeek {
    /// Column headers of the menu grid, one token each.
    #[serde(default)]
    pub header: Vec<String>,
    /// Free-form French intro for the newsletter.
    #[serde(rename = "text-custom-french", default)]
    pub french_note: String,
    /// Free-form English intro for the newsletter.
    #[serde(rename = "text-custom-english", default)]
    pub english_note: String,
    /// Days of the week, in display order.
    #[serde(rename = "content", default)]
    pub days: Vec<MenuDay>,
}

/// One day of the menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuDay {
    /// Day label such as "Lundi"; a single token in the wire grammar.
    pub day: String,
    #[serde(rename = "content", default)]
    pub entries: Vec<MenuEntry>,
}

/// One dish or notice inside a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Displayed text.
    #[serde(default)]
    pub text: String,
    /// Whether this entry is a meal, which drives logo lookup and the
    /// mailing list.
    #[serde(default)]
    pub is_meal: bool,
    /// Logo key of the meal, when one is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl MenuWeek {
    /// Cap every day at the entries the menu grid can display.
    ///
    /// Returns the trimmed week together with one warning per truncated
    /// day; the warnings are also logged.
    pub fn normalized(&self) -> (MenuWeek, Vec<String>) {
        let mut week = self.clone();
        let mut warnings = Vec::new();
        for day in &mut week.days {
            if day.entries.len() > MAX_ENTRIES_PER_DAY {
                let warning = format!(
                    "too many entries for day {}, only the first {} will be displayed",
                    day.day, MAX_ENTRIES_PER_DAY
                );
                warn!("{}", warning);
                warnings.push(warning);
                day.entries.truncate(MAX_ENTRIES_PER_DAY);
            }
        }
        (week, warnings)
    }
}

/// Render a week as the argument string the backend's menu parser
/// consumes (the value of the `menu` query parameter, before encoding).
///
/// Content that cannot survive tokenization, such as quotes inside a
/// text or whitespace inside a day name, is logged and emitted as-is.
pub fn compose(week: &MenuWeek) -> String {
    let mut out = String::from("--header");
    for name in &week.header {
        check_token("header entry", name);
        out.push(' ');
        out.push_str(name);
    }
    check_text("French custom text", &week.french_note);
    check_text("English custom text", &week.english_note);
    out.push_str(&format!(" --custom-text-french \"{}\"", week.french_note));
    out.push_str(&format!(" --custom-text-english \"{}\"", week.english_note));
    for day in &week.days {
        check_token("day name", &day.day);
        out.push_str(&format!(" --content --day {} --day-content", day.day));
        for entry in &day.entries {
            if entry.is_meal {
                out.push_str(" --is-meal");
            }
            check_text("entry text", &entry.text);
            out.push_str(&format!(" --text \"{}\"", entry.text));
            if let Some(img) = entry.img.as_deref() {
                if !img.is_empty() {
                    check_token("image key", img);
                    out.push_str(&format!(" --img {}", img));
                }
            }
        }
    }
    out
}

/// Parse a menu argument string back into a [`MenuWeek`].
///
/// Returns an error only for blank input. Anything else parses: unknown
/// tokens and malformed day blocks are logged and skipped so a stored
/// menu never takes the planner down.
pub fn parse(input: &str) -> Result<MenuWeek> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(SharedError::Parse("no menu arguments provided".to_string()));
    }

    let mut week = MenuWeek::default();
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "--header" => {
                i += 1;
                while i < tokens.len() && !tokens[i].starts_with("--") {
                    week.header.push(tokens[i].to_string());
                    i += 1;
                }
            }
            "--custom-text-french" => {
                let (text, next) = take_quoted(&tokens, i + 1);
                week.french_note = text;
                i = next;
            }
            "--custom-text-english" => {
                let (text, next) = take_quoted(&tokens, i + 1);
                week.english_note = text;
                i = next;
            }
            "--content" => {
                i = parse_day(&tokens, i, &mut week);
            }
            other => {
                warn!("menu arguments: skipping unknown token {:?}", other);
                i += 1;
            }
        }
    }
    Ok(week)
}

/// Parse one `--content --day <name> --day-content <entries...>` block
/// starting at `start`, which points at the `--content` token. Returns
/// the index of the first token after the block.
fn parse_day(tokens: &[&str], start: usize, week: &mut MenuWeek) -> usize {
    let mut i = start + 1;
    if tokens.get(i).copied() != Some("--day") {
        warn!("menu arguments: --content without --day, skipping block");
        return i;
    }
    i += 1;
    let name = match tokens.get(i) {
        Some(name) => *name,
        None => {
            warn!("menu arguments: --day without a label, skipping block");
            return i;
        }
    };
    i += 1;
    if tokens.get(i).copied() == Some("--day-content") {
        i += 1;
    } else {
        warn!(
            "menu arguments: day {:?} has no --day-content, dropping it",
            name
        );
        return i;
    }

    let mut day = MenuDay {
        day: name.to_string(),
        entries: Vec::new(),
    };
    while i < tokens.len() && tokens[i] != "--content" {
        let before = i;
        let mut entry = MenuEntry::default();
        if tokens[i] == "--is-meal" {
            entry.is_meal = true;
            i += 1;
        }
        if i < tokens.len() && tokens[i] == "--text" {
            let (text, next) = take_quoted(tokens, i + 1);
            entry.text = text;
            i = next;
        }
        if i < tokens.len() && tokens[i] == "--img" {
            if let Some(img) = tokens.get(i + 1) {
                entry.img = Some(img.to_string());
                i += 2;
            } else {
                i += 1;
            }
        }
        if i == before {
            // Nothing matched; skip the token so the cursor always advances.
            warn!(
                "menu arguments: skipping unknown token {:?} in day {:?}",
                tokens[i], day.day
            );
            i += 1;
            continue;
        }
        day.entries.push(entry);
    }
    week.days.push(day);
    i
}

/// Collect tokens from `start` until one ends with a quote character,
/// rejoin them with single spaces and strip the surrounding quotes.
/// Returns the text and the index of the first token after it.
fn take_quoted(tokens: &[&str], start: usize) -> (String, usize) {
    let mut buf = String::new();
    let mut i = start;
    while i < tokens.len() && !tokens[i].ends_with('"') {
        buf.push_str(tokens[i]);
        buf.push(' ');
        i += 1;
    }
    if i < tokens.len() {
        buf.push_str(tokens[i]);
        i += 1;
    }
    let content = buf.strip_prefix('"').unwrap_or(&buf);
    let content = content.strip_suffix('"').unwrap_or(content);
    (content.to_string(), i)
}

fn check_token(kind: &str, value: &str) {
    if value.contains(char::is_whitespace) || value.starts_with("--") {
        warn!(
            "menu arguments: {} {:?} will not survive tokenization",
            kind, value
        );
    }
}

fn check_text(kind: &str, value: &str) {
    if value.contains('"') {
        warn!(
            "menu arguments: {} contains a quote and will not round-trip",
            kind
        );
    }
}

//! Rendering of one log record into terminal text
//!
//! A record renders as a header line followed by one tree row per field:
//!
//! ```text
//! 2025-01-08 10:30:45 ∣ INFO    ∣ • deploy complete
//!   ├─ service: api
//!   ├─ duration_ms: 120
//!   └─ caller: src/main.rs:12
//! ```
//!
//! The output is a pure function of its inputs; the clock reading and the
//! caller location are passed in rather than read here.

use super::caller::{CallerInfo, CALLER_KEY};
use super::fields::Fields;
use super::log_level::Level;
use super::settings::LoggerSettings;
use super::style::{Emphasis, Paint, DIVIDER, GRAY};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Width the level label is padded to.
pub const LABEL_WIDTH: usize = 8;

/// Indentation of field rows below the header.
const FIELD_INDENT: &str = "  ";

const BRANCH: &str = "├─";
const LAST_BRANCH: &str = "└─";

struct Row<'a> {
    key: &'a str,
    value: String,
    key_paint: Paint,
    value_paint: Paint,
}

/// Render a record to the exact text written to the sink.
///
/// `fields` must already hold every user field plus the reserved `err` field
/// when present; `caller`, when given, is always rendered as the final row.
/// User fields keyed `caller` are rendered like any other field, so with
/// caller display on such a record carries two `caller` rows and the
/// location is the last one.
pub fn render<Tz>(
    level: Level,
    message: &str,
    fields: &Fields,
    settings: &LoggerSettings,
    caller: Option<&CallerInfo>,
    now: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let style = level.style();
    let colors = settings.use_colors;
    let gray = Paint::new(Some(GRAY), Emphasis::PLAIN);
    let decorated = level != Level::Print;

    let mut out = String::with_capacity(message.len() + 32 * (fields.len() + 1));

    if decorated && settings.show_timestamp {
        let stamp = settings.timestamp_format.format(now);
        out.push_str(&gray.render(&stamp, colors));
        out.push(' ');
        push_divider(&mut out, colors);
    }

    if decorated && settings.show_level_text {
        let label = format!("{:<width$}", style.label, width = LABEL_WIDTH);
        out.push_str(&style.label_paint().render(&label, colors));
        push_divider(&mut out, colors);
    }

    if !style.icon.is_empty() {
        out.push_str(&style.icon_paint().render(style.icon, colors));
        out.push(' ');
    }
    out.push_str(&style.message_paint().render(message, colors));

    let mut rows: Vec<Row<'_>> = fields
        .iter()
        .map(|(key, value)| Row {
            key,
            value: value.to_string(),
            key_paint: style.key_paint(),
            value_paint: Paint::default(),
        })
        .collect();

    if let Some(caller) = caller {
        rows.push(Row {
            key: CALLER_KEY,
            value: caller.to_string(),
            key_paint: Paint::new(Some(GRAY), style.key_emphasis),
            value_paint: gray,
        });
    }

    let last = rows.len().saturating_sub(1);
    for (i, row) in rows.iter().enumerate() {
        push_row(&mut out, row, i == last, colors);
    }

    out.push('\n');
    out
}

fn push_divider(out: &mut String, colors: bool) {
    out.push_str(&Paint::new(Some(GRAY), Emphasis::FAINT).render(DIVIDER, colors));
    out.push(' ');
}

fn push_row(out: &mut String, row: &Row<'_>, is_last: bool, colors: bool) {
    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    let key = if !row.key.is_empty() && !row.value.is_empty() {
        format!("{}: ", row.key)
    } else {
        row.key.to_string()
    };

    out.push('\n');
    out.push_str(FIELD_INDENT);
    out.push_str(&Paint::new(Some(GRAY), Emphasis::PLAIN).render(connector, colors));
    out.push(' ');
    out.push_str(&row.key_paint.render(&key, colors));
    out.push_str(&row.value_paint.render(&row.value, colors));
}

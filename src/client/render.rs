//! 命令行输出格式

use chrono::{DateTime, Utc};

use crate::app::notes::model::Note;

/// 形如 `Friday, 16 October 2026`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

pub fn render_note(note: &Note) -> String {
    format!(
        "#{} {}\n   ~{}\n   {}",
        note.id,
        note.title,
        format_date(&note.created_at),
        note.content
    )
}

pub fn render_notes(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes yet".to_string();
    }
    notes.iter().map(render_note).collect::<Vec<_>>().join("\n\n")
}

//! # Rendering Module
//!
//! Turns [`CmdResult`] values into text. Every function here returns a
//! `String`; printing is left to the command handlers.
//!
//! ## Output Modes
//!
//! - [`OutputMode::Terminal`]: styled, column-aligned text for people.
//! - [`OutputMode::Json`]: the `CmdResult` itself, pretty-printed, for scripts.
//!
//! ## List Layout
//!
//! Each list row is `id  icon title ... time`:
//! - `id` (8 chars): the id prefix users can type back in
//! - `icon` (2 cols): the document icon, blank when unset
//! - `title` (fill): truncated to fit [`LINE_WIDTH`]
//! - `time` (right-aligned): compact age since last update

use super::styles;
use chrono::{DateTime, Utc};
use jotterapp::commands::{CmdMessage, CmdResult, MessageLevel};
use jotterapp::model::{Document, DocumentNode};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const COL_ID: usize = 8;
pub const COL_ICON: usize = 2;
pub const COL_TIME: usize = 5;
pub const TREE_INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Terminal,
    Json,
}

impl OutputMode {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Terminal
        }
    }
}

pub fn render_json(result: &CmdResult) -> String {
    match serde_json::to_string_pretty(result) {
        Ok(json) => format!("{}\n", json),
        Err(error) => format!("{{\"error\": \"{}\"}}\n", error),
    }
}

/// Output of a mutation: its messages, one per line.
pub fn render_mutation(result: &CmdResult, mode: OutputMode) -> String {
    if mode == OutputMode::Json {
        return render_json(result);
    }
    render_messages(&result.messages)
}

pub fn render_list(result: &CmdResult, empty_message: &str, mode: OutputMode) -> String {
    if mode == OutputMode::Json {
        return render_json(result);
    }
    if result.listed_documents.is_empty() {
        return format!("{}\n", styles::MUTED.apply_to(empty_message));
    }
    let mut out = String::new();
    for doc in &result.listed_documents {
        out.push_str(&render_row(doc, 0));
    }
    out.push_str(&render_messages(&result.messages));
    out
}

pub fn render_tree(result: &CmdResult, mode: OutputMode) -> String {
    if mode == OutputMode::Json {
        return render_json(result);
    }
    if result.tree.is_empty() {
        return format!("{}\n", styles::MUTED.apply_to("No documents yet."));
    }
    let mut out = String::new();
    let mut pending: Vec<(&DocumentNode, usize)> =
        result.tree.iter().rev().map(|node| (node, 0)).collect();
    while let Some((node, depth)) = pending.pop() {
        out.push_str(&render_row(&node.document, depth));
        pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    out
}

/// Full view of one document.
pub fn render_document(result: &CmdResult, mode: OutputMode) -> String {
    if mode == OutputMode::Json {
        return render_json(result);
    }
    let Some(doc) = result.listed_documents.first() else {
        return String::new();
    };

    let mut out = String::new();
    let heading = match &doc.icon {
        Some(icon) => format!("{} {}", icon, doc.title),
        None => doc.title.clone(),
    };
    out.push_str(&format!("{}\n", styles::TITLE.apply_to(heading)));

    let mut flags = Vec::new();
    if doc.is_archived {
        flags.push(styles::ARCHIVED.apply_to("in trash").to_string());
    }
    if doc.is_published {
        flags.push(styles::PUBLISHED.apply_to("published").to_string());
    }
    flags.push(
        styles::TIME
            .apply_to(format!("updated {}", format_time_ago_long(doc.updated_at)))
            .to_string(),
    );
    let separator = styles::FAINT.apply_to(" · ").to_string();
    out.push_str(&format!("{}\n", flags.join(separator.as_str())));

    out.push_str(&format!(
        "{} {}\n",
        styles::MUTED.apply_to("id:"),
        styles::ID.apply_to(doc.id)
    ));
    if let Some(parent) = doc.parent_id {
        out.push_str(&format!(
            "{} {}\n",
            styles::MUTED.apply_to("inside:"),
            styles::ID.apply_to(parent)
        ));
    }
    if let Some(cover) = &doc.cover_image {
        out.push_str(&format!("{} {}\n", styles::MUTED.apply_to("cover:"), cover));
    }

    if let Some(content) = doc.content.as_deref().filter(|c| !c.trim().is_empty()) {
        out.push('\n');
        out.push_str(content);
        if !content.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Info => &*styles::INFO,
            MessageLevel::Warning => &*styles::WARNING,
            MessageLevel::Error => &*styles::ERROR,
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

fn render_row(doc: &Document, depth: usize) -> String {
    let indent = TREE_INDENT.repeat(depth);
    let short_id: String = doc.id.to_string().chars().take(COL_ID).collect();
    let icon = pad_to_width(doc.icon.as_deref().unwrap_or(""), COL_ICON);
    let time = format_time_ago(doc.updated_at);

    let fixed = indent.width() + COL_ID + 1 + COL_ICON + 1 + 1 + COL_TIME;
    let title_width = LINE_WIDTH.saturating_sub(fixed);
    let title = pad_to_width(&truncate_to_width(&doc.title, title_width), title_width);
    let title_style = if doc.is_archived {
        &*styles::ARCHIVED
    } else {
        &*styles::REGULAR
    };

    format!(
        "{}{} {} {} {}\n",
        indent,
        styles::ID.apply_to(short_id),
        icon,
        title_style.apply_to(title),
        styles::TIME.apply_to(time)
    )
}

/// Cuts `s` to at most `width` display columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let secs = Utc::now()
        .signed_duration_since(timestamp)
        .num_seconds()
        .max(0) as u64;

    let (value, unit) = if secs < 60 {
        (secs, 's')
    } else if secs < 3600 {
        (secs / 60, 'm')
    } else if secs < 86400 {
        (secs / 3600, 'h')
    } else if secs < 86400 * 7 {
        (secs / 86400, 'd')
    } else if secs < 86400 * 30 {
        (secs / (86400 * 7), 'w')
    } else if secs < 86400 * 365 {
        (secs / (86400 * 30), 'M')
    } else {
        (secs / (86400 * 365), 'y')
    };

    format!("{:>4}{}", value, unit)
}

fn format_time_ago_long(timestamp: DateTime<Utc>) -> String {
    let elapsed = Utc::now()
        .signed_duration_since(timestamp)
        .to_std()
        .unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jotterapp::model::NewDocument;

    fn doc(title: &str) -> Document {
        Document::from_new(
            NewDocument {
                title: title.to_string(),
                owner_id: "alice".to_string(),
                parent_id: None,
            },
            1,
        )
    }

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a longer title", 6), "a lon…");
        assert_eq!(truncate_to_width("日本語のタイトル", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_time_ago_compact() {
        assert_eq!(format_time_ago(Utc::now()).trim(), "0s");
        let hours = Utc::now() - chrono::Duration::hours(3);
        assert_eq!(format_time_ago(hours).trim(), "3h");
        let future = Utc::now() + chrono::Duration::hours(1);
        assert_eq!(format_time_ago(future).trim(), "0s");
    }

    #[test]
    fn test_list_rows_fit_line_width() {
        let long = "x".repeat(200);
        let result = CmdResult::default().with_listed_documents(vec![doc("Plan"), doc(&long)]);
        let out = plain(&render_list(&result, "empty", OutputMode::Terminal));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Plan"));
        for line in lines {
            assert!(line.width() <= LINE_WIDTH, "too wide: {}", line);
        }
    }

    #[test]
    fn test_empty_list_message() {
        let out = plain(&render_list(
            &CmdResult::default(),
            "Trash is empty.",
            OutputMode::Terminal,
        ));
        assert_eq!(out, "Trash is empty.\n");
    }

    #[test]
    fn test_tree_indents_children() {
        let tree = vec![DocumentNode {
            document: doc("Parent"),
            children: vec![DocumentNode {
                document: doc("Child"),
                children: Vec::new(),
            }],
        }];
        let result = CmdResult::default().with_tree(tree);
        let out = plain(&render_tree(&result, OutputMode::Terminal));
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("Parent"));
        assert!(lines[1].starts_with(TREE_INDENT));
        assert!(lines[1].contains("Child"));
    }

    #[test]
    fn test_document_view() {
        let mut d = doc("Plan");
        d.icon = Some("🚀".into());
        d.content = Some("Ship it".into());
        d.is_published = true;
        let result = CmdResult::default().with_listed_documents(vec![d.clone()]);
        let out = plain(&render_document(&result, OutputMode::Terminal));
        assert!(out.starts_with("🚀 Plan\n"));
        assert!(out.contains("published"));
        assert!(out.contains(&d.id.to_string()));
        assert!(out.ends_with("Ship it\n"));
    }

    #[test]
    fn test_json_mode_serializes_result() {
        let mut result = CmdResult::default().with_listed_documents(vec![doc("Plan")]);
        result.add_message(CmdMessage::success("done"));
        let out = render_list(&result, "empty", OutputMode::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["listedDocuments"][0]["title"], "Plan");
        assert_eq!(value["messages"][0]["level"], "success");
    }

    #[test]
    fn test_messages_render_one_per_line() {
        let messages = vec![CmdMessage::success("Saved"), CmdMessage::warning("Careful")];
        assert_eq!(plain(&render_messages(&messages)), "Saved\nCareful\n");
    }
}

//! Display rows for each list.
//!
//! Every render rebuilds the rows from the collection as it is right now;
//! nothing is cached between calls. An empty collection renders as a single
//! placeholder line instead of an empty table.

use chrono::{Local, NaiveDate, TimeZone};
use serde::Serialize;

use crate::entity::{blank_date, sort_sessions, Difficulty, Goal, Note, Resource, Session, Task};

const DATE_DISPLAY: &str = "%d/%m/%Y";
const TIMESTAMP_DISPLAY: &str = "%d/%m/%Y %H:%M:%S";

/// The five rendered lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Goals,
    Tasks,
    Sessions,
    Resources,
    Notes,
}

impl ListKind {
    pub const ALL: [ListKind; 5] = [
        ListKind::Goals,
        ListKind::Tasks,
        ListKind::Sessions,
        ListKind::Resources,
        ListKind::Notes,
    ];

    pub fn singular(&self) -> &'static str {
        match self {
            ListKind::Goals => "goal",
            ListKind::Tasks => "task",
            ListKind::Sessions => "session",
            ListKind::Resources => "resource",
            ListKind::Notes => "note",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            ListKind::Goals => "Goals",
            ListKind::Tasks => "Tasks",
            ListKind::Sessions => "Sessions",
            ListKind::Resources => "Resources",
            ListKind::Notes => "Notes",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ListKind::Goals => "No goals yet.",
            ListKind::Tasks => "No tasks assigned.",
            ListKind::Sessions => "No sessions scheduled.",
            ListKind::Resources => "No resources yet.",
            ListKind::Notes => "No notes saved.",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.singular())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Ok,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    fn neutral(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tone: Tone::Neutral,
        }
    }
}

/// One displayed item. `id` is what per-item actions (toggle, delete) target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: String,
    pub title: String,
    pub badges: Vec<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    /// Outbound link, opened without a back-reference to the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ListView {
    Empty { placeholder: &'static str },
    Rows { rows: Vec<Row> },
}

impl ListView {
    fn build(kind: ListKind, rows: Vec<Row>) -> Self {
        if rows.is_empty() {
            ListView::Empty {
                placeholder: kind.placeholder(),
            }
        } else {
            ListView::Rows { rows }
        }
    }

    /// Number of real items (the placeholder does not count)
    pub fn len(&self) -> usize {
        match self {
            ListView::Empty { .. } => 0,
            ListView::Rows { rows } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> &[Row] {
        match self {
            ListView::Empty { .. } => &[],
            ListView::Rows { rows } => rows,
        }
    }
}

/// Receives re-rendered lists after every mutation.
pub trait ViewSink {
    fn list_changed(&mut self, kind: ListKind, view: &ListView);

    fn progress_changed(&mut self, _percent: u8) {}
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullView;

impl ViewSink for NullView {
    fn list_changed(&mut self, _kind: ListKind, _view: &ListView) {}
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_DISPLAY).to_string()
}

/// Local date-time for an epoch-millis timestamp
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format(TIMESTAMP_DISPLAY).to_string(),
        None => "—".to_string(),
    }
}

/// First eight characters of an id, used for display and prefix lookup
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn dated(prefix: &str, date: Option<&NaiveDate>) -> String {
    match date {
        Some(d) => format!("{}: {}", prefix, format_date(d)),
        None => "No date".to_string(),
    }
}

pub fn render_goals(goals: &[Goal]) -> ListView {
    let rows = goals
        .iter()
        .map(|g| Row {
            id: g.id.clone(),
            title: g.text.clone(),
            badges: vec![
                Badge::neutral(g.category.to_string()),
                Badge::neutral(dated("Target", g.target_date.as_ref())),
            ],
            detail: None,
            done: Some(g.done),
            link: None,
        })
        .collect();
    ListView::build(ListKind::Goals, rows)
}

pub fn render_tasks(tasks: &[Task]) -> ListView {
    let rows = tasks
        .iter()
        .map(|t| Row {
            id: t.id.clone(),
            title: t.text.clone(),
            badges: vec![
                Badge {
                    label: t.difficulty.to_string(),
                    tone: if t.difficulty == Difficulty::Hard {
                        Tone::Warn
                    } else {
                        Tone::Ok
                    },
                },
                Badge::neutral(dated("Due", t.due_date.as_ref())),
            ],
            detail: None,
            done: Some(t.done),
            link: None,
        })
        .collect();
    ListView::build(ListKind::Tasks, rows)
}

/// Sessions are shown in sort-key order regardless of stored order.
pub fn render_sessions(sessions: &[Session]) -> ListView {
    let mut ordered = sessions.to_vec();
    sort_sessions(&mut ordered);

    let rows = ordered
        .into_iter()
        .map(|s| {
            let date = match s.date.as_deref() {
                Some(raw) => NaiveDate::parse_from_str(raw, blank_date::FORMAT)
                    .map(|d| format_date(&d))
                    .unwrap_or_else(|_| raw.to_string()),
                None => "No date".to_string(),
            };
            let time = s.time.as_deref().unwrap_or("—");
            Row {
                id: s.id,
                title: format!("{} · {}", date, time),
                badges: vec![Badge::neutral(s.modality.clone())],
                detail: Some(
                    s.objective
                        .clone()
                        .unwrap_or_else(|| "No objective".to_string()),
                ),
                done: None,
                link: None,
            }
        })
        .collect();
    ListView::build(ListKind::Sessions, rows)
}

pub fn render_resources(resources: &[Resource]) -> ListView {
    let rows = resources
        .iter()
        .map(|r| Row {
            id: r.id.clone(),
            title: r.title.clone(),
            badges: Vec::new(),
            detail: Some(r.url.clone().unwrap_or_else(|| "No URL".to_string())),
            done: None,
            link: r.url.clone(),
        })
        .collect();
    ListView::build(ListKind::Resources, rows)
}

pub fn render_notes(notes: &[Note]) -> ListView {
    let rows = notes
        .iter()
        .map(|n| Row {
            id: n.id.clone(),
            title: n.text.clone(),
            badges: Vec::new(),
            detail: Some(format_timestamp(n.created_at)),
            done: None,
            link: None,
        })
        .collect();
    ListView::build(ListKind::Notes, rows)
}

/// Plain-text lines for a rendered list.
pub fn format_lines(view: &ListView) -> Vec<String> {
    match view {
        ListView::Empty { placeholder } => vec![format!("  {}", placeholder)],
        ListView::Rows { rows } => {
            let mut lines = Vec::with_capacity(rows.len() * 2);
            for row in rows {
                let check = match row.done {
                    Some(true) => "[x] ",
                    Some(false) => "[ ] ",
                    None => "",
                };
                let badges = if row.badges.is_empty() {
                    String::new()
                } else {
                    let labels: Vec<&str> = row.badges.iter().map(|b| b.label.as_str()).collect();
                    format!("[{}] ", labels.join("|"))
                };
                lines.push(format!(
                    "  {} {}{}{}",
                    short_id(&row.id),
                    check,
                    badges,
                    row.title
                ));
                if let Some(ref detail) = row.detail {
                    lines.push(format!("      {}", detail));
                }
            }
            lines
        }
    }
}

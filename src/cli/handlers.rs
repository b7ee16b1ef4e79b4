use std::io;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::config::Config;
use crate::entity::{Difficulty, GoalCategory, ProfileUpdate};
use crate::error::{Result, TutorError};
use crate::storage::JsonFileStore;
use crate::tracker::Tracker;
use crate::view::{format_lines, short_id, ListKind, ListView, ViewSink};

/// Prints re-rendered lists to stdout. Muted in JSON mode so stdout stays
/// machine-readable.
pub struct TerminalView {
    muted: bool,
}

impl TerminalView {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }
}

impl ViewSink for TerminalView {
    fn list_changed(&mut self, kind: ListKind, view: &ListView) {
        if self.muted {
            return;
        }
        println!("{}:\n", kind.heading());
        for line in format_lines(view) {
            println!("{}", line);
        }
        println!();
    }

    fn progress_changed(&mut self, percent: u8) {
        if !self.muted {
            println!("Progress: {}%", percent);
        }
    }
}

type CliTracker = Tracker<JsonFileStore, TerminalView>;

fn open_tracker(data_dir: Option<&Path>, json: bool) -> Result<CliTracker> {
    let config = Config::resolve(data_dir)?;
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        storage_key = %config.storage_key,
        "opening tracker"
    );
    let store = JsonFileStore::open(&config.data_dir, &config.storage_key);
    Tracker::open(store, TerminalView::new(json))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list(tracker: &CliTracker, kind: ListKind) {
    println!("{}:\n", kind.heading());
    for line in format_lines(&tracker.render(kind)) {
        println!("{}", line);
    }
}

pub fn handle_show(data_dir: Option<&Path>, json: bool) -> Result<()> {
    let mut tracker = open_tracker(data_dir, json)?;

    if json {
        #[derive(Serialize)]
        struct ShowJson<'a> {
            #[serde(flatten)]
            document: &'a crate::entity::Document,
            progress: u8,
        }

        return print_json(&ShowJson {
            document: tracker.document(),
            progress: tracker.progress(),
        });
    }

    let profile = tracker.profile();
    println!("Student: {}", profile.student_name);
    println!("Course:  {}", profile.course_label);
    println!("Mentor:  {}", profile.mentor_name);
    if !profile.student_level.is_empty() {
        println!("Level:   {}", profile.student_level);
    }
    if !profile.observations.is_empty() {
        println!("Notes:   {}", profile.observations);
    }
    println!();

    tracker.refresh_all();
    Ok(())
}

pub fn handle_progress(data_dir: Option<&Path>, json: bool) -> Result<()> {
    let tracker = open_tracker(data_dir, json)?;
    let tasks = &tracker.document().tasks;
    let done = tasks.iter().filter(|t| t.done).count();

    if json {
        #[derive(Serialize)]
        struct ProgressJson {
            done: usize,
            total: usize,
            percent: u8,
        }

        print_json(&ProgressJson {
            done,
            total: tasks.len(),
            percent: tracker.progress(),
        })
    } else {
        println!(
            "Progress: {}% ({} of {} tasks done)",
            tracker.progress(),
            done,
            tasks.len()
        );
        Ok(())
    }
}

pub fn handle_profile_show(data_dir: Option<&Path>, json: bool) -> Result<()> {
    let tracker = open_tracker(data_dir, json)?;
    let profile = tracker.profile();

    if json {
        return print_json(profile);
    }

    println!("Student:      {}", profile.student_name);
    println!("Course:       {}", profile.course_label);
    println!("Mentor:       {}", profile.mentor_name);
    println!("Level:        {}", profile.student_level);
    println!("Observations: {}", profile.observations);
    Ok(())
}

pub fn handle_profile_set(data_dir: Option<&Path>, update: ProfileUpdate, json: bool) -> Result<()> {
    let mut tracker = open_tracker(data_dir, json)?;
    let profile = tracker.update_profile(update)?;

    if json {
        print_json(profile)
    } else {
        println!("Profile saved.");
        Ok(())
    }
}

pub fn handle_goal_add(
    data_dir: Option<&Path>,
    text: String,
    category: GoalCategory,
    target: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let mut tracker = open_tracker(data_dir, json)?;
    let Some(id) = tracker.add_goal(&text, category, target)? else {
        return Ok(());
    };

    let goal = tracker
        .document()
        .goals
        .iter()
        .find(|g| g.id == id)
        .ok_or_else(|| TutorError::Storage("Failed to retrieve new goal".to_string()))?;

    if json {
        print_json(goal)
    } else {
        println!("Added goal {} - {}", short_id(&goal.id), goal.text);
        Ok(())
    }
}

pub fn handle_goal_toggle(data_dir: Option<&Path>, id: String) -> Result<()> {
    let mut tracker = open_tracker(data_dir, false)?;
    let id = tracker.resolve_id(ListKind::Goals, &id)?;
    tracker.toggle_goal(&id)?;

    if let Some(goal) = tracker.document().goals.iter().find(|g| g.id == id) {
        let state = if goal.done { "done" } else { "not done" };
        println!("Marked goal {} {} - {}", short_id(&id), state, goal.text);
    }
    Ok(())
}

pub fn handle_task_add(
    data_dir: Option<&Path>,
    text: String,
    difficulty: Difficulty,
    due: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let mut tracker = open_tracker(data_dir, json)?;
    let Some(id) = tracker.add_task(&text, difficulty, due)? else {
        return Ok(());
    };

    let task = tracker
        .document()
        .tasks
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| TutorError::Storage("Failed to retrieve new task".to_string()))?;

    if json {
        print_json(task)
    } else {
        println!("Added task {} - {}", short_id(&task.id), task.text);
        Ok(())
    }
}

pub fn handle_task_done(data_dir: Option<&Path>, id: String, undo: bool) -> Result<()> {
    let mut tracker = open_tracker(data_dir, false)?;
    let id = tracker.resolve_id(ListKind::Tasks, &id)?;
    tracker.set_task_done(&id, !undo)?;

    if let Some(task) = tracker.document().tasks.iter().find(|t| t.id == id) {
        let state = if task.done { "done" } else { "not done" };
        println!("Marked task {} {} - {}", short_id(&id), state, task.text);
    }
    Ok(())
}

pub fn handle_session_add(
    data_dir: Option<&Path>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    modality: String,
    objective: Option<String>,
    json: bool,
) -> Result<()> {
    let mut tracker = open_tracker(data_dir, json)?;

    // Stored zero-padded so the string sort key stays chronological
    let date = date.map(|d| d.format("%Y-%m-%d").to_string());
    let time = time.map(|t| t.format("%H:%M").to_string());

    let id = tracker.add_session(
        date.as_deref(),
        time.as_deref(),
        &modality,
        objective.as_deref(),
    )?;

    let session = tracker
        .document()
        .sessions
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| TutorError::Storage("Failed to retrieve new session".to_string()))?;

    if json {
        print_json(session)
    } else {
        println!("Added session {} - {}", short_id(&id), session.modality);
        Ok(())
    }
}

pub fn handle_resource_add(
    data_dir: Option<&Path>,
    title: String,
    url: Option<String>,
    json: bool,
) -> Result<()> {
    let mut tracker = open_tracker(data_dir, json)?;
    let Some(id) = tracker.add_resource(&title, url.as_deref())? else {
        return Ok(());
    };

    let resource = tracker
        .document()
        .resources
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| TutorError::Storage("Failed to retrieve new resource".to_string()))?;

    if json {
        print_json(resource)
    } else {
        println!("Added resource {} - {}", short_id(&id), resource.title);
        Ok(())
    }
}

pub fn handle_note_add(data_dir: Option<&Path>, text: String, json: bool) -> Result<()> {
    let mut tracker = open_tracker(data_dir, json)?;
    let Some(id) = tracker.add_note(&text)? else {
        return Ok(());
    };

    let note = tracker
        .document()
        .notes
        .iter()
        .find(|n| n.id == id)
        .ok_or_else(|| TutorError::Storage("Failed to retrieve new note".to_string()))?;

    if json {
        print_json(note)
    } else {
        println!("Added note {}", short_id(&id));
        Ok(())
    }
}

/// Delete one item from any list, addressed by id or id prefix.
pub fn handle_delete(data_dir: Option<&Path>, kind: ListKind, id: String) -> Result<()> {
    let mut tracker = open_tracker(data_dir, false)?;
    let id = tracker.resolve_id(kind, &id)?;

    let removed = match kind {
        ListKind::Goals => tracker.delete_goal(&id)?,
        ListKind::Tasks => tracker.delete_task(&id)?,
        ListKind::Sessions => tracker.delete_session(&id)?,
        ListKind::Resources => tracker.delete_resource(&id)?,
        ListKind::Notes => tracker.delete_note(&id)?,
    };

    if removed {
        println!("Deleted {} {}", kind, short_id(&id));
    }
    Ok(())
}

pub fn handle_list(data_dir: Option<&Path>, kind: ListKind, json: bool) -> Result<()> {
    let tracker = open_tracker(data_dir, json)?;

    if json {
        let doc = tracker.document();
        return match kind {
            ListKind::Goals => print_json(&doc.goals),
            ListKind::Tasks => print_json(&doc.tasks),
            ListKind::Sessions => print_json(&doc.sessions),
            ListKind::Resources => print_json(&doc.resources),
            ListKind::Notes => print_json(&doc.notes),
        };
    }

    print_list(&tracker, kind);
    if kind == ListKind::Tasks {
        println!("\nProgress: {}%", tracker.progress());
    }
    Ok(())
}

pub fn handle_reset(data_dir: Option<&Path>, force: bool) -> Result<()> {
    if !force {
        eprintln!("Erase all tracker data and start again from the example document? [y/N] ");

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(TutorError::Storage(
                "Use --force to reset in non-interactive mode".to_string(),
            ));
        }
    }

    let mut tracker = open_tracker(data_dir, false)?;
    tracker.reset()?;
    println!("All data reset.");
    Ok(())
}

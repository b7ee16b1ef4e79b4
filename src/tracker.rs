//! The tracker owns the in-memory document and is the only way to change it.
//!
//! Every mutating method follows the same order: change the collection, save
//! the whole document, then push the re-rendered list to the view sink (and
//! the progress figure when tasks changed). Create calls with blank required
//! text return `None` and do nothing at all.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::entity::{
    optional_text, required_text, sort_sessions, Difficulty, Document, Goal, GoalCategory, Note,
    Profile, ProfileUpdate, Resource, Session, Task,
};
use crate::error::{Result, TutorError};
use crate::progress::percent_done;
use crate::storage::DocumentStore;
use crate::view::{self, ListKind, ListView, NullView, ViewSink};

pub struct Tracker<S: DocumentStore, V: ViewSink = NullView> {
    doc: Document,
    store: S,
    view: V,
}

impl<S: DocumentStore> Tracker<S, NullView> {
    /// Open without a view sink
    pub fn open_headless(store: S) -> Result<Self> {
        Self::open(store, NullView)
    }
}

impl<S: DocumentStore, V: ViewSink> Tracker<S, V> {
    /// Load the stored document, or the seed if there is none, and write it
    /// back once so the store always holds a document after startup.
    pub fn open(mut store: S, view: V) -> Result<Self> {
        let mut doc = match store.load()? {
            Some(doc) => {
                debug!("loaded stored document");
                doc
            }
            None => {
                info!("no usable stored document, starting from seed");
                Document::seed()
            }
        };
        sort_sessions(&mut doc.sessions);
        store.save(&doc)?;

        Ok(Self { doc, store, view })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn profile(&self) -> &Profile {
        &self.doc.profile
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view_sink(&self) -> &V {
        &self.view
    }

    pub fn progress(&self) -> u8 {
        percent_done(&self.doc.tasks)
    }

    /// Render one list from the current state
    pub fn render(&self, kind: ListKind) -> ListView {
        match kind {
            ListKind::Goals => view::render_goals(&self.doc.goals),
            ListKind::Tasks => view::render_tasks(&self.doc.tasks),
            ListKind::Sessions => view::render_sessions(&self.doc.sessions),
            ListKind::Resources => view::render_resources(&self.doc.resources),
            ListKind::Notes => view::render_notes(&self.doc.notes),
        }
    }

    /// Push every list and the progress figure to the view sink.
    pub fn refresh_all(&mut self) {
        for kind in ListKind::ALL {
            let rendered = self.render(kind);
            self.view.list_changed(kind, &rendered);
        }
        let percent = self.progress();
        self.view.progress_changed(percent);
    }

    fn refresh(&mut self, kind: ListKind) {
        let rendered = self.render(kind);
        self.view.list_changed(kind, &rendered);
        if kind == ListKind::Tasks {
            let percent = self.progress();
            self.view.progress_changed(percent);
        }
    }

    /// Save, then re-render the affected list.
    fn commit(&mut self, kind: ListKind) -> Result<()> {
        self.store.save(&self.doc)?;
        self.refresh(kind);
        Ok(())
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<&Profile> {
        self.doc.profile.apply(update);
        self.store.save(&self.doc)?;
        info!("profile saved");
        Ok(&self.doc.profile)
    }

    pub fn add_goal(
        &mut self,
        text: &str,
        category: GoalCategory,
        target_date: Option<NaiveDate>,
    ) -> Result<Option<String>> {
        let Some(text) = required_text(text) else {
            debug!("blank goal text, nothing to add");
            return Ok(None);
        };
        let goal = Goal::new(text, category, target_date);
        let id = goal.id.clone();
        self.doc.goals.insert(0, goal);
        self.commit(ListKind::Goals)?;
        info!(%id, "goal added");
        Ok(Some(id))
    }

    /// Flip a goal's done flag. Returns `false` when no goal has this id.
    pub fn toggle_goal(&mut self, id: &str) -> Result<bool> {
        let Some(goal) = self.doc.goals.iter_mut().find(|g| g.id == id) else {
            return Ok(false);
        };
        goal.done = !goal.done;
        let done = goal.done;
        self.commit(ListKind::Goals)?;
        info!(%id, done, "goal toggled");
        Ok(true)
    }

    /// Remove a goal. Absent ids leave the list as is.
    pub fn delete_goal(&mut self, id: &str) -> Result<bool> {
        let before = self.doc.goals.len();
        self.doc.goals.retain(|g| g.id != id);
        let removed = self.doc.goals.len() != before;
        self.commit(ListKind::Goals)?;
        info!(%id, removed, "goal delete");
        Ok(removed)
    }

    pub fn add_task(
        &mut self,
        text: &str,
        difficulty: Difficulty,
        due_date: Option<NaiveDate>,
    ) -> Result<Option<String>> {
        let Some(text) = required_text(text) else {
            debug!("blank task text, nothing to add");
            return Ok(None);
        };
        let task = Task::new(text, difficulty, due_date);
        let id = task.id.clone();
        self.doc.tasks.insert(0, task);
        self.commit(ListKind::Tasks)?;
        info!(%id, "task added");
        Ok(Some(id))
    }

    /// Set a task's done flag from an external signal (a checkbox, a flag).
    pub fn set_task_done(&mut self, id: &str, done: bool) -> Result<bool> {
        let Some(task) = self.doc.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.done = done;
        self.commit(ListKind::Tasks)?;
        info!(%id, done, "task updated");
        Ok(true)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<bool> {
        let before = self.doc.tasks.len();
        self.doc.tasks.retain(|t| t.id != id);
        let removed = self.doc.tasks.len() != before;
        self.commit(ListKind::Tasks)?;
        info!(%id, removed, "task delete");
        Ok(removed)
    }

    /// Sessions have no required field; they are appended and the list is
    /// re-sorted by date and time.
    pub fn add_session(
        &mut self,
        date: Option<&str>,
        time: Option<&str>,
        modality: &str,
        objective: Option<&str>,
    ) -> Result<String> {
        let session = Session::new(
            optional_text(date),
            optional_text(time),
            modality.trim().to_string(),
            optional_text(objective),
        );
        let id = session.id.clone();
        self.doc.sessions.push(session);
        sort_sessions(&mut self.doc.sessions);
        self.commit(ListKind::Sessions)?;
        info!(%id, "session added");
        Ok(id)
    }

    pub fn delete_session(&mut self, id: &str) -> Result<bool> {
        let before = self.doc.sessions.len();
        self.doc.sessions.retain(|s| s.id != id);
        let removed = self.doc.sessions.len() != before;
        self.commit(ListKind::Sessions)?;
        info!(%id, removed, "session delete");
        Ok(removed)
    }

    pub fn add_resource(&mut self, title: &str, url: Option<&str>) -> Result<Option<String>> {
        let Some(title) = required_text(title) else {
            debug!("blank resource title, nothing to add");
            return Ok(None);
        };
        let resource = Resource::new(title, optional_text(url));
        let id = resource.id.clone();
        self.doc.resources.insert(0, resource);
        self.commit(ListKind::Resources)?;
        info!(%id, "resource added");
        Ok(Some(id))
    }

    pub fn delete_resource(&mut self, id: &str) -> Result<bool> {
        let before = self.doc.resources.len();
        self.doc.resources.retain(|r| r.id != id);
        let removed = self.doc.resources.len() != before;
        self.commit(ListKind::Resources)?;
        info!(%id, removed, "resource delete");
        Ok(removed)
    }

    pub fn add_note(&mut self, text: &str) -> Result<Option<String>> {
        let Some(text) = required_text(text) else {
            debug!("blank note text, nothing to add");
            return Ok(None);
        };
        let note = Note::new(text);
        let id = note.id.clone();
        self.doc.notes.insert(0, note);
        self.commit(ListKind::Notes)?;
        info!(%id, "note added");
        Ok(Some(id))
    }

    pub fn delete_note(&mut self, id: &str) -> Result<bool> {
        let before = self.doc.notes.len();
        self.doc.notes.retain(|n| n.id != id);
        let removed = self.doc.notes.len() != before;
        self.commit(ListKind::Notes)?;
        info!(%id, removed, "note delete");
        Ok(removed)
    }

    /// Drop the stored document and start over from the seed.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        self.doc = Document::seed();
        self.store.save(&self.doc)?;
        self.refresh_all();
        info!("document reset to seed");
        Ok(())
    }

    /// Resolve a full id or a unique id prefix within one list. Prefixes
    /// match case-insensitively.
    pub fn resolve_id(&self, kind: ListKind, prefix: &str) -> Result<String> {
        let wanted = prefix.trim();
        if wanted.is_empty() {
            return Err(TutorError::EntityNotFound(format!("{} ''", kind)));
        }

        let ids: Vec<&str> = match kind {
            ListKind::Goals => self.doc.goals.iter().map(|g| g.id.as_str()).collect(),
            ListKind::Tasks => self.doc.tasks.iter().map(|t| t.id.as_str()).collect(),
            ListKind::Sessions => self.doc.sessions.iter().map(|s| s.id.as_str()).collect(),
            ListKind::Resources => self.doc.resources.iter().map(|r| r.id.as_str()).collect(),
            ListKind::Notes => self.doc.notes.iter().map(|n| n.id.as_str()).collect(),
        };

        if ids.contains(&wanted) {
            return Ok(wanted.to_string());
        }

        let needle = wanted.to_lowercase();
        let mut matches = ids
            .into_iter()
            .filter(|id| id.to_lowercase().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(id), None) => Ok(id.to_string()),
            (Some(_), Some(_)) => Err(TutorError::AmbiguousId(prefix.to_string())),
            (None, _) => Err(TutorError::EntityNotFound(format!("{} '{}'", kind, prefix))),
        }
    }
}

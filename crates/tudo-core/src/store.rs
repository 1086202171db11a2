//! In-memory ordered task collection.
//!
//! The store is deliberately dumb: it applies every mutation it is asked to
//! apply and preserves insertion order. Field validation (non-empty title and
//! description) is the screen controller's job, not the store's.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Task identifier. Time-based with a per-store sequence suffix so records
/// created within the same millisecond stay distinct for the session.
/// Records loaded from the server keep the server-assigned id instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Ordered collection of task records.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    seq: u64,
}

impl TaskStore {
    /// Creates an empty store (remote mode: the list is loaded from the API).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the two fixed example records shown in
    /// local mode.
    pub fn with_examples() -> Self {
        Self {
            tasks: vec![
                Task {
                    id: TaskId("1".to_string()),
                    title: "First task".to_string(),
                    description: "This is an example task".to_string(),
                    completed: false,
                },
                Task {
                    id: TaskId("2".to_string()),
                    title: "Finished task".to_string(),
                    description: "This one is already done".to_string(),
                    completed: true,
                },
            ],
            seq: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Appends a new record with `completed = false` and returns its id.
    pub fn add(&mut self, title: impl Into<String>, description: impl Into<String>) -> TaskId {
        let id = self.next_id();
        self.tasks.push(Task {
            id: id.clone(),
            title: title.into(),
            description: description.into(),
            completed: false,
        });
        id
    }

    /// Replaces the title and description of the record with the given id in
    /// place, preserving its position and completion flag. Returns false when
    /// the id is absent.
    pub fn update_entry(
        &mut self,
        id: &TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) else {
            return false;
        };
        task.title = title.into();
        task.description = description.into();
        true
    }

    /// Removes the record with the given id. Idempotent: removing an absent
    /// id leaves the collection unchanged and returns false.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        self.tasks.len() != before
    }

    /// Flips the completion flag of the record with the given id and returns
    /// the new value; no-op (None) when the id is absent.
    pub fn toggle(&mut self, id: &TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| &task.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Replaces the whole collection (remote mode: list loaded from the API).
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Rewrites a locally assigned id with the server-assigned one after a
    /// successful remote create. Returns false when the local id is absent.
    pub fn adopt_id(&mut self, local: &TaskId, server: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| &task.id == local) else {
            return false;
        };
        task.id = server;
        true
    }

    fn next_id(&mut self) -> TaskId {
        self.seq += 1;
        TaskId(format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            self.seq
        ))
    }
}

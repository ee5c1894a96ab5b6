use std::path::PathBuf;
use std::sync::Mutex;

use gg_core::{DownloadStatus, DownloadTask, MediaId, TaskId};

/// Finished tasks kept for `list`; older finished ones are pruned.
pub const DEFAULT_TASK_HISTORY: usize = 100;

/// In-memory list of download tasks, oldest first. Not persisted.
///
/// Pending and in-flight tasks are always kept. Once the list is longer
/// than the history limit, the oldest finished tasks are dropped.
pub struct DownloadTracker {
    tasks: Mutex<Vec<DownloadTask>>,
    history: usize,
}

impl Default for DownloadTracker {
    fn default() -> Self {
        Self::with_history(DEFAULT_TASK_HISTORY)
    }
}

impl DownloadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: usize) -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            history,
        }
    }

    pub fn register(&self, media_id: MediaId, target: PathBuf) -> TaskId {
        let task = DownloadTask::new(media_id, target);
        let id = task.id.clone();
        let mut tasks = self.lock();
        tasks.push(task);
        prune_finished(&mut tasks, self.history);
        id
    }

    /// Move a task forward. Terminal tasks keep their status.
    pub fn update(&self, id: &TaskId, status: DownloadStatus) -> bool {
        let mut tasks = self.lock();
        match tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) if !task.status.is_terminal() => {
                task.status = status;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: &TaskId) -> Option<DownloadTask> {
        self.lock().iter().find(|task| &task.id == id).cloned()
    }

    pub fn list(&self) -> Vec<DownloadTask> {
        self.lock().clone()
    }

    pub fn in_flight_for(&self, media_id: &MediaId) -> usize {
        self.lock()
            .iter()
            .filter(|task| &task.media_id == media_id && task.status == DownloadStatus::InFlight)
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DownloadTask>> {
        self.tasks.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn prune_finished(tasks: &mut Vec<DownloadTask>, history: usize) {
    let mut excess = tasks.len().saturating_sub(history);
    if excess == 0 {
        return;
    }
    tasks.retain(|task| {
        if excess > 0 && task.status.is_terminal() {
            excess -= 1;
            false
        } else {
            true
        }
    });
}

use std::collections::VecDeque;

/// Asset search paths that uploads made available on the launcher host.
///
/// Registering a path twice is harmless: it is remembered once and queued
/// for forwarding to the audio server once.
#[derive(Debug, Default)]
pub struct SearchPaths {
    registered: Vec<String>,
    pending: VecDeque<String>,
}

impl SearchPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search path under which the launcher stores uploads of `project_name`
    pub fn for_project(project_name: &str) -> String {
        format!("../tmp/{}", project_name)
    }

    /// Returns `true` if the path was not registered before
    pub fn register(&mut self, path: String) -> bool {
        if self.registered.contains(&path) {
            return false;
        }
        self.registered.push(path.clone());
        self.pending.push_back(path);
        true
    }

    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// Queues every known path again, e.g. after connecting to a freshly
    /// started audio server
    pub fn requeue_all(&mut self) {
        self.pending = self.registered.iter().cloned().collect();
    }

    /// Paths registered since the last call, oldest first
    pub fn take_pending(&mut self) -> Vec<String> {
        self.pending.drain(..).collect()
    }
}

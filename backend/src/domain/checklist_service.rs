//! Checklist: tasks with a done flag, newest first.

use super::generate_id;
use super::validation::{validate_text, ValidationError};
use crate::clock::Clock;
use crate::config::PlannerConfig;
use crate::storage::{self, KeyValueStore};
use log::{debug, error, info};
use shared::Task;
use std::rc::Rc;

pub struct ChecklistService {
    store: Rc<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    storage_key: String,
    tasks: Vec<Task>,
}

impl ChecklistService {
    pub fn load(store: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>, config: &PlannerConfig) -> Self {
        let storage_key = config.storage_keys.todos.clone();
        let tasks = storage::load_or_default(store.as_ref(), &storage_key);
        Self { store, clock, storage_key, tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }

    pub fn add_task(&mut self, text: &str) -> Result<Task, ValidationError> {
        let text = validate_text(text).map_err(|e| {
            debug!("Rejected task: {}", e);
            e
        })?;

        let task = Task {
            id: generate_id(|candidate| self.tasks.iter().any(|t| t.id == candidate)),
            text,
            done: false,
            created_at: self.clock.now_millis(),
        };
        info!("✅ Adding task {}", task.id);
        self.tasks.insert(0, task.clone());
        self.persist();

        Ok(task)
    }

    /// Flip the done flag. Returns the new state, `None` if the id is unknown.
    pub fn toggle_task(&mut self, id: &str) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.done = !task.done;
        let done = task.done;

        info!("Task {} marked {}", id, if done { "done" } else { "not done" });
        self.persist();
        Some(done)
    }

    /// Returns false if no task has this id
    pub fn remove_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        info!("🗑️ Removed task {}", id);
        self.persist();
        true
    }

    fn persist(&self) {
        if let Err(e) = storage::save(self.store.as_ref(), &self.storage_key, &self.tasks) {
            error!("Failed to persist tasks: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use crate::test_utils::TestEnvironment;

    fn service(env: &TestEnvironment) -> ChecklistService {
        ChecklistService::load(env.store.clone(), env.clock.clone(), &env.config)
    }

    fn stored(env: &TestEnvironment) -> Vec<Task> {
        storage::load_or_default(env.store.as_ref(), "todos")
    }

    #[test]
    fn test_new_tasks_start_undone_and_first() {
        let env = TestEnvironment::new();
        let mut checklist = service(&env);

        checklist.add_task("water plants").unwrap();
        let latest = checklist.add_task("fold laundry").unwrap();

        assert!(!latest.done);
        assert_eq!(checklist.tasks()[0].id, latest.id);
        assert_eq!(checklist.remaining(), 2);
        assert_eq!(stored(&env).len(), 2);
    }

    #[test]
    fn test_blank_task_is_rejected() {
        let env = TestEnvironment::new();
        let mut checklist = service(&env);

        assert_eq!(checklist.add_task(""), Err(ValidationError::EmptyText));
        assert!(checklist.tasks().is_empty());
        assert_eq!(env.store.raw("todos"), None);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let env = TestEnvironment::new();
        let mut checklist = service(&env);
        let task = checklist.add_task("call plumber").unwrap();

        assert_eq!(checklist.toggle_task(&task.id), Some(true));
        assert!(stored(&env)[0].done);
        assert_eq!(checklist.remaining(), 0);

        assert_eq!(checklist.toggle_task(&task.id), Some(false));
        assert!(!stored(&env)[0].done);
        assert_eq!(checklist.tasks()[0], task);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let env = TestEnvironment::new();
        let mut checklist = service(&env);
        checklist.add_task("something").unwrap();

        assert_eq!(checklist.toggle_task("nope"), None);
        assert!(!checklist.tasks()[0].done);
    }

    #[test]
    fn test_remove_task() {
        let env = TestEnvironment::new();
        let mut checklist = service(&env);
        let a = checklist.add_task("a").unwrap();
        let b = checklist.add_task("b").unwrap();

        assert!(checklist.remove_task(&a.id));
        assert!(!checklist.remove_task(&a.id));
        assert_eq!(stored(&env), vec![b]);
    }

    #[test]
    fn test_reload_round_trip_keeps_done_flags() {
        let env = TestEnvironment::new();
        let mut checklist = service(&env);
        let a = checklist.add_task("a").unwrap();
        checklist.add_task("b").unwrap();
        checklist.toggle_task(&a.id);

        let reloaded = service(&env);
        assert_eq!(reloaded.tasks(), checklist.tasks());
        assert!(reloaded.tasks()[1].done);
    }

    #[test]
    fn test_corrupt_blob_starts_empty() {
        let env = TestEnvironment::with_store(InMemoryStore::new().with_entry("todos", "not json"));
        assert!(service(&env).tasks().is_empty());
    }
}

use super::notifications::BrowserNotificationHost;
use super::scheduler::BrowserScheduler;
use super::storage::browser_store;
use planner_backend::{Clock, KeyValueStore, NotificationHost, PlannerConfig, Scheduler, SystemClock};
use std::rc::Rc;

/// Host capabilities handed to each planner service
#[derive(Clone)]
pub struct PlannerHost {
    pub store: Rc<dyn KeyValueStore>,
    pub clock: Rc<dyn Clock>,
    pub config: PlannerConfig,
}

impl PlannerHost {
    pub fn new() -> Self {
        Self {
            store: browser_store(),
            clock: Rc::new(SystemClock),
            config: PlannerConfig::default(),
        }
    }

    /// A fresh timer set; every reminder service owns its own
    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::new(BrowserScheduler::new())
    }

    pub fn notifications(&self) -> Rc<dyn NotificationHost> {
        Rc::new(BrowserNotificationHost)
    }
}

impl Default for PlannerHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Two hosts are the same when they share one store
impl PartialEq for PlannerHost {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

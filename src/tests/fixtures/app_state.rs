use crate::shell::config::Settings;
use crate::shell::state::{AppState, Documents};
use crate::tests::fixtures::clock::ManualClock;
use std::sync::Arc;

/// Application state over an in-memory database and a manual clock, both kept in reach.
pub struct TestApp {
    pub state: AppState,
    pub documents: Arc<Documents>,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    pub fn new() -> Self {
        let documents = Arc::new(Documents::new());
        let clock = Arc::new(ManualClock::default());
        let state = AppState::new(documents.clone(), clock.clone(), &Settings::default());
        Self {
            state,
            documents,
            clock,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Arc;

use records::{QueryInterpreter, RecordStore};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: RecordStore,
    pub interpreter: QueryInterpreter,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            interpreter: QueryInterpreter::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

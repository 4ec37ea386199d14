//! Intent Handlers
//!
//! Each intent the bot understands gets a handler. Handlers are registered
//! by name and looked up by the dispatcher on every turn.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::request::DialogRequest;
use crate::response::DialogResponse;

/// Intent handler trait - implement to support a new intent
pub trait IntentHandler: Send + Sync {
    /// Intent name as configured on the platform
    fn name(&self) -> &str;

    /// Handle one code-hook invocation for this intent
    fn handle(&self, request: DialogRequest) -> Result<DialogResponse>;
}

/// Registry of supported intents
pub struct IntentRegistry {
    intents: HashMap<String, Arc<dyn IntentHandler>>,
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentRegistry {
    pub fn new() -> Self {
        Self {
            intents: HashMap::new(),
        }
    }

    /// Register a handler under its own name
    pub fn register<H: IntentHandler + 'static>(&mut self, handler: H) {
        self.intents.insert(handler.name().to_owned(), Arc::new(handler));
    }

    /// Get a handler by intent name
    pub fn get(&self, name: &str) -> Option<Arc<dyn IntentHandler>> {
        self.intents.get(name).cloned()
    }

    /// Registered intent names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.intents.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

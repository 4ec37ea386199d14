//! Application State

use std::sync::Arc;

use dialog_core::Dispatcher;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Intent dispatcher (immutable after startup)
    pub dispatcher: Arc<Dispatcher>,
}

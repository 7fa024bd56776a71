use crate::concierge::Concierge;

/// Shared state for the local HTTP surface.
#[derive(Clone)]
pub struct AppState {
    pub concierge: Concierge,
}

pub mod analysis;
mod event_handler;
mod state;

pub use event_handler::handle_backend_event;
pub use state::{AppState, AudioSelection, BackendEvent, InputMode, SessionState};

use std::cell::RefCell;
use std::rc::Rc;

use super::analysis::GENERIC_FAILURE_MESSAGE;
use super::state::{AppState, BackendEvent};
use crate::ui::window::render;

/// Apply an analysis outcome to the session and re-render. Runs on the GTK
/// main thread; exactly one event arrives per dispatched request, so loading
/// is guaranteed to drop on every path.
pub fn handle_backend_event(state: &Rc<RefCell<AppState>>, event: BackendEvent) {
    let mut s = state.borrow_mut();
    match event {
        BackendEvent::AnalysisComplete(text) => {
            log::info!("Analysis complete ({} chars)", text.len());
            s.session.complete(text);
        }
        BackendEvent::AnalysisFailed(cause) => {
            // The cause stays in the log; users always see the same message.
            log::error!("Analysis failed: {cause}");
            s.session.fail(GENERIC_FAILURE_MESSAGE);
        }
    }
    if let Some(ref win) = s.window {
        render(win, &s.session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SessionState;

    // The handler is a thin borrow-and-render wrapper around these
    // transitions; the transitions themselves are what the outcome contract
    // specifies.

    #[test]
    fn success_applies_the_service_text_exactly() {
        let mut session = SessionState::default();
        session.begin_analysis();
        session.complete("Conclusions: ...\nTasks: ...".into());
        assert_eq!(
            session.result_text.as_deref(),
            Some("Conclusions: ...\nTasks: ...")
        );
        assert!(session.error_message.is_none());
        assert!(!session.is_loading);
    }

    #[test]
    fn any_failure_collapses_to_the_generic_message() {
        for cause in ["connection refused", "Gemini API error 429", "bad key"] {
            let mut session = SessionState::default();
            session.begin_analysis();
            let _ = cause; // logged in the real handler, never displayed
            session.fail(GENERIC_FAILURE_MESSAGE);
            assert_eq!(session.error_message.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
            assert!(session.result_text.is_none());
            assert!(!session.is_loading);
        }
    }
}

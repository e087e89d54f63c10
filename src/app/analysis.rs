use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use super::state::{AppState, BackendEvent, InputMode, SessionState};
use crate::ui::window::render;

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text to analyze.";
pub const MISSING_FILE_MESSAGE: &str = "Please select an audio file to analyze.";
/// The one user-facing string shown for every non-validation failure. Causes
/// go to the log only.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while analyzing. Please try again.";

/// Payload drawn from session state at submit time. Not retained after the
/// call completes.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    Text(String),
    Audio { path: PathBuf, mime_type: String },
}

/// Pre-flight validation, checked before any network activity.
pub fn build_request(session: &SessionState) -> Result<AnalysisRequest, &'static str> {
    match session.mode {
        InputMode::Text => {
            if session.text_input.trim().is_empty() {
                Err(EMPTY_TEXT_MESSAGE)
            } else {
                Ok(AnalysisRequest::Text(session.text_input.clone()))
            }
        }
        InputMode::Audio => match &session.audio_file {
            Some(selection) => Ok(AnalysisRequest::Audio {
                path: selection.path.clone(),
                mime_type: selection.mime_type.clone(),
            }),
            None => Err(MISSING_FILE_MESSAGE),
        },
    }
}

/// Run one analysis for the current session. Invoked only from the submit
/// buttons; the outcome comes back as a single BackendEvent.
pub fn run_analysis(state: &Rc<RefCell<AppState>>) {
    let request = {
        let mut s = state.borrow_mut();
        // Buttons are insensitive while loading; this guard covers activation
        // paths that bypass them.
        if s.session.is_loading {
            return;
        }
        match build_request(&s.session) {
            Ok(request) => {
                s.session.begin_analysis();
                request
            }
            Err(message) => {
                s.session.reject(message);
                if let Some(ref win) = s.window {
                    render(win, &s.session);
                }
                return;
            }
        }
    };

    let s = state.borrow();
    if let Some(ref win) = s.window {
        render(win, &s.session);
    }
    let api_key = s.config.resolve_api_key();
    let sender = s.backend_sender.clone();

    s.tokio_rt.spawn(async move {
        match execute(&api_key, request).await {
            Ok(text) => {
                let _ = sender.send(BackendEvent::AnalysisComplete(text)).await;
            }
            Err(e) => {
                let _ = sender.send(BackendEvent::AnalysisFailed(e.to_string())).await;
            }
        }
    });
}

/// Encode if needed, then make the single model call.
async fn execute(
    api_key: &str,
    request: AnalysisRequest,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    match request {
        AnalysisRequest::Text(transcript) => crate::gemini::analyze_text(api_key, &transcript).await,
        AnalysisRequest::Audio { path, mime_type } => {
            let data = crate::encoder::encode_file(&path).await?;
            crate::gemini::analyze_audio(api_key, &mime_type, data).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AudioSelection;

    #[test]
    fn whitespace_only_text_is_rejected_before_dispatch() {
        let mut session = SessionState::default();
        session.set_text("   \n\t ".into());
        assert_eq!(build_request(&session), Err(EMPTY_TEXT_MESSAGE));
    }

    #[test]
    fn audio_mode_without_a_file_is_rejected_before_dispatch() {
        let mut session = SessionState::default();
        session.set_mode(InputMode::Audio);
        // Typed text does not satisfy audio mode.
        session.set_text("irrelevant".into());
        assert_eq!(build_request(&session), Err(MISSING_FILE_MESSAGE));
    }

    #[test]
    fn text_mode_carries_the_literal_input() {
        let mut session = SessionState::default();
        session.set_text("We agreed to ship v2 by Friday.".into());
        assert_eq!(
            build_request(&session),
            Ok(AnalysisRequest::Text("We agreed to ship v2 by Friday.".into()))
        );
    }

    #[test]
    fn audio_mode_carries_path_and_mime_type() {
        let mut session = SessionState::default();
        session.set_mode(InputMode::Audio);
        session.select_audio(AudioSelection {
            path: PathBuf::from("/tmp/standup.wav"),
            file_name: "standup.wav".into(),
            mime_type: "audio/wav".into(),
        });
        assert_eq!(
            build_request(&session),
            Ok(AnalysisRequest::Audio {
                path: PathBuf::from("/tmp/standup.wav"),
                mime_type: "audio/wav".into(),
            })
        );
    }
}

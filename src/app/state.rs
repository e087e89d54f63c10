use std::path::PathBuf;

use crate::config::Config;
use crate::ui::window::WindowWidgets;

/// Events sent from the analysis task back to the GTK main thread.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    AnalysisComplete(String),
    /// Carries the internal cause; it is logged, never shown to the user.
    AnalysisFailed(String),
}

/// Which input path is active. Mutated only by explicit tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Text,
    Audio,
}

/// A user-selected recording. Bytes are read at submit time, not held here.
#[derive(Debug, Clone)]
pub struct AudioSelection {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

/// The single mutable record the UI renders from. Lives for the lifetime of
/// the window; nothing is persisted across runs.
///
/// Invariant: at most one of `result_text` / `error_message` is Some, and
/// `is_loading` is true only while exactly one analysis task is in flight.
#[derive(Debug, Default)]
pub struct SessionState {
    pub mode: InputMode,
    pub text_input: String,
    pub audio_file: Option<AudioSelection>,
    pub is_loading: bool,
    pub result_text: Option<String>,
    pub error_message: Option<String>,
}

impl SessionState {
    /// Tab switch. Orthogonal to the result fields: entered text and any
    /// selected file survive switching back and forth.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn set_text(&mut self, text: String) {
        self.text_input = text;
    }

    /// A fresh file selection clears a standing error so the user sees an
    /// unobstructed path to retry, but leaves a previous result alone.
    pub fn select_audio(&mut self, selection: AudioSelection) {
        self.audio_file = Some(selection);
        self.error_message = None;
    }

    /// Submit accepted: enter the loading interval with both outcome fields
    /// cleared.
    pub fn begin_analysis(&mut self) {
        self.is_loading = true;
        self.result_text = None;
        self.error_message = None;
    }

    /// Pre-flight validation failure: report inline without ever starting a
    /// request.
    pub fn reject(&mut self, message: &str) {
        self.result_text = None;
        self.error_message = Some(message.to_string());
    }

    pub fn complete(&mut self, text: String) {
        self.is_loading = false;
        self.result_text = Some(text);
        self.error_message = None;
    }

    pub fn fail(&mut self, message: &str) {
        self.is_loading = false;
        self.result_text = None;
        self.error_message = Some(message.to_string());
    }
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
pub struct AppState {
    pub session: SessionState,
    pub config: Config,
    pub tokio_rt: tokio::runtime::Runtime,
    pub backend_sender: async_channel::Sender<BackendEvent>,
    pub window: Option<WindowWidgets>,
}

impl AppState {
    pub fn new(sender: async_channel::Sender<BackendEvent>) -> Self {
        let config = Config::load();
        let tokio_rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

        Self {
            session: SessionState::default(),
            config,
            tokio_rt,
            backend_sender: sender,
            window: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> AudioSelection {
        AudioSelection {
            path: PathBuf::from("/tmp/standup.wav"),
            file_name: "standup.wav".into(),
            mime_type: "audio/wav".into(),
        }
    }

    fn outcome_fields_are_exclusive(s: &SessionState) -> bool {
        !(s.result_text.is_some() && s.error_message.is_some())
    }

    #[test]
    fn starts_idle_and_empty() {
        let s = SessionState::default();
        assert_eq!(s.mode, InputMode::Text);
        assert!(s.text_input.is_empty());
        assert!(s.audio_file.is_none());
        assert!(!s.is_loading);
        assert!(s.result_text.is_none());
        assert!(s.error_message.is_none());
    }

    #[test]
    fn tab_round_trip_preserves_text_and_file() {
        let mut s = SessionState::default();
        s.set_text("We agreed to ship v2 by Friday.".into());
        s.select_audio(selection());
        s.set_mode(InputMode::Audio);
        s.set_mode(InputMode::Text);
        assert_eq!(s.text_input, "We agreed to ship v2 by Friday.");
        assert!(s.audio_file.is_some());
    }

    #[test]
    fn selecting_a_file_clears_error_but_not_result() {
        let mut s = SessionState::default();
        s.complete("Conclusions: ...".into());
        s.select_audio(selection());
        assert_eq!(s.result_text.as_deref(), Some("Conclusions: ..."));

        s.fail("oops");
        s.select_audio(selection());
        assert!(s.error_message.is_none());
    }

    #[test]
    fn begin_analysis_clears_both_outcome_fields() {
        let mut s = SessionState::default();
        s.fail("oops");
        s.begin_analysis();
        assert!(s.is_loading);
        assert!(s.result_text.is_none());
        assert!(s.error_message.is_none());
    }

    #[test]
    fn loading_is_false_after_every_outcome() {
        let mut s = SessionState::default();
        s.begin_analysis();
        s.complete("done".into());
        assert!(!s.is_loading);

        s.begin_analysis();
        s.fail("broken");
        assert!(!s.is_loading);
    }

    #[test]
    fn result_and_error_never_coexist() {
        let mut s = SessionState::default();
        s.begin_analysis();
        s.complete("done".into());
        assert!(outcome_fields_are_exclusive(&s));

        s.begin_analysis();
        s.fail("broken");
        assert!(outcome_fields_are_exclusive(&s));

        s.reject("missing input");
        assert!(outcome_fields_are_exclusive(&s));
    }

    #[test]
    fn validation_rejection_does_not_touch_loading() {
        let mut s = SessionState::default();
        s.reject("Please enter some text to analyze.");
        assert!(!s.is_loading);
        assert_eq!(
            s.error_message.as_deref(),
            Some("Please enter some text to analyze.")
        );
    }
}

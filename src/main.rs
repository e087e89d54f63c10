mod app;
mod config;
mod encoder;
mod gemini;
mod prompt;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use libadwaita::prelude::*;

use app::{AppState, AudioSelection, BackendEvent, InputMode};

fn main() {
    env_logger::init();
    log::info!("Meeting Lens starting");

    let application = libadwaita::Application::builder()
        .application_id("com.github.meeting-lens")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(app: &libadwaita::Application) {
    // Async channel for analysis-task → UI communication
    let (backend_tx, backend_rx) = async_channel::unbounded::<BackendEvent>();

    let state = Rc::new(RefCell::new(AppState::new(backend_tx)));

    let widgets = ui::window::build_window(app, &state.borrow().config.gemini_api_key);

    // Tab selection
    {
        let state_clone = state.clone();
        widgets.stack.connect_visible_child_name_notify(move |stack| {
            let mode = match stack.visible_child_name().as_deref() {
                Some("audio") => InputMode::Audio,
                _ => InputMode::Text,
            };
            state_clone.borrow_mut().session.set_mode(mode);
        });
    }

    // Transcript edits
    {
        let state_clone = state.clone();
        widgets.text_view.buffer().connect_changed(move |buffer| {
            let text = buffer
                .text(&buffer.start_iter(), &buffer.end_iter(), false)
                .to_string();
            state_clone.borrow_mut().session.set_text(text);
        });
    }

    // File picker
    {
        let state_clone = state.clone();
        let parent = widgets.window.clone();
        widgets.choose_file_button.connect_clicked(move |_| {
            show_file_dialog(&parent, state_clone.clone());
        });
    }

    // Submit buttons, one per page, same workflow
    {
        let state_clone = state.clone();
        widgets.analyze_text_button.connect_clicked(move |_| {
            app::analysis::run_analysis(&state_clone);
        });
    }
    {
        let state_clone = state.clone();
        widgets.analyze_audio_button.connect_clicked(move |_| {
            app::analysis::run_analysis(&state_clone);
        });
    }

    // API key changes
    {
        let state_clone = state.clone();
        widgets
            .api_key_row
            .connect_changed(move |row: &libadwaita::PasswordEntryRow| {
                let key = row.text().to_string();
                let mut s = state_clone.borrow_mut();
                s.config.gemini_api_key = key;
                if let Err(e) = s.config.save() {
                    log::warn!("Failed to save config: {e}");
                }
            });
    }

    // Store UI handles and render the initial idle session
    {
        let mut s = state.borrow_mut();
        ui::window::render(&widgets, &s.session);
        s.window = Some(widgets);
    }

    state.borrow().window.as_ref().unwrap().window.present();

    // Apply analysis outcomes on the GTK main thread
    {
        let state_clone = state.clone();
        gtk4::glib::spawn_future_local(async move {
            while let Ok(event) = backend_rx.recv().await {
                app::handle_backend_event(&state_clone, event);
            }
        });
    }
}

fn show_file_dialog(parent: &libadwaita::ApplicationWindow, state: Rc<RefCell<AppState>>) {
    let filter = gtk4::FileFilter::new();
    filter.set_name(Some("WAV audio"));
    filter.add_mime_type("audio/wav");

    let filters = gtk4::gio::ListStore::new::<gtk4::FileFilter>();
    filters.append(&filter);

    let dialog = gtk4::FileDialog::builder()
        .title("Choose an audio file")
        .filters(&filters)
        .modal(true)
        .build();

    dialog.open(Some(parent), gtk4::gio::Cancellable::NONE, move |result| {
        match result {
            Ok(file) => {
                let Some(path) = file.path() else {
                    log::warn!("Selected file has no local path");
                    return;
                };
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "recording.wav".into());

                let mut s = state.borrow_mut();
                // The dialog filter only admits WAV; the type is not re-checked.
                s.session.select_audio(AudioSelection {
                    path,
                    file_name,
                    mime_type: "audio/wav".into(),
                });
                if let Some(ref win) = s.window {
                    ui::window::render(win, &s.session);
                }
            }
            Err(e) => log::info!("File selection cancelled: {e}"),
        }
    });
}

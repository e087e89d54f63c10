use gtk4::prelude::*;
use libadwaita::prelude::*;

use crate::app::SessionState;

/// Handles returned from building the main window.
pub struct WindowWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub stack: gtk4::Stack,
    pub text_view: gtk4::TextView,
    pub analyze_text_button: gtk4::Button,
    pub choose_file_button: gtk4::Button,
    pub file_label: gtk4::Label,
    pub analyze_audio_button: gtk4::Button,
    pub api_key_row: libadwaita::PasswordEntryRow,
    pub spinner: gtk4::Spinner,
    pub loading_box: gtk4::Box,
    pub error_label: gtk4::Label,
    pub result_label: gtk4::Label,
    pub placeholder_label: gtk4::Label,
}

/// Build the main window: tab switcher, the two input pages, the results
/// region, and the API key row.
pub fn build_window(app: &libadwaita::Application, initial_api_key: &str) -> WindowWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("Meeting Lens")
        .default_width(560)
        .default_height(640)
        .build();

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();
    toolbar_view.add_top_bar(&header);

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    // --- Input tabs ---
    let stack = gtk4::Stack::new();
    stack.set_transition_type(gtk4::StackTransitionType::Crossfade);

    let switcher = gtk4::StackSwitcher::new();
    switcher.set_stack(Some(&stack));
    switcher.set_halign(gtk4::Align::Center);
    content.append(&switcher);

    // Text page: transcript area + submit
    let text_page = gtk4::Box::new(gtk4::Orientation::Vertical, 8);

    let text_view = gtk4::TextView::new();
    text_view.set_wrap_mode(gtk4::WrapMode::WordChar);
    text_view.set_top_margin(8);
    text_view.set_bottom_margin(8);
    text_view.set_left_margin(8);
    text_view.set_right_margin(8);

    let text_scroll = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .min_content_height(160)
        .child(&text_view)
        .build();
    text_scroll.add_css_class("card");
    text_page.append(&text_scroll);

    let analyze_text_button = gtk4::Button::builder()
        .label("Analyze Transcript")
        .halign(gtk4::Align::Center)
        .build();
    analyze_text_button.add_css_class("suggested-action");
    text_page.append(&analyze_text_button);

    stack.add_titled(&text_page, Some("text"), "Paste Text");

    // Audio page: file picker row + submit
    let audio_page = gtk4::Box::new(gtk4::Orientation::Vertical, 8);

    let picker_group = libadwaita::PreferencesGroup::new();
    let file_row = libadwaita::ActionRow::builder()
        .title("Recording")
        .subtitle("WAV audio only")
        .build();
    let file_label = gtk4::Label::new(Some("No file selected"));
    file_label.add_css_class("dim-label");
    file_row.add_suffix(&file_label);

    let choose_file_button = gtk4::Button::builder()
        .label("Choose File")
        .valign(gtk4::Align::Center)
        .build();
    file_row.add_suffix(&choose_file_button);
    picker_group.add(&file_row);
    audio_page.append(&picker_group);

    let analyze_audio_button = gtk4::Button::builder()
        .label("Analyze Recording")
        .halign(gtk4::Align::Center)
        .build();
    analyze_audio_button.add_css_class("suggested-action");
    audio_page.append(&analyze_audio_button);

    stack.add_titled(&audio_page, Some("audio"), "Upload Audio");

    content.append(&stack);
    content.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));

    // --- Results region: exactly one child is visible at a time ---
    let results_box = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
    results_box.set_vexpand(true);

    let loading_box = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
    loading_box.set_halign(gtk4::Align::Center);
    loading_box.set_margin_top(24);
    let spinner = gtk4::Spinner::new();
    loading_box.append(&spinner);
    loading_box.append(&gtk4::Label::new(Some("Analyzing...")));
    loading_box.set_visible(false);
    results_box.append(&loading_box);

    let error_label = gtk4::Label::new(None);
    error_label.add_css_class("error");
    error_label.set_wrap(true);
    error_label.set_visible(false);
    results_box.append(&error_label);

    let result_label = gtk4::Label::new(None);
    result_label.set_selectable(true);
    result_label.set_wrap(true);
    result_label.set_xalign(0.0);
    result_label.set_valign(gtk4::Align::Start);
    result_label.set_visible(false);

    let result_scroll = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .vexpand(true)
        .child(&result_label)
        .build();
    results_box.append(&result_scroll);

    let placeholder_label = gtk4::Label::new(Some(
        "Paste a transcript or choose a recording, then analyze.",
    ));
    placeholder_label.add_css_class("dim-label");
    placeholder_label.set_margin_top(24);
    results_box.append(&placeholder_label);

    content.append(&results_box);
    content.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));

    // --- API key ---
    let api_group = libadwaita::PreferencesGroup::new();
    api_group.set_title("Gemini API");
    let api_key_row = libadwaita::PasswordEntryRow::builder()
        .title("API Key")
        .text(initial_api_key)
        .build();
    api_group.add(&api_key_row);
    content.append(&api_group);

    // Assemble
    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();
    toolbar_view.set_content(Some(&scrolled));
    window.set_content(Some(&toolbar_view));

    WindowWidgets {
        window,
        stack,
        text_view,
        analyze_text_button,
        choose_file_button,
        file_label,
        analyze_audio_button,
        api_key_row,
        spinner,
        loading_box,
        error_label,
        result_label,
        placeholder_label,
    }
}

/// Read-only render of the session: button sensitivity, file name, and the
/// mutually exclusive results region (spinner, error, result, placeholder).
pub fn render(widgets: &WindowWidgets, session: &SessionState) {
    let loading = session.is_loading;

    widgets.analyze_text_button.set_sensitive(!loading);
    widgets.analyze_audio_button.set_sensitive(!loading);
    widgets.choose_file_button.set_sensitive(!loading);

    match &session.audio_file {
        Some(selection) => widgets.file_label.set_text(&selection.file_name),
        None => widgets.file_label.set_text("No file selected"),
    }

    widgets.loading_box.set_visible(loading);
    widgets.spinner.set_spinning(loading);

    match &session.error_message {
        Some(message) if !loading => {
            widgets.error_label.set_text(message);
            widgets.error_label.set_visible(true);
        }
        _ => widgets.error_label.set_visible(false),
    }

    match &session.result_text {
        Some(text) if !loading => {
            widgets.result_label.set_text(text);
            widgets.result_label.set_visible(true);
        }
        _ => widgets.result_label.set_visible(false),
    }

    let placeholder =
        !loading && session.error_message.is_none() && session.result_text.is_none();
    widgets.placeholder_label.set_visible(placeholder);
}

use eframe::egui::{self, RichText};
use viewer_core::{AppViewModel, Msg, ResultView};

use super::constants::*;

/// Draws one frame from the view model and returns the messages the user triggered.
pub fn render(ctx: &egui::Context, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_salt(PAGE_SCROLL_ID)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                header(ui, view);
                ui.add_space(8.0);
                input_row(ui, view, &mut msgs);
                suggestions(ui, view, &mut msgs);
                ui.separator();

                if let Some(error) = &view.error {
                    egui::Frame::group(ui.style())
                        .fill(ERROR_FILL)
                        .stroke(egui::Stroke::new(1.0, ERROR_STROKE))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(error).color(ERROR_TEXT));
                        });
                }

                if view.show_empty_state {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.weak(EMPTY_STATE_TEXT);
                    });
                }

                if let Some(result) = &view.result {
                    result_panel(ui, result, &mut msgs);
                }
            });
    });

    toast(ctx, view, &mut msgs);
    msgs
}

fn header(ui: &mut egui::Ui, view: &AppViewModel) {
    ui.horizontal(|ui| {
        ui.small(BADGE_TEXT);
        if let Some(host) = &view.hostname {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(host);
            });
        }
    });
    ui.heading(WINDOW_TITLE);
    ui.weak(TAGLINE);
}

fn input_row(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.small(INPUT_LABEL);
    ui.horizontal(|ui| {
        let mut input = view.input.clone();
        let width = (ui.available_width() - SUBMIT_BUTTON_WIDTH).max(120.0);
        let response = ui.add(
            egui::TextEdit::singleline(&mut input)
                .hint_text(INPUT_HINT)
                .desired_width(width),
        );
        if response.changed() {
            msgs.push(Msg::InputChanged(input));
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            msgs.push(Msg::EnterPressed);
        }

        if view.loading {
            ui.add_enabled(false, egui::Button::new("Scraping…"));
            ui.spinner();
        } else if ui
            .add_enabled(view.can_submit, egui::Button::new("Scrape"))
            .clicked()
        {
            msgs.push(Msg::SubmitClicked);
        }
    });
}

fn suggestions(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.horizontal_wrapped(|ui| {
        for suggestion in &view.suggestions {
            if ui
                .small_button(suggestion.label.as_str())
                .on_hover_text(suggestion.url.as_str())
                .clicked()
            {
                msgs.push(Msg::SuggestionSelected(suggestion.url.clone()));
            }
        }
    });
}

fn result_panel(ui: &mut egui::Ui, result: &ResultView, msgs: &mut Vec<Msg>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Metadata").color(ACCENT).strong());
        labelled(ui, "URL", &result.url);
        labelled(ui, "Title", &result.title);
        labelled(ui, "Description", &result.description);
        labelled(ui, "Language", &result.language);
    });

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Interactions").color(ACCENT).strong());
        json_block(ui, "interactions", &result.interactions_json, INTERACTIONS_MAX_HEIGHT);
    });

    if ui
        .add_sized([ui.available_width(), 28.0], egui::Button::new("Download JSON"))
        .clicked()
    {
        msgs.push(Msg::DownloadClicked);
    }

    for (index, section) in result.sections.iter().enumerate() {
        let title = RichText::new(format!("{}  ·  {}", section.label, section.kind)).strong();
        egui::CollapsingHeader::new(title)
            .id_salt(("section", index, section.key.as_str()))
            .default_open(section.default_open)
            .show(ui, |ui| {
                json_block(ui, &section.key, &section.body_json, SECTION_MAX_HEIGHT);
            });
    }
}

fn labelled(ui: &mut egui::Ui, name: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(format!("{name}:")).strong());
        ui.label(value);
    });
}

fn json_block(ui: &mut egui::Ui, id: &str, text: &str, max_height: f32) {
    egui::ScrollArea::both()
        .id_salt(("json", id))
        .max_height(max_height)
        .show(ui, |ui| {
            ui.add(egui::Label::new(RichText::new(text).monospace()).extend());
        });
}

fn toast(ctx: &egui::Context, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    let Some(text) = &view.notification else {
        return;
    };
    egui::Area::new(egui::Id::new(TOAST_ID))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 20.0))
        .show(ctx, |ui| {
            let frame = egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(text).color(ACCENT));
            });
            if frame
                .response
                .interact(egui::Sense::click())
                .on_hover_text("Dismiss")
                .clicked()
            {
                msgs.push(Msg::NotificationDismissed);
            }
        });
}

use {
    eframe::egui::{Button, CentralPanel, ComboBox, Context, Key, RichText, TextEdit, TopBottomPanel, Ui},
    strum::IntoEnumIterator,
};

use crate::{
    app::{App, FetchState},
    config::plot::PLOT_CONFIG,
    models::{AnalysisMode, PlotField},
    ui::{UI_CONFIG, UI_TEXT, show_scatter},
};

impl App {
    pub(crate) fn render_controls_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("controls")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.label_analysis).color(UI_CONFIG.colors.heading),
                    );
                    ComboBox::from_id_salt("analysis_mode")
                        .selected_text(self.mode.to_string())
                        .show_ui(ui, |ui| {
                            for mode in AnalysisMode::iter() {
                                ui.selectable_value(&mut self.mode, mode, mode.to_string());
                            }
                        });

                    ui.separator();
                    ui.label(&UI_TEXT.label_symbol);
                    let symbol_edit = ui.add_enabled(
                        self.mode.requires_symbol(),
                        TextEdit::singleline(&mut self.symbol)
                            .hint_text(&UI_TEXT.symbol_hint)
                            .desired_width(110.0),
                    );
                    if symbol_edit.lost_focus()
                        && ui.input(|i| i.key_pressed(Key::Enter))
                        && self.submittable()
                    {
                        self.start_fetch();
                    }

                    ui.separator();
                    ui.label(&UI_TEXT.label_x_axis);
                    field_selector(ui, "x_field", &mut self.x_field);
                    ui.label(&UI_TEXT.label_y_axis);
                    field_selector(ui, "y_field", &mut self.y_field);

                    ui.separator();
                    let mut fetch =
                        ui.add_enabled(self.submittable(), Button::new(&UI_TEXT.button_fetch));
                    if self.mode.requires_symbol() && self.symbol.trim().is_empty() {
                        fetch = fetch.on_disabled_hover_text(&UI_TEXT.hover_symbol_required);
                    }
                    if fetch.clicked() {
                        self.start_fetch();
                    }

                    if self.fetch_state.is_loading() {
                        ui.spinner();
                    }
                });

                if let FetchState::Failure(message) = &self.fetch_state {
                    ui.colored_label(
                        PLOT_CONFIG.color_error,
                        format!("{} {}", UI_TEXT.error_prefix, message),
                    );
                }
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let never_fetched =
                    matches!(self.fetch_state, FetchState::Idle) && self.records.is_empty();
                if never_fetched {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new(&UI_TEXT.placeholder_idle)
                                .color(PLOT_CONFIG.color_placeholder),
                        );
                    });
                } else {
                    // Loading keeps showing the previous records; a failure
                    // cleared them, so the no-points placeholder appears
                    // under the error banner.
                    show_scatter(ui, &self.records, self.x_field, self.y_field);
                }
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(status) = &self.status {
                        ui.label(
                            RichText::new(format!(
                                "{} {}",
                                self.records.len(),
                                UI_TEXT.status_strikes
                            ))
                            .color(PLOT_CONFIG.color_summary),
                        );
                        ui.separator();
                        ui.label(RichText::new(&status.message).color(PLOT_CONFIG.color_status));
                        if let Some(ts) = status.timestamp {
                            ui.separator();
                            ui.label(
                                RichText::new(format!(
                                    "{} {}",
                                    UI_TEXT.status_as_of,
                                    ts.format("%d-%b-%Y %H:%M:%S")
                                ))
                                .color(PLOT_CONFIG.color_status),
                            );
                        }
                    } else if self.fetch_state.is_loading() {
                        ui.label(
                            RichText::new(&UI_TEXT.status_loading).color(PLOT_CONFIG.color_status),
                        );
                    }
                });
            });
    }
}

fn field_selector(ui: &mut Ui, id_salt: &str, field: &mut PlotField) {
    ComboBox::from_id_salt(id_salt)
        .selected_text(field.label())
        .show_ui(ui, |ui| {
            for choice in PlotField::iter() {
                ui.selectable_value(field, choice, choice.label());
            }
        });
}

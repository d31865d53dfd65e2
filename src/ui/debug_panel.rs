use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::parallax::{ParallaxActivity, ParallaxCamera, ScrollController};

/// Tracks debug panel visibility.
#[derive(Resource, Default)]
pub struct DebugUiState {
    pub visible: bool,
}

/// Toggles debug panel visibility on F3 press.
pub fn toggle_debug_panel(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugUiState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

/// Switches parallax off and back on with F2.
pub fn toggle_parallax_activity(
    keyboard: Res<ButtonInput<KeyCode>>,
    activity: Res<State<ParallaxActivity>>,
    mut next_activity: ResMut<NextState<ParallaxActivity>>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }
    let next = match activity.get() {
        ParallaxActivity::Active => ParallaxActivity::Inactive,
        ParallaxActivity::Inactive => ParallaxActivity::Active,
    };
    info!("Parallax toggled: {:?}", next);
    next_activity.set(next);
}

/// Draws the debug inspector panel using egui.
pub fn draw_debug_panel(
    mut contexts: EguiContexts,
    state: Res<DebugUiState>,
    diagnostics: Res<DiagnosticsStore>,
    controller: Res<ScrollController>,
    activity: Res<State<ParallaxActivity>>,
    camera_query: Query<&Transform, With<ParallaxCamera>>,
    layer_query: Query<&Transform, Without<ParallaxCamera>>,
) -> Result {
    if !state.visible {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
        .inner_margin(egui::Margin::same(8))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

    egui::SidePanel::right("debug_panel")
        .default_width(280.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Debug Panel");
            ui.separator();

            // --- Performance ---
            egui::CollapsingHeader::new(egui::RichText::new("Performance").strong())
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new("perf_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("FPS:");
                            let fps_text = diagnostics
                                .get(&FrameTimeDiagnosticsPlugin::FPS)
                                .and_then(|d| d.smoothed())
                                .map(|v| format!("{v:.1}"))
                                .unwrap_or_else(|| "...".to_string());
                            ui.colored_label(egui::Color32::LIGHT_GREEN, &fps_text);
                            ui.end_row();
                        });
                });

            // --- Camera ---
            egui::CollapsingHeader::new(egui::RichText::new("Camera").strong())
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new("camera_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Parallax:");
                            ui.monospace(format!("{:?}", activity.get()));
                            ui.end_row();

                            ui.label("Position:");
                            match controller.camera().and_then(|e| camera_query.get(e).ok()) {
                                Some(tf) => ui.monospace(format!(
                                    "{:.1}, {:.1}",
                                    tf.translation.x, tf.translation.y
                                )),
                                None => ui.colored_label(egui::Color32::GRAY, "detached"),
                            };
                            ui.end_row();

                            let d = controller.frame_displacement();
                            ui.label("Displacement:");
                            ui.monospace(format!("{:.2}, {:.2}", d.x, d.y));
                            ui.end_row();
                        });
                });

            // --- Layers ---
            egui::CollapsingHeader::new(egui::RichText::new("Layers").strong())
                .default_open(false)
                .show(ui, |ui| {
                    ui.label(format!("{} layers", controller.layers().len()));
                    for (i, layer) in controller.layers().iter().enumerate() {
                        ui.separator();
                        egui::Grid::new(format!("parallax_layer_{i}"))
                            .num_columns(2)
                            .spacing([20.0, 4.0])
                            .show(ui, |ui| {
                                ui.label("Name:");
                                ui.monospace(layer.name());
                                ui.end_row();

                                ui.label("Position:");
                                let position = layer
                                    .config()
                                    .target
                                    .and_then(|e| layer_query.get(e).ok())
                                    .map(|tf| {
                                        format!("{:.1}, {:.1}", tf.translation.x, tf.translation.y)
                                    })
                                    .unwrap_or_else(|| "-".to_string());
                                ui.monospace(position);
                                ui.end_row();

                                ui.label("Rules:");
                                if layer.pipeline().is_empty() {
                                    ui.colored_label(egui::Color32::DARK_GRAY, "none");
                                } else {
                                    ui.vertical(|ui| {
                                        for rule in layer.pipeline() {
                                            ui.monospace(rule.to_string());
                                        }
                                    });
                                }
                                ui.end_row();
                            });
                    }
                });
        });

    Ok(())
}

use egui_macroquad::egui;

use crate::engine::{hold_ratio, EffectEngine};
use crate::input::InputController;
use crate::stats::{EffectStats, RingBuffer};

/// Tracks panel visibility and actions requested through the panel.
pub struct UiState {
    pub show_panel: bool,
    pub report_requested: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_panel: true,
            report_requested: false,
        }
    }
}

/// Draw the diagnostics window.
pub fn draw_ui(
    engine: &EffectEngine,
    input: &InputController,
    stats: &EffectStats,
    ui_state: &mut UiState,
    paused: &mut bool,
    now_ms: f64,
) {
    egui_macroquad::ui(|ctx| {
        if !ui_state.show_panel {
            return;
        }
        egui::Window::new("Diagnostics")
            .default_pos(egui::pos2(12.0, 12.0))
            .default_size(egui::vec2(260.0, 0.0))
            .resizable(false)
            .show(ctx, |ui| {
                title_badge(ui, "HOLDFIRE");

                match input.hold_ms(now_ms) {
                    Some(hold) => {
                        status_chip(ui, "CHARGING", egui::Color32::from_rgb(255, 196, 64));
                        ui.add(
                            egui::ProgressBar::new(hold_ratio(hold))
                                .text(format!("{hold:.0} ms")),
                        );
                    }
                    None => {
                        ui.label(
                            egui::RichText::new("Idle. Hold the mouse to charge a burst.")
                                .small()
                                .color(egui::Color32::from_rgb(150, 170, 185)),
                        );
                    }
                }

                ui.separator();
                ui.horizontal_wrapped(|ui| {
                    metric_chip(ui, "Live", format!("{}", engine.particle_count()));
                    metric_chip(ui, "Orbs", format!("{}", engine.charge_count()));
                    metric_chip(ui, "Peak", format!("{}", stats.peak_live));
                });
                ui.horizontal_wrapped(|ui| {
                    metric_chip(ui, "Bursts", format!("{}", stats.explosions));
                    metric_chip(ui, "Auto", format!("{}", stats.auto_explosions));
                    metric_chip(ui, "Fizzles", format!("{}", stats.fizzles));
                    metric_chip(ui, "Spawned", format!("{}", stats.particles_spawned));
                });

                ui.collapsing("Live Particles", |ui| {
                    draw_sparkline(
                        ui,
                        &stats.live_particles,
                        egui::Color32::from_rgb(255, 196, 64),
                    );
                });

                ui.separator();
                ui.horizontal(|ui| {
                    let pause_label = if *paused { "Resume" } else { "Pause" };
                    if ui.button(pause_label).clicked() {
                        *paused = !*paused;
                    }
                    if ui.button("Write report").clicked() {
                        ui_state.report_requested = true;
                    }
                });
            });
    });

    egui_macroquad::draw();
}

fn title_badge(ui: &mut egui::Ui, label: &str) {
    let text = egui::RichText::new(label)
        .strong()
        .color(egui::Color32::from_rgb(255, 220, 160));
    ui.label(text);
}

fn metric_chip(ui: &mut egui::Ui, key: &str, value: String) {
    let text = egui::RichText::new(format!("{key}: {value}"))
        .small()
        .color(egui::Color32::from_rgb(205, 215, 225));
    ui.group(|ui| {
        ui.label(text);
    });
}

fn status_chip(ui: &mut egui::Ui, label: &str, color: egui::Color32) {
    ui.group(|ui| {
        ui.label(egui::RichText::new(label).small().strong().color(color));
    });
}

fn draw_sparkline(ui: &mut egui::Ui, buffer: &RingBuffer, color: egui::Color32) {
    let size = egui::vec2(ui.available_width(), 60.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(20));

    let len = buffer.len();
    if len >= 2 {
        let samples: Vec<f32> = buffer.iter().collect();
        let max_val = samples.iter().cloned().fold(1.0f32, f32::max);

        let points: Vec<egui::Pos2> = samples
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = rect.left() + (i as f32 / (len - 1) as f32) * rect.width();
                let y = rect.bottom() - (v / max_val).clamp(0.0, 1.0) * rect.height();
                egui::pos2(x, y)
            })
            .collect();

        for pair in points.windows(2) {
            painter.line_segment([pair[0], pair[1]], egui::Stroke::new(1.5, color));
        }
    }

    if let Some(val) = buffer.last() {
        painter.text(
            egui::pos2(rect.right() - 4.0, rect.top() + 2.0),
            egui::Align2::RIGHT_TOP,
            format!("{val:.0}"),
            egui::FontId::proportional(10.0),
            egui::Color32::from_gray(200),
        );
    }
}

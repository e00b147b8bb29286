use macroquad::prelude::*;

mod charge;
mod config;
mod engine;
mod input;
mod palette;
mod particle;
mod renderer;
mod reporting;
mod stats;
mod surface;
mod ui;

use engine::EffectEngine;
use input::{ChargeOutcome, InputController};
use renderer::ScreenSurface;
use reporting::MetricAggregator;
use stats::EffectStats;
use ui::UiState;

fn window_conf() -> Conf {
    Conf {
        window_title: "HOLDFIRE — Charged Fireworks".to_string(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

const RNG_SEED: u64 = 42;
const REPORT_PATH: &str = "holdfire_report.json";

#[macroquad::main(window_conf)]
async fn main() {
    let mut engine = EffectEngine::new(RNG_SEED);
    let mut input = InputController::new();
    let mut screen = ScreenSurface;
    let mut stats = EffectStats::new(600);
    let mut ui_state = UiState::default();
    let mut frame_ms = MetricAggregator::new(reporting::METRIC_WINDOW);
    let mut frames: u64 = 0;
    let mut paused = false;

    // The trail effect needs the backbuffer left alone between frames, so
    // this is the only clear; from here on the per-frame overlay does the
    // fading.
    clear_background(BLACK);

    loop {
        let now_ms = get_time() * 1000.0;

        // Pointer events (only if egui doesn't want the input). Touch
        // arrives through macroquad's mouse emulation, so one stream
        // covers both devices.
        let mut egui_wants_pointer = false;
        egui_macroquad::cfg(|ctx| {
            egui_wants_pointer = ctx.wants_pointer_input();
        });
        if !paused {
            let pointer = Vec2::from(mouse_position());
            if !egui_wants_pointer && is_mouse_button_pressed(MouseButton::Left) {
                input.press(&mut engine, pointer, now_ms);
            }
            input.move_to(pointer);
            if is_mouse_button_released(MouseButton::Left) {
                match input.release(&mut engine, now_ms) {
                    ChargeOutcome::Fired(spawned) => stats.note_explosion(spawned, false),
                    ChargeOutcome::Fizzled => stats.note_fizzle(),
                    ChargeOutcome::Ignored => {}
                }
            }
        }

        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
            // A charge held across a pause would fire with the pause time
            // counted, so drop it instead.
            if paused {
                input.cancel(&mut engine);
            }
        }

        if is_key_pressed(KeyCode::Tab) {
            ui_state.show_panel = !ui_state.show_panel;
        }

        if is_key_pressed(KeyCode::R) {
            ui_state.report_requested = true;
        }

        if !paused {
            if let Some(spawned) = input.frame(&mut engine, now_ms) {
                stats.note_explosion(spawned, true);
            }

            engine.tick(&mut screen);
            if let Some((anchor, ratio)) = input.charging_visuals(now_ms) {
                engine.render_charging(&mut screen, anchor, ratio, now_ms);
            }

            stats.record_frame(engine.particle_count());
        }

        frames += 1;
        frame_ms.push(get_frame_time() as f64 * 1000.0);

        renderer::draw_hud(engine.particle_count(), engine.charge_count(), paused);

        // Draw egui UI on top
        ui::draw_ui(&engine, &input, &stats, &mut ui_state, &mut paused, now_ms);

        if ui_state.report_requested {
            ui_state.report_requested = false;
            let report = reporting::build_report(RNG_SEED, frames, get_time(), &frame_ms, &stats);
            match reporting::write_report(&report, REPORT_PATH) {
                Ok(()) => eprintln!(
                    "[HOLDFIRE] Report written to {} ({} frames, {} bursts)",
                    REPORT_PATH, report.frames, report.explosions
                ),
                Err(e) => eprintln!("[HOLDFIRE] Report failed: {e}"),
            }
        }

        next_frame().await;
    }
}

use macroquad::prelude::*;

use crate::surface::Surface;

const GLOW_LAYERS: usize = 4;

/// The live window as a draw surface.
pub struct ScreenSurface;

impl Surface for ScreenSurface {
    fn overlay(&mut self, color: Color) {
        draw_rectangle(0.0, 0.0, screen_width(), screen_height(), color);
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        draw_circle(center.x, center.y, radius, color);
    }

    /// Layered concentric circles stand in for a true radial gradient:
    /// faint and wide at the rim, denser toward the core.
    fn glow(&mut self, center: Vec2, radius: f32, color: Color) {
        for layer in 0..GLOW_LAYERS {
            let depth = (layer + 1) as f32 / GLOW_LAYERS as f32;
            let r = radius * (GLOW_LAYERS - layer) as f32 / GLOW_LAYERS as f32;
            let layer_color = Color::new(color.r, color.g, color.b, color.a * depth * 0.4);
            draw_circle(center.x, center.y, r, layer_color);
        }
    }

    fn star(&mut self, center: Vec2, size: f32, color: Color) {
        let inner = size * 0.35;
        let mut points = [Vec2::ZERO; 8];
        for (i, point) in points.iter_mut().enumerate() {
            let r = if i % 2 == 0 { size } else { inner };
            let a = i as f32 * std::f32::consts::FRAC_PI_4;
            *point = center + vec2(a.cos(), a.sin()) * r;
        }
        for i in 0..points.len() {
            draw_triangle(center, points[i], points[(i + 1) % points.len()], color);
        }
    }
}

pub fn draw_hud(live_particles: usize, charge_orbs: usize, paused: bool) {
    let tc = Color::new(0.7, 0.75, 0.8, 1.0);
    let sh = Color::new(0.0, 0.0, 0.0, 0.5);

    let fps_text = format!("FPS: {}", get_fps());
    draw_text(&fps_text, 11.0, 21.0, 18.0, sh);
    draw_text(&fps_text, 10.0, 20.0, 18.0, tc);

    let live_text = format!("Particles: {}", live_particles);
    draw_text(&live_text, 11.0, 41.0, 18.0, sh);
    draw_text(&live_text, 10.0, 40.0, 18.0, tc);

    if charge_orbs > 0 {
        let orb_text = format!("Charging: {} orbs", charge_orbs);
        draw_text(&orb_text, 11.0, 61.0, 18.0, sh);
        draw_text(&orb_text, 10.0, 60.0, 18.0, tc);
    }

    let hint = "Hold to charge, release to fire | Tab panel | Space pause | R report";
    draw_text(
        hint,
        10.0,
        screen_height() - 12.0,
        16.0,
        Color::new(0.7, 0.75, 0.8, 0.5),
    );

    if paused {
        let pause_text = "PAUSED (Space to resume)";
        let tw = measure_text(pause_text, None, 24, 1.0).width;
        let x = screen_width() * 0.5 - tw * 0.5;
        draw_text(pause_text, x + 1.0, 31.0, 24.0, sh);
        draw_text(pause_text, x, 30.0, 24.0, Color::new(1.0, 0.8, 0.2, 0.9));
    }
}

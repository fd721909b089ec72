// Renderer struct that owns the 2d canvas context and draws a `Scene`:
// translucent overlay first, then shooting stars, then the dot field

use crate::color::Color;
use crate::dot::Dot;
use crate::error::BackdropError;
use crate::scene::Scene;
use crate::shooting_star::ShootingStar;
use crate::viewport::Viewport;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl Renderer {
    // Grabs the 2d context from the canvas on the DOM
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, BackdropError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(BackdropError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackdropError::NoContext)?;

        Ok(Renderer { canvas, context })
    }

    // Matches the canvas backing store to the viewport
    pub fn resize(&self, viewport: Viewport) {
        self.canvas.set_width(viewport.width.max(0.0) as u32);
        self.canvas.set_height(viewport.height.max(0.0) as u32);
    }

    pub fn surface(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    // Nothing is drawn until the canvas has been given a size
    pub fn has_surface(&self) -> bool {
        !self.surface().is_empty()
    }

    pub fn render(&self, scene: &Scene) -> Result<(), JsValue> {
        if !self.has_surface() {
            return Ok(());
        }
        let config = scene.config();
        self.clear_screen(scene.viewport(), config.background, config.overlay_alpha);
        self.render_stars(scene.stars())?;
        self.render_dots(scene.dots())
    }

    // Low opacity fill instead of a hard clear so moving things leave a trail
    pub fn clear_screen(&self, viewport: Viewport, background: Color, alpha: f64) {
        self.context
            .set_fill_style(&JsValue::from_str(&background.to_css(alpha)));
        self.context
            .fill_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    pub fn render_stars(&self, stars: &[ShootingStar]) -> Result<(), JsValue> {
        for star in stars {
            let [tail_x, tail_y] = star.trail_tail();
            let [x, y] = star.pos;

            let gradient = self.context.create_linear_gradient(tail_x, tail_y, x, y);
            gradient.add_color_stop(0.0, &star.trail_start_color.to_css(0.0))?;
            gradient.add_color_stop(1.0, &star.trail_end_color.to_css(star.life))?;

            self.context.set_stroke_style(&gradient);
            self.context.set_line_width(star.trail_width);
            self.context.begin_path();
            self.context.move_to(tail_x, tail_y);
            self.context.line_to(x, y);
            self.context.stroke();

            self.context
                .set_fill_style(&JsValue::from_str(&star.core_color.to_css(star.life)));
            self.fill_circle(x, y, star.core_radius)?;
        }
        Ok(())
    }

    pub fn render_dots(&self, dots: &[Dot]) -> Result<(), JsValue> {
        // Palettes are tiny, so only touch fillStyle when the color changes
        let mut current: Option<Color> = None;
        for dot in dots {
            if current != Some(dot.color) {
                self.context
                    .set_fill_style(&JsValue::from_str(&dot.color.to_css_opaque()));
                current = Some(dot.color);
            }
            self.fill_circle(dot.pos[0], dot.pos[1], dot.radius)?;
        }
        Ok(())
    }

    fn fill_circle(&self, x: f64, y: f64, radius: f64) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(x, y, radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}

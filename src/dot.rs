// Ambient dots: slow drifting circles that bounce off the viewport edges

use crate::color::Color;
use crate::config::DotConfig;
use crate::sample;
use crate::viewport::Viewport;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dot {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Dot {
    pub fn new(pos: [f64; 2], vel: [f64; 2], radius: f64, color: Color) -> Dot {
        Dot {
            pos,
            vel,
            radius,
            color,
        }
    }

    pub fn random<R: Rng + ?Sized>(config: &DotConfig, viewport: Viewport, rng: &mut R) -> Dot {
        let radius = sample::uniform(rng, config.min_radius, config.max_radius);
        let x = sample::uniform(rng, radius, viewport.width - radius);
        let y = sample::uniform(rng, radius, viewport.height - radius);
        let vel_x = sample::signed(rng, config.min_speed, config.max_speed);
        let vel_y = sample::signed(rng, config.min_speed, config.max_speed);
        let color = sample::pick(rng, config.colors);
        Dot::new([x, y], [vel_x, vel_y], radius, color)
    }

    // One unit of time per frame, each axis bounces on its own
    pub fn advance(&mut self, viewport: Viewport) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        bounce(&mut self.pos[0], &mut self.vel[0], self.radius, viewport.width);
        bounce(&mut self.pos[1], &mut self.vel[1], self.radius, viewport.height);
    }

    pub fn is_within(&self, viewport: Viewport) -> bool {
        within(self.pos[0], self.radius, viewport.width)
            && within(self.pos[1], self.radius, viewport.height)
    }
}

pub fn create_field<R: Rng + ?Sized>(
    count: usize,
    viewport: Viewport,
    config: &DotConfig,
    rng: &mut R,
) -> Vec<Dot> {
    let mut dots = Vec::with_capacity(count);
    for _ in 0..count {
        dots.push(Dot::random(config, viewport, rng));
    }
    dots
}

fn bounce(pos: &mut f64, vel: &mut f64, radius: f64, extent: f64) {
    if *pos - radius < 0.0 || *pos + radius > extent {
        *vel *= -1.0;
        *pos = clamp_to_extent(*pos, radius, extent);
    }
}

// Legal range is [radius, extent - radius]; a viewport narrower than the dot
// pins it at `radius`
fn clamp_to_extent(pos: f64, radius: f64, extent: f64) -> f64 {
    pos.min(extent - radius).max(radius)
}

fn within(pos: f64, radius: f64, extent: f64) -> bool {
    let upper = (extent - radius).max(radius);
    pos >= radius && pos <= upper
}

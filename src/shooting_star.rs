// Shooting stars: short lived particles spawned from the upper half of the
// viewport, travelling downward with a fading gradient trail

use crate::color::Color;
use crate::config::StarConfig;
use crate::sample;
use crate::viewport::Viewport;
extern crate nalgebra_glm as glm;
use rand::Rng;
use std::f64::consts::PI;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShootingStar {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    // 1.0 at spawn, 0.0 once the lifespan has elapsed
    pub life: f64,
    pub spawned_at_ms: f64,
    pub trail_length: f64,
    pub trail_width: f64,
    pub core_radius: f64,
    pub trail_start_color: Color,
    pub trail_end_color: Color,
    pub core_color: Color,
}

impl ShootingStar {
    // Heading is drawn from [0.3, 0.8) * PI; canvas y grows downward so every
    // heading in that arc has a positive y component
    pub const MIN_HEADING: f64 = 0.3 * PI;
    pub const MAX_HEADING: f64 = 0.8 * PI;

    pub fn spawn<R: Rng + ?Sized>(
        config: &StarConfig,
        viewport: Viewport,
        now_ms: f64,
        rng: &mut R,
    ) -> ShootingStar {
        let x = sample::uniform(rng, 0.0, viewport.width);
        let y = sample::uniform(rng, 0.0, viewport.height * 0.5);
        let heading = sample::uniform(rng, Self::MIN_HEADING, Self::MAX_HEADING);
        let speed = sample::uniform(rng, config.min_speed, config.max_speed);

        ShootingStar {
            pos: [x, y],
            vel: [heading.cos() * speed, heading.sin() * speed],
            life: 1.0,
            spawned_at_ms: now_ms,
            trail_length: sample::pick(rng, config.trail_lengths),
            trail_width: sample::pick(rng, config.trail_widths),
            core_radius: sample::pick(rng, config.core_radii),
            trail_start_color: sample::pick(rng, config.trail_start_colors),
            trail_end_color: sample::pick(rng, config.trail_end_colors),
            core_color: sample::pick(rng, config.core_colors),
        }
    }

    // Position moves one velocity unit per frame; life decays with wall-clock
    // time so the lifespan holds at any refresh rate
    pub fn advance(&mut self, now_ms: f64, lifespan_ms: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        let age_ms = (now_ms - self.spawned_at_ms).max(0.0);
        self.life = self.life.min(1.0 - age_ms / lifespan_ms);
    }

    pub fn is_alive(&self, viewport: Viewport) -> bool {
        self.life > 0.0 && viewport.contains(self.pos)
    }

    // Start of the trail, `trail_length` units behind the star along its heading
    pub fn trail_tail(&self) -> [f64; 2] {
        let vel = glm::vec2(self.vel[0], self.vel[1]);
        if glm::length(&vel) <= 0.0 {
            return self.pos;
        }
        let offset = glm::normalize(&vel) * self.trail_length;
        [self.pos[0] - offset.x, self.pos[1] - offset.y]
    }
}

// Time gate in front of the spawn coin flip. Every attempt past the interval
// resets the timer, whether or not it spawned anything.
#[derive(Clone, Debug)]
pub struct SpawnGate {
    last_attempt_ms: f64,
}

impl SpawnGate {
    pub fn new(started_at_ms: f64) -> Self {
        SpawnGate {
            last_attempt_ms: started_at_ms,
        }
    }

    pub fn last_attempt_ms(&self) -> f64 {
        self.last_attempt_ms
    }

    // Draws from `rng` only when an attempt is made
    pub fn try_spawn<R: Rng + ?Sized>(&mut self, config: &StarConfig, now_ms: f64, rng: &mut R) -> bool {
        if now_ms - self.last_attempt_ms <= config.spawn_rate_ms {
            return false;
        }
        self.last_attempt_ms = now_ms;
        rng.gen::<f64>() < config.spawn_chance
    }
}

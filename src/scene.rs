// Simulation state for one mounted backdrop: the dot field, the live
// shooting stars and the spawn gate. Created on mount, stepped once per
// animation frame, dropped on unmount. Nothing here touches the DOM.

use crate::config::BackdropConfig;
use crate::error::ConfigError;
use crate::dot::{self, Dot};
use crate::shooting_star::{ShootingStar, SpawnGate};
use crate::viewport::Viewport;
use rand::Rng;

pub struct Scene {
    config: BackdropConfig,
    viewport: Viewport,
    dots: Vec<Dot>,
    stars: Vec<ShootingStar>,
    gate: SpawnGate,
    frame_count: u64,
}

impl Scene {
    // Rejects configs with empty option lists before anything is sampled
    pub fn new<R: Rng + ?Sized>(
        config: BackdropConfig,
        viewport: Viewport,
        started_at_ms: f64,
        rng: &mut R,
    ) -> Result<Scene, ConfigError> {
        config.validate()?;
        let dots = dot::create_field(config.dots.count, viewport, &config.dots, rng);
        Ok(Scene {
            config,
            viewport,
            dots,
            stars: Vec::new(),
            gate: SpawnGate::new(started_at_ms),
            frame_count: 0,
        })
    }

    // Spawn gate, then stars (dropping the expired and the off-screen ones),
    // then dots
    pub fn step<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) {
        self.frame_count += 1;

        if self.gate.try_spawn(&self.config.stars, now_ms, rng) {
            self.spawn_star(now_ms, rng);
        }

        let lifespan_ms = self.config.stars.lifespan_ms();
        let viewport = self.viewport;
        for star in self.stars.iter_mut() {
            star.advance(now_ms, lifespan_ms);
        }
        self.stars.retain(|star| star.is_alive(viewport));

        for dot in self.dots.iter_mut() {
            dot.advance(viewport);
        }
    }

    // Bypasses the gate
    pub fn spawn_star<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) {
        let star = ShootingStar::spawn(&self.config.stars, self.viewport, now_ms, rng);
        log::trace!("shooting star spawned at ({:.0}, {:.0})", star.pos[0], star.pos[1]);
        self.stars.push(star);
    }

    // Whole dot field is rebuilt and every live star dropped
    pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.viewport = viewport;
        self.dots = dot::create_field(self.config.dots.count, viewport, &self.config.dots, rng);
        self.stars.clear();
        log::debug!(
            "scene reset to {}x{} with {} dots",
            viewport.width,
            viewport.height,
            self.dots.len()
        );
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn stars(&self) -> &[ShootingStar] {
        &self.stars
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

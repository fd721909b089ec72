// Compile-time tunables for the backdrop. There is no runtime override, edit
// `DEFAULT` to change the look of the page.

use crate::color::Color;
use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct DotConfig {
    pub count: usize,
    pub min_speed: f64,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub colors: &'static [Color],
}

#[derive(Clone, Debug)]
pub struct StarConfig {
    // Milliseconds between spawn attempts
    pub spawn_rate_ms: f64,
    // Probability that an attempt spawns a star
    pub spawn_chance: f64,
    pub trail_lengths: &'static [f64],
    pub trail_widths: &'static [f64],
    pub core_radii: &'static [f64],
    pub lifespan_secs: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub trail_start_colors: &'static [Color],
    pub trail_end_colors: &'static [Color],
    pub core_colors: &'static [Color],
}

#[derive(Clone, Debug)]
pub struct BackdropConfig {
    pub dots: DotConfig,
    pub stars: StarConfig,
    pub background: Color,
    // Opacity of the per-frame overlay, lower values leave longer trails
    pub overlay_alpha: f64,
}

const CYAN: Color = Color::rgb(100, 200, 255);
const ORANGE: Color = Color::rgb(255, 200, 100);
const PURPLE: Color = Color::rgb(200, 100, 255);

pub const DEFAULT: BackdropConfig = BackdropConfig {
    dots: DotConfig {
        count: 500,
        min_speed: 0.05,
        max_speed: 0.2,
        min_radius: 1.0,
        max_radius: 2.5,
        colors: &[
            Color::WHITE,
            Color::from_u32(0xfffdc5ff),
            // lightblue
            Color::rgb(173, 216, 230),
        ],
    },
    stars: StarConfig {
        spawn_rate_ms: 1500.0,
        spawn_chance: 0.5,
        trail_lengths: &[150.0],
        trail_widths: &[8.0],
        core_radii: &[8.0],
        lifespan_secs: 2.0,
        min_speed: 10.0,
        max_speed: 15.0,
        trail_start_colors: &[CYAN, ORANGE, PURPLE],
        trail_end_colors: &[CYAN, ORANGE, PURPLE],
        core_colors: &[
            Color::rgb(150, 220, 255),
            Color::rgb(255, 220, 150),
            Color::rgb(220, 150, 255),
        ],
    },
    background: Color::BLACK,
    overlay_alpha: 0.95,
};

impl Default for BackdropConfig {
    fn default() -> Self {
        DEFAULT
    }
}

impl BackdropConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dots.validate()?;
        self.stars.validate()?;
        check_probability("overlay_alpha", self.overlay_alpha)
    }
}

impl DotConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_empty("dots.colors", self.colors)?;
        check_range("dots.speed", self.min_speed, self.max_speed)?;
        check_range("dots.radius", self.min_radius, self.max_radius)
    }
}

impl StarConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_rate_ms.is_nan() || self.spawn_rate_ms <= 0.0 {
            return Err(ConfigError::NotPositive("stars.spawn_rate_ms"));
        }
        if self.lifespan_secs.is_nan() || self.lifespan_secs <= 0.0 {
            return Err(ConfigError::NotPositive("stars.lifespan_secs"));
        }
        check_probability("stars.spawn_chance", self.spawn_chance)?;
        check_range("stars.speed", self.min_speed, self.max_speed)?;
        check_non_empty("stars.trail_lengths", self.trail_lengths)?;
        check_non_empty("stars.trail_widths", self.trail_widths)?;
        check_non_empty("stars.core_radii", self.core_radii)?;
        check_non_empty("stars.trail_start_colors", self.trail_start_colors)?;
        check_non_empty("stars.trail_end_colors", self.trail_end_colors)?;
        check_non_empty("stars.core_colors", self.core_colors)
    }

    pub fn lifespan_ms(&self) -> f64 {
        self.lifespan_secs * 1000.0
    }
}

fn check_non_empty<T>(name: &'static str, options: &[T]) -> Result<(), ConfigError> {
    if options.is_empty() {
        Err(ConfigError::EmptyOptions(name))
    } else {
        Ok(())
    }
}

fn check_range(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min < 0.0 {
        return Err(ConfigError::Negative(name));
    }
    if min > max {
        return Err(ConfigError::InvertedRange { name, min, max });
    }
    Ok(())
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::NotAProbability { name, value })
    }
}

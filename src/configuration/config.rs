//! Configuration types for loading swarm scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – run length, reporting cadence and the time-step clock
//! - [`ParametersConfig`] – physical constants, cutoffs and the world bound
//! - [`TrailConfig`]      – trail length, sampling gate and taper (optional)
//! - [`SpawnConfig`]      – seeded random constellation (optional)
//! - [`BodyConfig`]       – explicit initial state for individual bodies (optional)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   ticks: 600
//!   report_every: 60
//!   clock:
//!     kind: fixed
//!     dt: 1.0                 # or `{ kind: frame, time_scale: 30.0, max_delta: 2.0 }`
//!
//! parameters:
//!   G: 0.667                  # gravitational constant
//!   interaction_radius: 5000.0
//!   max_force: 1.0e5          # per-pair force clamp
//!   world_bound: 10000.0      # half-width of the bounding cube
//!   # shape_constant: 4.18879 # mass = k * r^3, defaults to 4/3 pi
//!
//! trail:
//!   length: 10
//!   spacing_factor: 0.5       # admit when moved more than radius * factor
//!   angle_threshold: 1.0      # or when turning more than this (radians)
//!
//! spawn:
//!   count: 100
//!   seed: 7
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     radius: 50.0
//!     kind: star
//! ```
//!
//! [`ScenarioConfig::validate`] checks the values before the runtime
//! `Scenario` is built from them.

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::body::BodyKind;
use crate::simulation::params::SPHERE_RATIO;
use crate::simulation::snapshot::ColorHandle;
use crate::simulation::trail::TrailParams;

/// Problems found while validating a [`ScenarioConfig`]
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("body {index}: `{field}` must have 3 components, got {len}")]
    WrongArity { index: usize, field: &'static str, len: usize },
    #[error("body {index}: radius {radius} must be positive")]
    NonPositiveRadius { index: usize, radius: f64 },
    #[error("`{0}` must be positive")]
    NonPositive(&'static str),
    #[error("`{0}` must not be negative")]
    Negative(&'static str),
    #[error("`{0}` must be finite")]
    NonFinite(&'static str),
    #[error("trail length must be at least 1")]
    EmptyTrail,
    #[error("trail taper_floor {0} must be between 0.0 and 1.0")]
    TaperOutOfRange(f64),
    #[error("spawn min_radius {min} is larger than max_radius {max}")]
    RadiusRange { min: f64, max: f64 },
}

/// Where the per-tick delta comes from
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClockConfig {
    Fixed { dt: f64 }, // same delta every tick
    Frame { time_scale: f64, max_delta: f64 }, // scaled wall-clock seconds
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig::Fixed { dt: 1.0 }
    }
}

/// Run settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub ticks: u64,
    pub report_every: u64,
    pub clock: ClockConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            report_every: 60,
            clock: ClockConfig::default(),
        }
    }
}

/// Global physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,                  // gravitational constant
    pub interaction_radius: f64, // pairs farther apart never interact
    pub max_force: f64,          // per-pair force clamp
    pub world_bound: f64,        // half-width of the reflecting cube
    #[serde(default = "default_shape_constant")]
    pub shape_constant: f64,     // mass = shape_constant * radius^3
}

fn default_shape_constant() -> f64 {
    SPHERE_RATIO
}

/// Trail settings, every field optional
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TrailConfig {
    pub length: usize,
    pub spacing_factor: f64,
    pub angle_threshold: f64,
    pub width_factor: f64,
    pub taper_floor: f64,
    pub min_acceleration: Option<f64>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        let p = TrailParams::default();
        Self {
            length: p.length,
            spacing_factor: p.spacing_factor,
            angle_threshold: p.angle_threshold,
            width_factor: p.width_factor,
            taper_floor: p.taper_floor,
            min_acceleration: p.min_acceleration,
        }
    }
}

impl From<&TrailConfig> for TrailParams {
    fn from(cfg: &TrailConfig) -> Self {
        TrailParams {
            length: cfg.length,
            spacing_factor: cfg.spacing_factor,
            angle_threshold: cfg.angle_threshold,
            width_factor: cfg.width_factor,
            taper_floor: cfg.taper_floor,
            min_acceleration: cfg.min_acceleration,
        }
    }
}

/// Central star of a spawned constellation
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StarConfig {
    pub radius: f64,
    pub offset_fraction: f64, // star lands within spawn_range * offset_fraction of the origin
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            offset_fraction: 0.1,
        }
    }
}

/// Seeded random constellation
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SpawnConfig {
    pub count: usize,
    pub seed: u64,            // deterministic seed to make runs reproducible
    pub spawn_range: f64,     // planets start inside [-range, range]^3
    pub start_speed: f64,     // velocity components inside [-speed, speed]
    pub min_radius: f64,
    pub max_radius: f64,
    pub star: Option<StarConfig>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 0,
            spawn_range: 5000.0,
            start_speed: 5.0,
            min_radius: 3.0,
            max_radius: 20.0,
            star: Some(StarConfig::default()),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position
    #[serde(default = "zero3")]
    pub v: Vec<f64>, // initial velocity
    pub radius: f64, // mass follows from the radius
    #[serde(default)]
    pub kind: BodyKind,
    pub color: Option<ColorHandle>,
    pub reflects_at_boundary: Option<bool>,
}

fn zero3() -> Vec<f64> {
    vec![0.0; 3]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub trail: TrailConfig,
    pub spawn: Option<SpawnConfig>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.engine.clock {
            ClockConfig::Fixed { dt } => positive("engine.clock.dt", dt)?,
            ClockConfig::Frame { time_scale, max_delta } => {
                non_negative("engine.clock.time_scale", time_scale)?;
                non_negative("engine.clock.max_delta", max_delta)?;
            }
        }

        let p = &self.parameters;
        positive("parameters.interaction_radius", p.interaction_radius)?;
        positive("parameters.world_bound", p.world_bound)?;
        positive("parameters.shape_constant", p.shape_constant)?;
        non_negative("parameters.max_force", p.max_force)?;

        let t = &self.trail;
        if t.length == 0 {
            return Err(ConfigError::EmptyTrail);
        }
        if !(0.0..=1.0).contains(&t.taper_floor) {
            return Err(ConfigError::TaperOutOfRange(t.taper_floor));
        }
        non_negative("trail.spacing_factor", t.spacing_factor)?;
        non_negative("trail.angle_threshold", t.angle_threshold)?;

        if let Some(s) = &self.spawn {
            non_negative("spawn.spawn_range", s.spawn_range)?;
            finite("spawn.spawn_range", s.spawn_range)?;
            non_negative("spawn.start_speed", s.start_speed)?;
            finite("spawn.start_speed", s.start_speed)?;
            positive("spawn.min_radius", s.min_radius)?;
            if s.min_radius > s.max_radius {
                return Err(ConfigError::RadiusRange { min: s.min_radius, max: s.max_radius });
            }
            if let Some(star) = &s.star {
                positive("spawn.star.radius", star.radius)?;
                non_negative("spawn.star.offset_fraction", star.offset_fraction)?;
                // the star's spawn cube is the product of the two
                finite("spawn.spawn_range * spawn.star.offset_fraction", s.spawn_range * star.offset_fraction)?;
            }
        }

        for (index, b) in self.bodies.iter().enumerate() {
            for (field, v) in [("x", &b.x), ("v", &b.v)] {
                if v.len() != 3 {
                    return Err(ConfigError::WrongArity { index, field, len: v.len() });
                }
            }
            if !(b.radius > 0.0) {
                return Err(ConfigError::NonPositiveRadius { index, radius: b.radius });
            }
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive(name))
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite(name))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "
parameters:
  G: 1.0
  interaction_radius: 100.0
  max_force: 10.0
  world_bound: 50.0
bodies:
  - x: [1.0, 2.0, 3.0]
    radius: 0.5
  - x: [0.0, 0.0, 0.0]
    v: [0.0, 1.0, 0.0]
    radius: 4.0
    kind: star
    color: [255, 0, 0]
";

    #[test]
    fn parses_with_defaults() {
        let cfg = ScenarioConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(cfg.engine.ticks, 600);
        assert_eq!(cfg.engine.clock, ClockConfig::Fixed { dt: 1.0 });
        assert_eq!(cfg.trail.length, 10);
        assert!((cfg.parameters.shape_constant - SPHERE_RATIO).abs() < 1e-12);
        assert!(cfg.spawn.is_none());

        assert_eq!(cfg.bodies.len(), 2);
        assert_eq!(cfg.bodies[0].v, vec![0.0; 3]);
        assert_eq!(cfg.bodies[0].kind, BodyKind::Planet);
        assert_eq!(cfg.bodies[1].kind, BodyKind::Star);
        assert_eq!(cfg.bodies[1].color, Some(ColorHandle([255, 0, 0])));
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn parses_frame_clock() {
        let text = format!(
            "{}engine:\n  clock:\n    kind: frame\n    time_scale: 30.0\n    max_delta: 2.0\n",
            MINIMAL
        );
        let cfg = ScenarioConfig::from_yaml(&text).unwrap();
        assert_eq!(cfg.engine.clock, ClockConfig::Frame { time_scale: 30.0, max_delta: 2.0 });
        assert_eq!(cfg.engine.report_every, 60);
    }

    #[test]
    fn parses_fixed_clock() {
        let text = format!("{}engine:\n  clock: {{ kind: fixed, dt: 0.5 }}\n", MINIMAL);
        let cfg = ScenarioConfig::from_yaml(&text).unwrap();
        assert_eq!(cfg.engine.clock, ClockConfig::Fixed { dt: 0.5 });
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_fixed_dt() {
        let mut cfg = ScenarioConfig::from_yaml(MINIMAL).unwrap();
        cfg.engine.clock = ClockConfig::Fixed { dt: 0.0 };
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositive("engine.clock.dt")));

        // a paused frame clock is fine
        cfg.engine.clock = ClockConfig::Frame { time_scale: 0.0, max_delta: 1.0 };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_bodies() {
        let mut cfg = ScenarioConfig::from_yaml(MINIMAL).unwrap();
        cfg.bodies[1].x = vec![0.0, 0.0];
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::WrongArity { index: 1, field: "x", len: 2 })
        );

        let mut cfg = ScenarioConfig::from_yaml(MINIMAL).unwrap();
        cfg.bodies[0].radius = 0.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositiveRadius { index: 0, radius: 0.0 })
        );
    }

    #[test]
    fn rejects_bad_trail_and_spawn() {
        let mut cfg = ScenarioConfig::from_yaml(MINIMAL).unwrap();
        cfg.trail.length = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyTrail));

        let mut cfg = ScenarioConfig::from_yaml(MINIMAL).unwrap();
        cfg.spawn = Some(SpawnConfig {
            min_radius: 30.0,
            ..SpawnConfig::default()
        });
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::RadiusRange { min: 30.0, max: 20.0 })
        );
    }

    #[test]
    fn rejects_overflowing_star_offset() {
        let mut cfg = ScenarioConfig::from_yaml(MINIMAL).unwrap();
        cfg.spawn = Some(SpawnConfig {
            spawn_range: 1.0e300,
            star: Some(StarConfig {
                radius: 50.0,
                offset_fraction: 1.0e10,
            }),
            ..SpawnConfig::default()
        });
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonFinite("spawn.spawn_range * spawn.star.offset_fraction"))
        );

        let mut cfg = ScenarioConfig::from_yaml(MINIMAL).unwrap();
        cfg.spawn = Some(SpawnConfig {
            start_speed: f64::INFINITY,
            ..SpawnConfig::default()
        });
        assert_eq!(cfg.validate(), Err(ConfigError::NonFinite("spawn.start_speed")));
    }
}

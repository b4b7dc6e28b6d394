//! Body state: the unit of simulation
//!
//! Planets and the central star are the same type. They differ only in their
//! initial parameters and in the capability flags carried by `BodyKind`.

use std::fmt;

use serde::Deserialize;

use super::forces::PairForce;
use super::integrator::{euler_step, reflect_at_boundary};
use super::snapshot::ColorHandle;
use super::trail::{Trail, TrailParams};
use super::vector::NVec3;

/// Stable identity of a body inside its swarm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    #[default]
    Planet,
    /// Heavy, usually resting gravitational center; leaves no trail
    Star,
}

impl BodyKind {
    pub fn emits_trail(self) -> bool {
        matches!(self, BodyKind::Planet)
    }
}

/// Initial state for a new body
#[derive(Debug, Clone)]
pub struct BodyParams {
    pub position: NVec3,
    pub velocity: NVec3,
    pub radius: f64,
    pub kind: BodyKind,
    pub color: ColorHandle,
    pub reflects_at_boundary: Option<bool>, // None -> reflects
}

impl BodyParams {
    pub fn planet(position: NVec3, velocity: NVec3, radius: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
            kind: BodyKind::Planet,
            color: ColorHandle::PLANET,
            reflects_at_boundary: None,
        }
    }

    pub fn star(position: NVec3, radius: f64) -> Self {
        Self {
            position,
            velocity: NVec3::zeros(),
            radius,
            kind: BodyKind::Star,
            color: ColorHandle::STAR,
            reflects_at_boundary: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    pub position: NVec3,
    pub velocity: NVec3,
    force: NVec3, // accumulated this tick, consumed by integrate
    acceleration: NVec3, // last applied, render hint only
    radius: f64,
    mass: f64,
    kind: BodyKind,
    reflects: bool,
    color: ColorHandle,
    trail: Trail,
}

impl Body {
    /// `mass = shape_constant * radius^3`
    pub fn new(id: BodyId, params: BodyParams, shape_constant: f64, trail_params: &TrailParams) -> Self {
        let BodyParams { position, velocity, radius, kind, color, reflects_at_boundary } = params;
        Self {
            id,
            position,
            velocity,
            force: NVec3::zeros(),
            acceleration: NVec3::zeros(),
            radius,
            mass: shape_constant * radius * radius * radius,
            kind,
            reflects: reflects_at_boundary.unwrap_or(true),
            color,
            trail: Trail::new(position, radius, trail_params),
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn color(&self) -> ColorHandle {
        self.color
    }

    pub fn force(&self) -> NVec3 {
        self.force
    }

    pub fn acceleration(&self) -> NVec3 {
        self.acceleration
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn emits_trail(&self) -> bool {
        self.kind.emits_trail()
    }

    pub fn reflects_at_boundary(&self) -> bool {
        self.reflects
    }

    pub fn momentum(&self) -> NVec3 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    /// Deposit the pull of this body onto `other` under `law`.
    /// `self` is left untouched; the reverse pair gives it its share.
    pub fn accumulate_force_from(&self, other: &mut Body, law: &impl PairForce) {
        if let Some(f) = law.pair_force(other, self) {
            other.force += f;
        }
    }

    /// Consume the accumulated force and advance one step of `dt`
    pub fn integrate(&mut self, dt: f64, world_bound: f64) {
        if dt == 0.0 {
            // paused tick: the force is still consumed, nothing is applied
            self.force = NVec3::zeros();
            self.acceleration = NVec3::zeros();
            return;
        }

        if self.reflects {
            reflect_at_boundary(&self.position, &mut self.velocity, world_bound);
        }

        self.acceleration = euler_step(&mut self.position, &mut self.velocity, &self.force, self.mass, dt);
        self.force = NVec3::zeros();

        if self.emits_trail() {
            self.trail.admit_sample(&self.position);
        }
    }

    /// Whether the render layer should draw this body's trail this tick
    pub fn trail_visible(&self, params: &TrailParams) -> bool {
        if !self.emits_trail() {
            return false;
        }
        match params.min_acceleration {
            Some(min) => self.acceleration.magnitude() > min,
            None => true,
        }
    }
}

//! Physical and numerical parameters for the swarm
//!
//! `Parameters` holds the runtime settings fixed at initialization:
//! - gravitational constant and the two force cutoffs,
//! - the per-pair force clamp,
//! - the half-width of the bounding cube,
//! - the shape constant relating radius to mass

use std::f64::consts::PI;

use super::forces::NewtonianGravity;

/// Sphere volume ratio, `mass = k * r^3`
pub const SPHERE_RATIO: f64 = 4.0 / 3.0 * PI;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub interaction_radius: f64, // pair cutoff distance
    pub max_force: f64, // per-pair force clamp
    pub world_bound: f64, // bodies reflect at |x|, |y|, |z| >= world_bound
    pub shape_constant: f64, // k in mass = k * r^3
}

impl Parameters {
    pub fn gravity(&self) -> NewtonianGravity {
        NewtonianGravity {
            G: self.G,
            interaction_radius: self.interaction_radius,
            max_force: self.max_force,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 0.667,
            interaction_radius: 5000.0,
            max_force: 1.0e5,
            world_bound: 10000.0,
            shape_constant: SPHERE_RATIO,
        }
    }
}

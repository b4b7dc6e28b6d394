//! Pairwise force laws for the swarm
//!
//! A `PairForce` answers one question: what force does `source` deposit on
//! `target` this tick? `source.accumulate_force_from(target)` adds the answer
//! to the target, and the swarm's force pass runs it for every ordered pair.

use super::body::Body;
use super::vector::{NVec3, VectorExt};

/// A force contribution between two bodies
pub trait PairForce {
    /// Force on `target` due to `source`, or `None` when the pair does not interact
    fn pair_force(&self, target: &Body, source: &Body) -> Option<NVec3>;
}

/// Newtonian attraction with an interaction cutoff, a near-field cutoff and a
/// per-pair magnitude clamp
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub interaction_radius: f64, // pairs at or beyond this distance never interact
    pub max_force: f64, // magnitude clamp for a single pair
}

impl PairForce for NewtonianGravity {
    fn pair_force(&self, target: &Body, source: &Body) -> Option<NVec3> {
        // Skip self with self
        if target.id() == source.id() {
            return None;
        }

        // r points from target toward source, so the pull on target is along +r
        let r = source.position - target.position;
        let d = r.magnitude();

        if d >= self.interaction_radius {
            return None;
        }

        // Touching or overlapping bodies are left out of the force law.
        // This also guarantees d > 0 below whenever radii are positive.
        if d < target.radius() + source.radius() {
            return None;
        }

        let direction = r.try_unit().ok()?;

        // |F| = G * m_t * m_s / d^2
        let strength = self.G * target.mass() * source.mass() / (d * d);

        Some((direction * strength).limit(self.max_force))
    }
}

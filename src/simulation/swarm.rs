//! The swarm: owner of every body and driver of the per-tick update
//!
//! A tick runs in two passes that never interleave:
//! 1. force pass, every body accumulates the pull of every other body
//!    (all ordered pairs, O(n^2));
//! 2. integration pass, every body consumes its force and moves.
//!
//! Integrating a body before all forces are summed would let later bodies
//! see a half-updated field, so the passes stay strictly separate.

use log::trace;

use super::body::{Body, BodyId, BodyParams};
use super::forces::NewtonianGravity;
use super::params::Parameters;
use super::snapshot::BodySnapshot;
use super::trail::TrailParams;
use super::vector::NVec3;

#[derive(Debug, Clone)]
pub struct Swarm {
    bodies: Vec<Body>,
    next_id: u64,
    parameters: Parameters,
    gravity: NewtonianGravity,
    trail_params: TrailParams,
    t: f64, // simulated time
    ticks: u64,
}

impl Swarm {
    pub fn new(parameters: Parameters, trail_params: TrailParams) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 0,
            gravity: parameters.gravity(),
            parameters,
            trail_params,
            t: 0.0,
            ticks: 0,
        }
    }

    /// Create a body and hand out the next id
    pub fn spawn(&mut self, params: BodyParams) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;

        let body = Body::new(id, params, self.parameters.shape_constant, &self.trail_params);
        self.bodies.push(body);
        id
    }

    /// Advance every body by `dt`
    pub fn tick(&mut self, dt: f64) {
        self.accumulate_forces();

        let bound = self.parameters.world_bound;
        for b in self.bodies.iter_mut() {
            b.integrate(dt, bound);
        }

        self.t += dt;
        self.ticks += 1;
        trace!("tick {} done, t = {:.3}, dt = {:.4}", self.ticks, self.t, dt);
    }

    fn accumulate_forces(&mut self) {
        let n = self.bodies.len();
        for i in 0..n {
            // body i pulls on everyone else; the (j, i) pairs come from later iterations
            let (before, rest) = self.bodies.split_at_mut(i);
            let Some((source, after)) = rest.split_first_mut() else {
                continue;
            };
            for other in before.iter_mut().chain(after.iter_mut()) {
                source.accumulate_force_from(other, &self.gravity);
            }
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn trail_params(&self) -> &TrailParams {
        &self.trail_params
    }

    /// Render view of every body, in insertion order
    pub fn snapshots(&self) -> impl Iterator<Item = BodySnapshot<'_>> + '_ {
        self.bodies
            .iter()
            .map(move |b| BodySnapshot::of(b, &self.trail_params))
    }

    // diagnostics ==========================================================================

    pub fn total_momentum(&self) -> NVec3 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn max_speed(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.velocity.norm())
            .fold(0.0, f64::max)
    }

    /// Mass-weighted mean position, `None` for an empty swarm
    pub fn center_of_mass(&self) -> Option<NVec3> {
        let total: f64 = self.bodies.iter().map(Body::mass).sum();
        if total <= 0.0 {
            return None;
        }
        let weighted: NVec3 = self.bodies.iter().map(|b| b.position * b.mass()).sum();
        Some(weighted / total)
    }
}

//! Fixed-step integration for a single body
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked by the
//! acceleration first, then the position drifts with the new velocity.
//! Boundary reflection runs before the kick, on the previous velocity.

use super::vector::NVec3;

/// Elastic reflection off the axis-aligned cube `[-bound, bound]^3`.
/// Each axis is handled on its own.
pub fn reflect_at_boundary(position: &NVec3, velocity: &mut NVec3, bound: f64) {
    for axis in 0..3 {
        if position[axis].abs() >= bound {
            velocity[axis] = -velocity[axis];
        }
    }
}

/// Advance `position`/`velocity` by `dt` under `force` acting on `mass`.
/// Returns the acceleration that was applied.
pub fn euler_step(position: &mut NVec3, velocity: &mut NVec3, force: &NVec3, mass: f64, dt: f64) -> NVec3 {
    // a = F / m
    let acceleration = force / mass;

    // Kick: v_n+1 = v_n + dt * a
    *velocity += acceleration * dt;

    // Drift: x_n+1 = x_n + dt * v_n+1
    *position += *velocity * dt;

    acceleration
}

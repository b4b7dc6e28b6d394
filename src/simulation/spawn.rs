//! Seeded random constellation: a cloud of planets around one heavy star
//!
//! Planets get uniform positions and velocities inside a cube and a radius
//! drawn from a distribution skewed toward small bodies. The star rests near
//! the origin. The same seed always produces the same swarm.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::SpawnConfig;
use super::body::BodyParams;
use super::snapshot::ColorHandle;
use super::swarm::Swarm;
use super::vector::NVec3;

/// Add the bodies described by `cfg` to `swarm`
pub fn spawn_constellation(swarm: &mut Swarm, cfg: &SpawnConfig) {
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    for _ in 0..cfg.count {
        let radius = weighted_radius(&mut rng, cfg.min_radius, cfg.max_radius);
        let position = random_vector(&mut rng, cfg.spawn_range);
        let velocity = random_vector(&mut rng, cfg.start_speed);
        let color = ColorHandle([
            rng.random_range(120..=220),
            rng.random_range(140..=190),
            rng.random_range(140..=190),
        ]);

        swarm.spawn(BodyParams {
            color,
            ..BodyParams::planet(position, velocity, radius)
        });
    }

    if let Some(star) = &cfg.star {
        let position = random_vector(&mut rng, cfg.spawn_range * star.offset_fraction);
        let id = swarm.spawn(BodyParams::star(position, star.radius));
        debug!("spawned star {} at {:?}", id, position);
    }

    debug!("spawned {} planets (seed {})", cfg.count, cfg.seed);
}

/// `(min - 1) + round(max / (u * max + min))` for uniform `u` in [0, 1).
/// Ranges over roughly `[min, min - 1 + max / min]`, favoring the low end.
pub fn weighted_radius(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    let u: f64 = rng.random();
    (min - 1.0) + (max / (u * max + min)).round()
}

fn random_vector(rng: &mut impl Rng, range: f64) -> NVec3 {
    NVec3::new(
        rng.random_range(-range..=range),
        rng.random_range(-range..=range),
        rng.random_range(-range..=range),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_radius_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let r = weighted_radius(&mut rng, 3.0, 20.0);
            assert!((3.0..=9.0).contains(&r), "radius {} out of range", r);
        }
    }
}

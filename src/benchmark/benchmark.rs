use std::time::Instant;

use crate::simulation::body::BodyParams;
use crate::simulation::params::Parameters;
use crate::simulation::swarm::Swarm;
use crate::simulation::trail::TrailParams;
use crate::simulation::vector::NVec3;

/// Helper to build a deterministic swarm of size `n`
fn make_swarm(n: usize) -> Swarm {
    let parameters = Parameters {
        // everyone inside everyone's interaction radius, so no pair is skipped
        interaction_radius: 1.0e6,
        ..Parameters::default()
    };
    let mut swarm = Swarm::new(parameters, TrailParams::default());

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5000.0,
            (i_f * 0.13).cos() * 5000.0,
            (i_f * 0.07).sin() * 5000.0,
        );
        swarm.spawn(BodyParams::planet(x, NVec3::zeros(), 3.0));
    }

    swarm
}

/// Time `Swarm::tick` for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick_curve() {
    println!("N,tick_ms,pairs_per_us");

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few ticks to smooth noise
        let ticks = if n <= 800 { 10 } else { 2 };

        let mut swarm = make_swarm(n);

        // Warm-up
        swarm.tick(1.0);

        let t0 = Instant::now();
        for _ in 0..ticks {
            swarm.tick(1.0);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / ticks as f64;
        let pairs = (n * (n - 1)) as f64;

        println!("{},{:.6},{:.3}", n, ms, pairs / (ms * 1000.0));
    }
}

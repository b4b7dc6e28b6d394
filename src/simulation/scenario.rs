//! Build fully-initialized swarm scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - run settings (`Engine`)
//! - the swarm, with explicit bodies first and spawned ones after
//! - the clock that feeds each tick its delta
//!
//! `Scenario::run` drives a headless run and logs periodic reports

use std::fmt;

use log::info;

use crate::configuration::config::{BodyConfig, ClockConfig, ConfigError, ScenarioConfig};
use crate::simulation::body::{BodyKind, BodyParams};
use crate::simulation::clock::{FixedClock, FrameClock, SimulationClock};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::spawn::spawn_constellation;
use crate::simulation::swarm::Swarm;
use crate::simulation::trail::TrailParams;
use crate::simulation::vector::NVec3;

pub struct Scenario {
    pub engine: Engine,
    pub swarm: Swarm,
    pub clock: Box<dyn SimulationClock>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            interaction_radius: p_cfg.interaction_radius,
            max_force: p_cfg.max_force,
            world_bound: p_cfg.world_bound,
            shape_constant: p_cfg.shape_constant,
        };
        let trail_params = TrailParams::from(&cfg.trail);

        let mut swarm = Swarm::new(parameters, trail_params);

        // Bodies: map `BodyConfig` -> runtime `BodyParams` using nalgebra vectors
        for bc in &cfg.bodies {
            swarm.spawn(body_params(bc));
        }
        if let Some(spawn) = &cfg.spawn {
            spawn_constellation(&mut swarm, spawn);
        }

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            ticks: cfg.engine.ticks,
            report_every: cfg.engine.report_every,
        };

        let clock: Box<dyn SimulationClock> = match cfg.engine.clock {
            ClockConfig::Fixed { dt } => Box::new(FixedClock { dt }),
            ClockConfig::Frame { time_scale, max_delta } => Box::new(FrameClock::new(time_scale, max_delta)),
        };

        info!("built scenario with {} bodies, {} ticks", swarm.len(), engine.ticks);

        Ok(Self {
            engine,
            swarm,
            clock,
        })
    }

    /// Advance one tick with the next delta from the clock
    pub fn step(&mut self) {
        let dt = self.clock.next_delta();
        self.swarm.tick(dt);
    }

    /// Run `engine.ticks` ticks and return the final report
    pub fn run(&mut self) -> Report {
        for tick in 1..=self.engine.ticks {
            self.step();
            if self.engine.should_report(tick) {
                info!("{}", Report::of(&self.swarm));
            }
        }
        Report::of(&self.swarm)
    }
}

fn body_params(bc: &BodyConfig) -> BodyParams {
    let position = NVec3::new(bc.x[0], bc.x[1], bc.x[2]);
    let velocity = NVec3::new(bc.v[0], bc.v[1], bc.v[2]);

    let mut params = match bc.kind {
        BodyKind::Planet => BodyParams::planet(position, velocity, bc.radius),
        BodyKind::Star => BodyParams {
            velocity,
            ..BodyParams::star(position, bc.radius)
        },
    };
    if let Some(color) = bc.color {
        params.color = color;
    }
    params.reflects_at_boundary = bc.reflects_at_boundary;
    params
}

/// Swarm-wide diagnostics at one point of a run
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub tick: u64,
    pub time: f64,
    pub kinetic_energy: f64,
    pub momentum: NVec3,
    pub max_speed: f64,
}

impl Report {
    pub fn of(swarm: &Swarm) -> Self {
        Self {
            tick: swarm.ticks(),
            time: swarm.time(),
            kinetic_energy: swarm.kinetic_energy(),
            momentum: swarm.total_momentum(),
            max_speed: swarm.max_speed(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {:6}  t = {:10.3}  KE = {:12.4e}  |p| = {:12.4e}  max |v| = {:8.3}",
            self.tick,
            self.time,
            self.kinetic_energy,
            self.momentum.norm(),
            self.max_speed
        )
    }
}

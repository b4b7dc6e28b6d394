pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::vector::{NVec3, VectorExt, DegenerateVectorError};
pub use simulation::trail::{Trail, TrailParams, TrailSegment, TrailSegments};
pub use simulation::body::{Body, BodyId, BodyKind, BodyParams};
pub use simulation::forces::{PairForce, NewtonianGravity};
pub use simulation::params::{Parameters, SPHERE_RATIO};
pub use simulation::swarm::Swarm;
pub use simulation::snapshot::{BodySnapshot, ColorHandle};
pub use simulation::clock::{SimulationClock, FixedClock, FrameClock};
pub use simulation::scenario::{Scenario, Report};

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, TrailConfig, SpawnConfig, StarConfig, BodyConfig, ClockConfig, ConfigError};

pub use benchmark::benchmark::bench_tick_curve;

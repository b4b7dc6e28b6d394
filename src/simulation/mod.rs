pub mod vector;
pub mod trail;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod body;
pub mod snapshot;
pub mod swarm;
pub mod clock;
pub mod spawn;
pub mod scenario;

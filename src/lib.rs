pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::environment::PlanetModel;
pub use control::flight_plan::{FlightCommand, MomentOfInertia, Quants, ShipParams, ShipPosition};
pub use control::simulation::{FlightSimulation, StepResult};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::atmosphere::Atmosphere;
pub use trajectory_system::forces::ForceModel;
pub use trajectory_system::kinematics::StepIntegrator;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

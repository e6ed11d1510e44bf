use nalgebra::Vector3;

/// Moment of inertia about the body axes, kg·km². A zero component locks
/// that axis for every step the command is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentOfInertia {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MomentOfInertia {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        MomentOfInertia { x, y, z }
    }

    pub fn locked() -> Self {
        MomentOfInertia::new(0.0, 0.0, 0.0)
    }
}

/// One entry of the command schedule, held active until its delay budget
/// is exhausted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightCommand {
    pub impulse_value: f64, // fuel mass-flow rate while active, kg/s
    pub rotate_value: MomentOfInertia,
    pub delay_time: f64, // s this command stays active
}

impl FlightCommand {
    pub fn new(impulse_value: f64, rotate_value: MomentOfInertia, delay_time: f64) -> Self {
        FlightCommand {
            impulse_value,
            rotate_value,
            delay_time,
        }
    }
}

/// Static vehicle configuration. The flight plan must be non-empty and
/// cover the whole simulated horizon.
#[derive(Debug, Clone)]
pub struct ShipParams {
    pub edge_length: f64,      // km; cross-section and lever arm derive from it
    pub dry_mass: f64,         // kg
    pub fuel_mass: f64,        // kg
    pub specific_impulse: f64, // thrust per unit mass-flow rate, km/s
    pub flight_plan: Vec<FlightCommand>,
    pub max_overload: f64, // in units of local gravitational acceleration
    pub max_heating: f64,  // K
}

/// Initial kinematic state, supplied fully formed by an external loader.
#[derive(Debug, Clone, Copy)]
pub struct ShipPosition {
    pub position: Vector3<f64>,    // km from the planet center
    pub velocity: Vector3<f64>,    // km/s
    pub orientation: Vector3<f64>, // thrust direction reference
    pub moment: MomentOfInertia,
}

/// Discrete horizon: number of steps and the fixed step duration.
#[derive(Debug, Clone, Copy)]
pub struct Quants {
    pub number_of_quants: usize,
    pub quant_size: f64, // s
}

impl Quants {
    pub fn new(number_of_quants: usize, quant_size: f64) -> Self {
        Quants {
            number_of_quants,
            quant_size,
        }
    }
}

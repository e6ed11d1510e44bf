use nalgebra::Vector3;

use crate::{
    constants::REENTRY_HEATING_RADIUS,
    control::{
        environment::PlanetModel,
        flight_plan::{MomentOfInertia, ShipParams},
    },
    errors::SimulationError,
    trajectory_system::forces::ForceModel,
};

/// Stagnation-heating proxy: ambient temperature plus |v|²/2. A threshold
/// quantity, never integrated over time.
pub fn aerodynamic_heating(ambient_temperature: f64, velocity: Vector3<f64>) -> f64 {
    ambient_temperature + velocity.norm().powi(2) / 2.0
}

/// Advances the translational velocity by one time quantum and enforces
/// the structural and thermal safety envelope.
#[derive(Debug, Clone, Copy)]
pub struct StepIntegrator {
    pub forces: ForceModel,
}

impl StepIntegrator {
    pub fn new(planet: PlanetModel) -> Self {
        StepIntegrator {
            forces: ForceModel::new(planet),
        }
    }

    /// Semi-implicit Euler velocity update: the drag term enters through
    /// an effective decay rate `1/dt − drag_rate`, which keeps stiff drag
    /// at low altitude stable.
    ///
    /// A non-positive quantum passes the previous velocity through and a
    /// fully depleted vehicle yields the zero vector, both without force
    /// evaluation; the heating check runs on every path, the overload
    /// check only on the full update. The moment of inertia plays no role
    /// in translation and is threaded through untouched.
    pub fn next_velocity(
        &self,
        previous_velocity: Vector3<f64>,
        position: Vector3<f64>,
        orientation: Vector3<f64>,
        mass_flow_rate: f64,
        ship: &ShipParams,
        fuel_mass: f64,
        _moment: &MomentOfInertia,
        dt: f64,
        step: usize,
    ) -> Result<Vector3<f64>, SimulationError> {
        let planet = &self.forces.planet;
        let total_mass = ship.dry_mass + fuel_mass;
        let height = position.norm();
        let cross_section = ship.edge_length * ship.edge_length;

        let next = if dt <= 0.0 {
            previous_velocity
        } else if total_mass == 0.0 {
            Vector3::zeros()
        } else {
            let drag_rate = self.forces.atmosphere.air_density(height)?
                * previous_velocity.norm()
                * cross_section
                / (2.0 * total_mass);
            let carry_rate = 1.0 / dt - drag_rate;
            let thrust_rate =
                ForceModel::thrust_force(mass_flow_rate, ship.specific_impulse, previous_velocity)
                    .norm()
                    / total_mass;
            let gravity_rate = planet.mu() / height.powi(3);

            let next = (previous_velocity * carry_rate + orientation * thrust_rate
                - position * gravity_rate)
                * dt;

            // control-effort load: drag, thrust and gravity terms without
            // the 1/dt velocity carry
            let load = (-previous_velocity * drag_rate + orientation * thrust_rate
                - position * gravity_rate)
                .norm()
                / planet.gravity_at(height);
            if load > ship.max_overload {
                return Err(SimulationError::Overload {
                    load,
                    limit: ship.max_overload,
                    step,
                });
            }
            next
        };

        if height <= REENTRY_HEATING_RADIUS {
            let ambient = self.forces.atmosphere.temperature(height)?;
            let heating = aerodynamic_heating(ambient, next);
            if heating > ship.max_heating {
                return Err(SimulationError::Overheating {
                    heating,
                    limit: ship.max_heating,
                    step,
                });
            }
        }
        Ok(next)
    }
}

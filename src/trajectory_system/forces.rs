use nalgebra::Vector3;

use crate::{
    control::environment::PlanetModel, errors::SimulationError,
    trajectory_system::atmosphere::Atmosphere,
};

/// Gravity, drag and thrust acting on the vehicle, in kg·km/s².
#[derive(Debug, Clone, Copy)]
pub struct ForceModel {
    pub planet: PlanetModel,
    pub atmosphere: Atmosphere,
}

impl ForceModel {
    pub fn new(planet: PlanetModel) -> Self {
        ForceModel {
            planet,
            atmosphere: Atmosphere::new(planet),
        }
    }

    /// Inverse-square gravity, directed opposite the displacement from the
    /// planet center. Zero displacement yields the zero vector.
    pub fn gravity_force(&self, displacement: Vector3<f64>, ship_mass: f64) -> Vector3<f64> {
        let distance = displacement.norm();
        if distance == 0.0 {
            return Vector3::zeros();
        }
        let magnitude = self.planet.mu() * ship_mass / distance.powi(3);
        -displacement * magnitude
    }

    /// Quadratic drag opposing the velocity; the density is evaluated once
    /// per call at the given distance from the planet center.
    pub fn aerodynamic_force(
        &self,
        velocity: Vector3<f64>,
        cross_section: f64,
        height: f64,
    ) -> Result<Vector3<f64>, SimulationError> {
        let speed = velocity.norm();
        let density = self.atmosphere.air_density(height)?;
        Ok(velocity * (-density * speed * cross_section / 2.0))
    }

    /// Thrust of magnitude `mass_flow_rate · specific_impulse` along the
    /// velocity direction. Without a velocity reference the direction is
    /// undefined and the force is zero.
    pub fn thrust_force(
        mass_flow_rate: f64,
        specific_impulse: f64,
        velocity: Vector3<f64>,
    ) -> Vector3<f64> {
        let speed = velocity.norm();
        if speed == 0.0 {
            return Vector3::zeros();
        }
        velocity * (mass_flow_rate * specific_impulse / speed)
    }
}

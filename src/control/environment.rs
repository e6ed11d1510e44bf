use crate::constants::{
    EARTH_MASS, EARTH_RADIUS, GRAVITATIONAL_CONSTANT, MOLAR_MASS_AIR, SEA_LEVEL_PRESSURE,
    UNIVERSAL_GAS_CONSTANT, ZERO_CELSIUS,
};

/// Immutable planet and gas configuration injected into the atmosphere and
/// force components. Swapping this structure swaps the planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetModel {
    pub gravitational_constant: f64, // km³/(kg·s²)
    pub mass: f64,                   // kg
    pub radius: f64,                 // km
    pub sea_level_pressure: f64,     // Pa
    pub zero_celsius: f64,           // K
    pub gas_constant: f64,           // J/(mol·K)
    pub molar_mass_air: f64,         // kg/mol
}

impl PlanetModel {
    pub fn earth() -> Self {
        PlanetModel {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            mass: EARTH_MASS,
            radius: EARTH_RADIUS,
            sea_level_pressure: SEA_LEVEL_PRESSURE,
            zero_celsius: ZERO_CELSIUS,
            gas_constant: UNIVERSAL_GAS_CONSTANT,
            molar_mass_air: MOLAR_MASS_AIR,
        }
    }

    /// Standard gravitational parameter, km³/s².
    pub fn mu(&self) -> f64 {
        self.gravitational_constant * self.mass
    }

    /// Gravitational acceleration at a distance from the planet center, km/s².
    pub fn gravity_at(&self, distance: f64) -> f64 {
        self.mu() / distance.powi(2)
    }

    pub fn surface_gravity(&self) -> f64 {
        self.gravity_at(self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_surface_gravity() {
        let earth = PlanetModel::earth();
        // 9.82 m/s² expressed in km/s²
        assert_abs_diff_eq!(earth.surface_gravity(), 9.82e-3, epsilon = 1e-5);
    }

    #[test]
    fn test_gravity_follows_inverse_square_law() {
        let earth = PlanetModel::earth();
        let at_surface = earth.gravity_at(earth.radius);
        let at_altitude = earth.gravity_at(earth.radius + 400.0);

        assert!(at_altitude < at_surface);

        let expected_ratio = (earth.radius / (earth.radius + 400.0)).powi(2);
        assert_abs_diff_eq!(
            at_altitude / at_surface,
            expected_ratio,
            epsilon = 1e-12
        );
    }
}

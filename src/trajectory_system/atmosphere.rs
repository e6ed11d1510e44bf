use crate::{
    constants::{ATMOSPHERE_CEILING, DENSITY_SCALE_KM},
    control::environment::PlanetModel,
    errors::SimulationError,
};

/// Empirical atmosphere of the injected planet: temperature and air
/// density as functions of altitude.
#[derive(Debug, Clone, Copy)]
pub struct Atmosphere {
    pub planet: PlanetModel,
}

impl Atmosphere {
    pub fn new(planet: PlanetModel) -> Self {
        Atmosphere { planet }
    }

    /// Temperature in K at `height` km above the surface.
    ///
    /// Piecewise bands at 10, 20, 47, 54, 84, 94 and 145 km, checked from
    /// the highest band down; every matched band adds its term to the
    /// accumulator before the next check.
    pub fn temperature(&self, height: f64) -> Result<f64, SimulationError> {
        if height <= 0.0 {
            return Err(SimulationError::InvalidInput(format!(
                "altitude above the surface must be positive, got {} km",
                height
            )));
        }
        if height > ATMOSPHERE_CEILING {
            return Ok(0.0);
        }
        let mut temperature = self.planet.zero_celsius;
        if height > 94.0 {
            temperature += 140.0 * (height - 94.0) / 51.0 - 90.0;
        }
        if height > 84.0 {
            temperature -= 90.0;
        }
        if height > 54.0 {
            temperature += -3.0 * height + 162.0;
        }
        if height > 47.0 {
            return Ok(temperature);
        }
        if height > 20.0 {
            temperature += (20.0 * height - 940.0) / 9.0;
        }
        if height > 10.0 {
            temperature -= 60.0;
        } else {
            temperature += -8.0 * height + 20.0;
        }
        Ok(temperature)
    }

    /// Air density in kg/km³ at `height` km from the planet center.
    ///
    /// Returns 0 wherever the temperature model yields nothing physical
    /// (the vacuum approximation).
    pub fn air_density(&self, height: f64) -> Result<f64, SimulationError> {
        let height = height - self.planet.radius;
        let temperature = self.temperature(height)?;
        if temperature <= 0.0 {
            return Ok(0.0);
        }
        // local g evaluated at the surface-relative height
        let g = self.planet.gravity_at(height);
        let pressure = self.planet.sea_level_pressure
            * (-self.planet.molar_mass_air * g * height * 1000.0
                / (self.planet.gas_constant * temperature))
                .exp();
        let density = pressure * self.planet.molar_mass_air
            / (self.planet.gas_constant * temperature);
        Ok(density * DENSITY_SCALE_KM)
    }
}

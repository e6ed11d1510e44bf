// Physical Constants (distances in km throughout the simulation)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-20; // km³/(kg·s²)
pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const EARTH_RADIUS: f64 = 6_371.0; // km

// Atmospheric Constants
pub const ZERO_CELSIUS: f64 = 273.15; // K
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0; // Pa
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.31447; // J/(mol·K)
pub const MOLAR_MASS_AIR: f64 = 0.028_964_4; // kg/mol
pub const ATMOSPHERE_CEILING: f64 = 145.0; // km above the surface, temperature model ends here

// Model Thresholds
pub const REENTRY_HEATING_RADIUS: f64 = 6_523.1; // km from the planet center
pub const LANDING_SNAP_MARGIN: f64 = 0.1; // km above the surface

// kg/m³ → kg/km³, to match the km position convention
pub const DENSITY_SCALE_KM: f64 = 1.0e9;

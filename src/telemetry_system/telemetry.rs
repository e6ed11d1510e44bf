use nalgebra::Vector3;

use crate::control::environment::PlanetModel;

/// Best-effort per-step trace of the descent. Collecting it never affects
/// the computed flight plan.
pub struct Telemetry {
    pub log: Vec<String>,
    max_speed: f64,
    min_altitude: f64,
    min_fuel: f64,
    steps_recorded: usize,
    simulation_time: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_speed: 0.0,
            min_altitude: f64::MAX,
            min_fuel: f64::MAX,
            steps_recorded: 0,
            simulation_time: 0.0,
        }
    }

    fn format_vector3(vec: &Vector3<f64>, precision: usize) -> String {
        format!(
            "x = {:.precision$} km, y = {:.precision$} km, z = {:.precision$} km",
            vec.x,
            vec.y,
            vec.z,
            precision = precision
        )
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1.0 {
            format!("{:.2} km", altitude)
        } else {
            format!("{:.1} m", altitude * 1_000.0)
        }
    }

    pub fn record_step(
        &mut self,
        step: usize,
        quant_size: f64,
        position: &Vector3<f64>,
        velocity: &Vector3<f64>,
        fuel_mass: f64,
        planet: &PlanetModel,
    ) {
        self.simulation_time += quant_size;
        self.steps_recorded += 1;

        let altitude = position.norm() - planet.radius;
        let speed = velocity.norm();

        if speed > self.max_speed {
            self.max_speed = speed;
        }
        if altitude < self.min_altitude {
            self.min_altitude = altitude;
        }
        if fuel_mass < self.min_fuel {
            self.min_fuel = fuel_mass;
        }

        self.log.push(format!(
            "Step {} (t = {:.2} s)\n\
                 Altitude: {}\n\
                 Position: {}\n\
                 Speed: {:.4} km/s\n\
                 Fuel: {:.2} kg\n",
            step,
            self.simulation_time,
            Self::format_altitude(altitude),
            Self::format_vector3(position, 3),
            speed,
            fuel_mass
        ));
    }

    pub fn display_data(&self) {
        println!("--- Flight Trace ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Flight Trace ---");

        println!("\n--- Descent Summary ---");
        println!("Steps recorded: {}", self.steps_recorded);
        println!("Max Speed: {:.4} km/s", self.max_speed);
        println!(
            "Min Altitude: {}",
            Self::format_altitude(self.min_altitude)
        );
        println!("Min Fuel: {:.2} kg", self.min_fuel);
    }
}

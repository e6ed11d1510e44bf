use descent_simulation::*;
use nalgebra::Vector3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let planet = PlanetModel::earth();
    let simulation = FlightSimulation::new(planet);

    // retro burn against the orbital motion with the attitude held, then
    // coast down
    let flight_plan = vec![
        FlightCommand::new(60.0, MomentOfInertia::locked(), 120.0),
        FlightCommand::new(0.0, MomentOfInertia::locked(), 86_400.0),
    ];

    let ship = ShipParams {
        edge_length: 0.002,
        dry_mass: 18_000.0,
        fuel_mass: 9_000.0,
        specific_impulse: 3.1,
        flight_plan,
        max_overload: 12.0,
        max_heating: 900.0,
    };

    let initial = ShipPosition {
        position: Vector3::new(planet.radius + 250.0, 0.0, 0.0),
        velocity: Vector3::new(0.0, 7.755, 0.0),
        orientation: Vector3::new(0.0, -1.0, 0.0),
        moment: MomentOfInertia::locked(),
    };

    let quants = Quants::new(3_000, 1.0);

    let mut telemetry = Telemetry::new();
    match simulation.compute_flight_plan_traced(&initial, &ship, &quants, &mut telemetry) {
        Ok(samples) => {
            telemetry.display_data();

            if let Some(last) = samples.last() {
                let final_altitude = last.position.norm() - planet.radius;
                println!("\nFinal altitude: {:.3} km", final_altitude);
                println!("Final speed: {:.4} km/s", last.velocity.norm());
            }
        }
        Err(e) => {
            println!("Simulation aborted: {}", e);
        }
    }

    Ok(())
}

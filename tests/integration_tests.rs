use approx::{assert_abs_diff_eq, assert_relative_eq};
use descent_simulation::{
    errors::SimulationError, FlightCommand, FlightSimulation, MomentOfInertia, PlanetModel, Quants,
    ShipParams, ShipPosition,
};
use nalgebra::Vector3;

// Helper to create the simulation over the default planet
fn create_earth_simulation() -> FlightSimulation {
    FlightSimulation::new(PlanetModel::earth())
}

// Helper to create a coasting test vehicle with a single long command
fn create_coasting_ship(max_overload: f64, max_heating: f64) -> ShipParams {
    ShipParams {
        edge_length: 0.002,
        dry_mass: 1_000.0,
        fuel_mass: 500.0,
        specific_impulse: 3.0,
        flight_plan: vec![FlightCommand::new(
            0.0,
            MomentOfInertia::locked(),
            100_000.0,
        )],
        max_overload,
        max_heating,
    }
}

#[test]
fn test_immediate_touchdown_at_the_surface() {
    println!("INTEGRATION TEST: Immediate Touchdown");

    let simulation = create_earth_simulation();
    let ship = create_coasting_ship(10.0, 1_000.0);
    let radius = simulation.planet.radius;

    let initial = ShipPosition {
        position: Vector3::new(radius, 0.0, 0.0),
        velocity: Vector3::zeros(),
        orientation: Vector3::new(1.0, 0.0, 0.0),
        moment: MomentOfInertia::locked(),
    };
    let quants = Quants::new(8, 1.0);

    let samples = simulation
        .compute_flight_plan(&initial, &ship, &quants)
        .expect("a grounded vehicle terminates without stepping");

    assert_eq!(samples.len(), 8);
    for sample in &samples {
        assert_eq!(sample.position, initial.position);
        assert_eq!(sample.velocity, initial.velocity);
    }

    println!("Immediate Touchdown Test: PASSED");
}

#[test]
fn test_overload_aborts_the_run() {
    println!("INTEGRATION TEST: Overload Abort");

    let simulation = create_earth_simulation();
    // free fall already loads the structure with one local g
    let ship = create_coasting_ship(0.1, 1_000.0);

    let initial = ShipPosition {
        position: Vector3::new(7_000.0, 0.0, 0.0),
        velocity: Vector3::new(0.0, 7.546, 0.0),
        orientation: Vector3::new(0.0, 1.0, 0.0),
        moment: MomentOfInertia::locked(),
    };
    let quants = Quants::new(100, 1.0);

    let result = simulation.compute_flight_plan(&initial, &ship, &quants);
    match result {
        Err(SimulationError::Overload { load, limit, step }) => {
            println!(
                "Run aborted as expected: load {:.3} g over limit {:.3} g at step {}",
                load, limit, step
            );
            assert_eq!(step, 0);
            assert!(load > limit);
        }
        other => panic!("Expected an overload abort, got {:?}", other),
    }

    println!("Overload Abort Test: PASSED");
}

#[test]
fn test_landing_interpolation_reaches_the_surface() {
    println!("INTEGRATION TEST: Landing Interpolation");

    let simulation = create_earth_simulation();
    let ship = create_coasting_ship(5.0, 1_000.0);
    let radius = simulation.planet.radius;

    // 5 km up, falling radially at 10 km/s: the first quantum crosses the
    // surface roughly half-way through
    let initial = ShipPosition {
        position: Vector3::new(radius + 5.0, 0.0, 0.0),
        velocity: Vector3::new(-10.0, 0.0, 0.0),
        orientation: Vector3::new(-1.0, 0.0, 0.0),
        moment: MomentOfInertia::locked(),
    };
    let quants = Quants::new(10, 1.0);

    let samples = simulation
        .compute_flight_plan(&initial, &ship, &quants)
        .expect("the crossing step lands instead of erroring");

    assert_eq!(samples.len(), 10);
    let landing = &samples[0];
    println!(
        "Landing point magnitude: {:.6} km (radius {:.1} km)",
        landing.position.norm(),
        radius
    );
    assert_relative_eq!(landing.position.norm(), radius, epsilon = 1e-6);

    // every later slot repeats the landing position and the last velocity
    for sample in &samples[1..] {
        assert_eq!(sample.position, landing.position);
        assert_eq!(sample.velocity, landing.velocity);
    }

    println!("Landing Interpolation Test: PASSED");
}

#[test]
fn test_snap_to_surface_just_above_the_ground() {
    println!("INTEGRATION TEST: Snap Branch");

    let simulation = create_earth_simulation();
    let ship = create_coasting_ship(5.0, 1_000.0);
    let radius = simulation.planet.radius;

    // tuned so the post-step altitude lands inside the 0.1 km snap margin
    let initial = ShipPosition {
        position: Vector3::new(radius + 1.05, 0.0, 0.0),
        velocity: Vector3::new(-1.0, 0.0, 0.0),
        orientation: Vector3::new(-1.0, 0.0, 0.0),
        moment: MomentOfInertia::locked(),
    };
    let quants = Quants::new(5, 1.0);

    let samples = simulation
        .compute_flight_plan(&initial, &ship, &quants)
        .expect("the vehicle settles on the surface");

    assert_eq!(samples.len(), 5);
    let terminal_altitude = samples[0].position.norm() - radius;
    println!("Terminal altitude: {:.4} km", terminal_altitude);
    assert!(terminal_altitude >= 0.0 && terminal_altitude < 0.1);

    for sample in &samples[1..] {
        assert_eq!(sample.position, samples[0].position);
    }

    println!("Snap Branch Test: PASSED");
}

#[test]
fn test_orbital_coast_keeps_the_full_horizon() {
    println!("INTEGRATION TEST: Orbital Coast");

    let simulation = create_earth_simulation();
    let ship = create_coasting_ship(10.0, 1_000.0);
    let radius = simulation.planet.radius;

    // near-circular speed at 7000 km keeps the vehicle aloft
    let initial = ShipPosition {
        position: Vector3::new(7_000.0, 0.0, 0.0),
        velocity: Vector3::new(0.0, 7.546, 0.0),
        orientation: Vector3::new(0.0, 1.0, 0.0),
        moment: MomentOfInertia::locked(),
    };
    let quants = Quants::new(60, 1.0);

    let samples = simulation
        .compute_flight_plan(&initial, &ship, &quants)
        .expect("an orbital coast never breaches the envelope");

    assert_eq!(samples.len(), 60);
    for (step, sample) in samples.iter().enumerate() {
        assert!(
            sample.position.norm() > radius,
            "step {} dipped below the surface",
            step
        );
    }
    // the craft actually moved; no padding took place
    assert!((samples[59].position - samples[0].position).norm() > 100.0);

    println!("Orbital Coast Test: PASSED");
}

#[test]
fn test_retro_burn_descent_lands_before_the_horizon_ends() {
    println!("INTEGRATION TEST: Retro Burn Descent");

    let simulation = create_earth_simulation();
    let radius = simulation.planet.radius;

    let ship = ShipParams {
        edge_length: 0.002,
        dry_mass: 18_000.0,
        fuel_mass: 9_000.0,
        specific_impulse: 3.1,
        flight_plan: vec![
            FlightCommand::new(60.0, MomentOfInertia::locked(), 120.0),
            FlightCommand::new(0.0, MomentOfInertia::locked(), 100_000.0),
        ],
        max_overload: 12.0,
        max_heating: 900.0,
    };

    let initial = ShipPosition {
        position: Vector3::new(radius + 250.0, 0.0, 0.0),
        velocity: Vector3::new(0.0, 7.755, 0.0),
        orientation: Vector3::new(0.0, -1.0, 0.0),
        moment: MomentOfInertia::locked(),
    };
    let quants = Quants::new(3_000, 1.0);

    let samples = simulation
        .compute_flight_plan(&initial, &ship, &quants)
        .expect("the descent stays inside the safety envelope");

    assert_eq!(samples.len(), 3_000);

    let terminal = samples.last().unwrap();
    let terminal_altitude = terminal.position.norm() - radius;
    println!("Terminal altitude: {:.3} km", terminal_altitude);
    assert_abs_diff_eq!(terminal_altitude, 0.0, epsilon = 0.1);

    // the tail of the output is the frozen landing position
    let landing_index = samples
        .iter()
        .position(|sample| sample.position == terminal.position)
        .unwrap();
    println!("Landed at step {}", landing_index);
    assert!(landing_index < 2_999);
    for sample in &samples[landing_index..] {
        assert_eq!(sample.position, terminal.position);
    }

    println!("Retro Burn Descent Test: PASSED");
}

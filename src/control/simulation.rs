use nalgebra::Vector3;

use crate::{
    constants::LANDING_SNAP_MARGIN,
    control::{
        environment::PlanetModel,
        flight_plan::{Quants, ShipParams, ShipPosition},
    },
    errors::SimulationError,
    telemetry_system::telemetry::Telemetry,
    trajectory_system::{
        forces::ForceModel,
        kinematics::StepIntegrator,
        rotation::{angular_velocity_update, rotate_by_angular_velocity},
    },
};

/// One simulation sample: position and velocity after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub position: Vector3<f64>, // km from the planet center
    pub velocity: Vector3<f64>, // km/s
}

/// Kinematic state threaded through the stepping loop.
#[derive(Debug, Clone)]
struct FlightState {
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    orientation: Vector3<f64>,
    angular_velocity: Vector3<f64>,
    fuel_mass: f64,
    total_mass: f64,
    command_index: usize,
    delay_budget: f64,
    recorded_velocity: Vector3<f64>,
}

impl FlightState {
    fn new(initial: &ShipPosition, ship: &ShipParams) -> Self {
        FlightState {
            position: initial.position,
            velocity: initial.velocity,
            orientation: initial.orientation,
            angular_velocity: Vector3::zeros(),
            fuel_mass: ship.fuel_mass,
            total_mass: ship.fuel_mass + ship.dry_mass,
            command_index: 0,
            delay_budget: ship.flight_plan[0].delay_time,
            recorded_velocity: initial.velocity,
        }
    }
}

#[derive(Debug, PartialEq)]
enum StepOutcome {
    Flying,
    Landed,
}

/// Walks the command schedule over the discrete horizon, producing one
/// sample per quant and terminating early on ground contact.
#[derive(Debug, Clone, Copy)]
pub struct FlightSimulation {
    pub planet: PlanetModel,
    pub forces: ForceModel,
    pub integrator: StepIntegrator,
}

impl FlightSimulation {
    pub fn new(planet: PlanetModel) -> Self {
        FlightSimulation {
            planet,
            forces: ForceModel::new(planet),
            integrator: StepIntegrator::new(planet),
        }
    }

    /// Runs the whole flight plan. The output always holds exactly
    /// `number_of_quants` samples; after an early landing the remaining
    /// slots repeat the landing position with the last computed velocity.
    pub fn compute_flight_plan(
        &self,
        initial: &ShipPosition,
        ship: &ShipParams,
        quants: &Quants,
    ) -> Result<Vec<StepResult>, SimulationError> {
        self.run(initial, ship, quants, None)
    }

    /// Same as [`compute_flight_plan`](Self::compute_flight_plan), with a
    /// best-effort altitude trace. The trace never affects the results.
    pub fn compute_flight_plan_traced(
        &self,
        initial: &ShipPosition,
        ship: &ShipParams,
        quants: &Quants,
        telemetry: &mut Telemetry,
    ) -> Result<Vec<StepResult>, SimulationError> {
        self.run(initial, ship, quants, Some(telemetry))
    }

    fn run(
        &self,
        initial: &ShipPosition,
        ship: &ShipParams,
        quants: &Quants,
        mut telemetry: Option<&mut Telemetry>,
    ) -> Result<Vec<StepResult>, SimulationError> {
        let mut state = FlightState::new(initial, ship);
        let mut samples = Vec::with_capacity(quants.number_of_quants);
        let mut terminated_early = false;

        for step in 0..quants.number_of_quants {
            if state.position.norm() <= self.planet.radius {
                terminated_early = true;
                break;
            }

            let outcome = self.advance_step(&mut state, ship, quants.quant_size, step)?;
            samples.push(StepResult {
                position: state.position,
                velocity: state.recorded_velocity,
            });
            if let Some(recorder) = telemetry.as_deref_mut() {
                recorder.record_step(
                    step,
                    quants.quant_size,
                    &state.position,
                    &state.velocity,
                    state.fuel_mass,
                    &self.planet,
                );
            }

            if outcome == StepOutcome::Landed {
                terminated_early = true;
                break;
            }
        }

        if terminated_early {
            while samples.len() < quants.number_of_quants {
                samples.push(StepResult {
                    position: state.position,
                    velocity: state.velocity,
                });
            }
        }
        Ok(samples)
    }

    /// One quantum: command lookup, rotational update, velocity update with
    /// fuel sub-stepping, full-quantum position advance, ground detection
    /// and command scheduling.
    fn advance_step(
        &self,
        state: &mut FlightState,
        ship: &ShipParams,
        dt: f64,
        step: usize,
    ) -> Result<StepOutcome, SimulationError> {
        let command = ship.flight_plan[state.command_index];
        let mass_flow = command.impulse_value;
        let moment = command.rotate_value;

        let cross_section = ship.edge_length * ship.edge_length;
        let height = state.position.norm();
        let gravity = self.forces.gravity_force(state.position, state.total_mass);
        let aero = self
            .forces
            .aerodynamic_force(state.velocity, cross_section, height)?;
        let thrust = ForceModel::thrust_force(mass_flow, ship.specific_impulse, state.velocity);

        state.angular_velocity = angular_velocity_update(
            gravity,
            aero,
            thrust,
            &moment,
            dt,
            ship.edge_length,
            state.angular_velocity,
        );
        state.orientation = rotate_by_angular_velocity(state.orientation, &state.angular_velocity);

        if mass_flow * dt > state.fuel_mass {
            // split the quantum: burn out over the powered sub-interval,
            // then coast over the remainder
            let powered = state.fuel_mass / mass_flow;
            let unpowered = dt - powered;
            state.velocity = self.integrator.next_velocity(
                state.velocity,
                state.position,
                state.orientation,
                mass_flow,
                ship,
                state.fuel_mass,
                &moment,
                powered,
                step,
            )?;
            state.recorded_velocity = state.velocity;
            state.total_mass -= state.fuel_mass;
            state.fuel_mass = 0.0;
            state.position += state.velocity * powered;
            state.velocity = self.integrator.next_velocity(
                state.velocity,
                state.position,
                state.orientation,
                0.0,
                ship,
                0.0,
                &moment,
                unpowered,
                step,
            )?;
        } else {
            state.velocity = self.integrator.next_velocity(
                state.velocity,
                state.position,
                state.orientation,
                mass_flow,
                ship,
                state.fuel_mass,
                &moment,
                dt,
                step,
            )?;
            state.recorded_velocity = state.velocity;
            state.fuel_mass -= mass_flow * dt;
            state.total_mass -= mass_flow * dt;
        }

        // position always advances over the whole quantum, regardless of
        // the velocity sub-stepping above
        let pre_step_position = state.position;
        let pre_step_radius = pre_step_position.norm();
        state.position += state.velocity * dt;
        let post_radius = state.position.norm();
        let radius = self.planet.radius;

        if post_radius >= radius && post_radius < radius + LANDING_SNAP_MARGIN {
            // too close to the surface to resolve further
            return Ok(StepOutcome::Landed);
        }
        if post_radius < radius {
            // the step crossed the surface: solve the law-of-cosines
            // triangle (pre-step radius, displacement, post-step radius)
            // for the in-step travel distance to the crossing point
            let way = state.velocity * dt;
            let way_length = way.norm();
            let cos_crossing = (way_length.powi(2) + pre_step_radius.powi(2)
                - post_radius.powi(2))
                / (2.0 * way_length * pre_step_radius);
            let travel = pre_step_radius * cos_crossing
                - (pre_step_radius.powi(2) * cos_crossing.powi(2) + radius.powi(2)
                    - pre_step_radius.powi(2))
                    .sqrt();
            let landing_time = travel / state.velocity.norm();
            state.position = pre_step_position + state.velocity * landing_time;
            return Ok(StepOutcome::Landed);
        }

        state.delay_budget -= dt;
        if state.delay_budget <= 0.0 {
            state.command_index += 1;
            state.delay_budget = ship.flight_plan[state.command_index].delay_time;
        }
        Ok(StepOutcome::Flying)
    }
}

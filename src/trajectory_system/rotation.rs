use nalgebra::{UnitQuaternion, Vector3};

use crate::control::flight_plan::MomentOfInertia;

/// First-order update of the angular velocity from the net force on the
/// vehicle. The lever arm is half the edge length along every body axis;
/// an axis with zero moment of inertia is frozen for this step.
pub fn angular_velocity_update(
    gravity_force: Vector3<f64>,
    aerodynamic_force: Vector3<f64>,
    thrust_force: Vector3<f64>,
    moment: &MomentOfInertia,
    dt: f64,
    edge_length: f64,
    previous: Vector3<f64>,
) -> Vector3<f64> {
    let lever = Vector3::repeat(edge_length / 2.0);
    let net_force = gravity_force + aerodynamic_force + thrust_force;
    let torque = lever.cross(&net_force);

    let mut next = previous;
    if moment.x != 0.0 {
        next.x += torque.x * dt / moment.x;
    }
    if moment.y != 0.0 {
        next.y += torque.y * dt / moment.y;
    }
    if moment.z != 0.0 {
        next.z += torque.z * dt / moment.z;
    }
    next
}

/// Rotates a vector by the quaternion derived from an angular-velocity
/// vector (angle |ω| about ω̂).
pub fn rotate_by_angular_velocity(
    vector: Vector3<f64>,
    angular_velocity: &Vector3<f64>,
) -> Vector3<f64> {
    UnitQuaternion::from_scaled_axis(*angular_velocity) * vector
}

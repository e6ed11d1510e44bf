use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Structural overload of {load:.3} g exceeds the limit of {limit:.3} g at step {step}")]
    Overload { load: f64, limit: f64, step: usize },

    #[error("Aerodynamic heating of {heating:.3} K exceeds the limit of {limit:.3} K at step {step}")]
    Overheating {
        heating: f64,
        limit: f64,
        step: usize,
    },
}

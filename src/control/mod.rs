pub mod environment;
pub mod flight_plan;
pub mod simulation;

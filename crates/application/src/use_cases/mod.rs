pub mod simulation;

pub use simulation::{simulate, RunSimulationUseCase, SweepAssociativityUseCase};

mod driver;
mod run_simulation;
mod sweep_associativity;

pub use driver::simulate;
pub use run_simulation::RunSimulationUseCase;
pub use sweep_associativity::SweepAssociativityUseCase;

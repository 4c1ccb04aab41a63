pub mod plan;
pub mod runner;

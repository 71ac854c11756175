pub mod cascade_use_cases;
pub mod domain;
pub mod orchestrator;
pub mod ports;

pub mod sir_states;
pub use sir_states::*;

pub mod params;
pub use params::*;

pub mod metrics;
pub use metrics::*;

pub mod npi;
pub use npi::*;

pub mod epidemic_engine;
pub use epidemic_engine::*;

pub mod case_writer;
pub use case_writer::*;

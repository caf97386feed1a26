pub mod ring;
pub use ring::*;

pub mod contact_graph;
pub use contact_graph::*;

pub mod poisson;
pub use poisson::*;

pub mod household;
pub use household::*;

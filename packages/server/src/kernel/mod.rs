// Kernel - infrastructure wiring (dependency container, service traits, test doubles)

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::*;
pub use traits::*;

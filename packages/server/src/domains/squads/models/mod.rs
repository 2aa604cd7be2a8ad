pub mod squad;

pub use squad::Squad;

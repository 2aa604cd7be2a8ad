pub mod profile;

pub use profile::{is_unique_violation, CreateProfile, Profile, UserType};

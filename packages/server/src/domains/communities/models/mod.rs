pub mod community;

pub use community::{join_link, Community, CreateCommunity};

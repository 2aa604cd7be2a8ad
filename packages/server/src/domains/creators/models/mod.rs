pub mod creator_profile;
pub mod earning;

pub use creator_profile::{CreatorProfile, UpsertCreatorProfile};
pub use earning::{Earning, EarningStatus};

//! Typed ID definitions for all domain entities.

pub use super::id::Id;

/// Marker type for creator applications (`student_submissions`).
pub struct Submission;

/// Marker type for brand collaboration requests.
pub struct BrandSubmission;

/// Marker type for accounts (`profiles`).
pub struct Profile;

pub struct Community;

pub struct Squad;

/// Marker type for a creator's public profile (`creator_profiles`).
pub struct CreatorProfile;

pub struct Campaign;

pub struct Earning;

pub type SubmissionId = Id<Submission>;
pub type BrandSubmissionId = Id<BrandSubmission>;
pub type ProfileId = Id<Profile>;
pub type CommunityId = Id<Community>;
pub type SquadId = Id<Squad>;
pub type CreatorProfileId = Id<CreatorProfile>;
pub type CampaignId = Id<Campaign>;
pub type EarningId = Id<Earning>;

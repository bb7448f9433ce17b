//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod belt_award;
pub mod class;
pub mod feedback_note;
pub mod franchise;
pub mod invite;
pub mod profile;
pub mod student;

pub use belt_award::BeltAwardEntity;
pub use class::ClassEntity;
pub use feedback_note::FeedbackNoteEntity;
pub use franchise::FranchiseEntity;
pub use invite::{InstructorInviteEntity, InviteStatusDb};
pub use profile::{ProfileEntity, RoleDb};
pub use student::{StudentEntity, StudentWithBeltEntity};

//! Repository implementations for database operations.

pub mod belt_award;
pub mod class;
pub mod feedback_note;
pub mod franchise;
pub mod invite;
pub mod profile;
pub mod student;

pub use belt_award::BeltAwardRepository;
pub use class::ClassRepository;
pub use feedback_note::FeedbackNoteRepository;
pub use franchise::FranchiseRepository;
pub use invite::{InviteRepository, InviteStatusCounts};
pub use profile::ProfileRepository;
pub use student::StudentRepository;

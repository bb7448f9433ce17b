//! Domain models for Dojo Manager.

pub mod belt_award;
pub mod class;
pub mod feedback_note;
pub mod franchise;
pub mod invite;
pub mod profile;
pub mod student;

pub use belt_award::{AwardBeltRequest, BeltAwardResponse};
pub use class::{ClassResponse, CreateClassRequest, UpdateClassRequest};
pub use feedback_note::{AddFeedbackNoteRequest, FeedbackNoteResponse};
pub use franchise::{CreateFranchiseRequest, FranchiseResponse, UpdateFranchiseRequest};
pub use invite::{
    generate_invite_token, CompleteInviteRequest, CreateInviteRequest, CreateInviteResponse,
    DeactivateInstructorRequest, DeactivateInstructorResponse, InvitePagination, InviteStatus,
    InviteSummary, InviteSummaryCounts, ListInvitesQuery, ListInvitesResponse, INVITE_TOKEN_LEN,
};
pub use profile::{ListProfilesQuery, ProfileResponse, Role, UpdateProfileRequest};
pub use student::{
    CreateStudentRequest, ListStudentsQuery, StudentDetailResponse, StudentResponse,
    UpdateStudentRequest,
};

//! Instructor assignability policy.
//!
//! Determines which profiles may be chosen as a class's primary instructor.
//! This is a derived view over role + invite history, never stored state.

use crate::models::{InviteStatus, Role};

/// Whether a profile can be assigned as a class instructor.
///
/// An instructor-role profile is assignable unless its most recent invite
/// (matched by normalized email) is `inactive`. Profiles without any invite
/// record default to assignable; instructors created before the invite
/// system existed have no invite rows.
pub fn is_assignable(role: Role, latest_invite_status: Option<InviteStatus>) -> bool {
    if role != Role::Instructor {
        return false;
    }
    !matches!(latest_invite_status, Some(InviteStatus::Inactive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructor_without_invite_is_assignable() {
        assert!(is_assignable(Role::Instructor, None));
    }

    #[test]
    fn test_instructor_with_open_invite_is_assignable() {
        assert!(is_assignable(Role::Instructor, Some(InviteStatus::Pending)));
        assert!(is_assignable(Role::Instructor, Some(InviteStatus::Active)));
        assert!(is_assignable(Role::Instructor, Some(InviteStatus::Expired)));
    }

    #[test]
    fn test_instructor_with_inactive_invite_is_not_assignable() {
        assert!(!is_assignable(
            Role::Instructor,
            Some(InviteStatus::Inactive)
        ));
    }

    #[test]
    fn test_non_instructor_roles_are_never_assignable() {
        for role in [Role::Hq, Role::FranchiseOwner, Role::Student, Role::Parent] {
            assert!(!is_assignable(role, None));
            assert!(!is_assignable(role, Some(InviteStatus::Active)));
        }
    }
}

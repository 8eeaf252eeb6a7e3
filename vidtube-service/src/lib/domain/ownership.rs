use thiserror::Error;

use crate::domain::user::models::UserId;

/// Returned when an actor attempts a mutation on a resource they do not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Actor is not the owner of this resource")]
pub struct NotOwnerError;

/// Resources with a single owning user.
pub trait Owned {
    fn owner_id(&self) -> &UserId;
}

/// Authorization guard for mutating operations on owned resources.
///
/// Every update/delete on a video, comment, or tweet goes through this
/// check before any write happens.
pub fn ensure_owner<R: Owned>(resource: &R, actor: &UserId) -> Result<(), NotOwnerError> {
    if resource.owner_id() == actor {
        Ok(())
    } else {
        Err(NotOwnerError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Resource {
        owner: UserId,
    }

    impl Owned for Resource {
        fn owner_id(&self) -> &UserId {
            &self.owner
        }
    }

    #[test]
    fn test_owner_passes_guard() {
        let owner = UserId::new();
        let resource = Resource { owner };

        assert!(ensure_owner(&resource, &owner).is_ok());
    }

    #[test]
    fn test_non_owner_rejected() {
        let resource = Resource {
            owner: UserId::new(),
        };

        assert_eq!(
            ensure_owner(&resource, &UserId::new()),
            Err(NotOwnerError)
        );
    }
}

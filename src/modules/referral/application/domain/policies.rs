use crate::auth::application::domain::entities::UserId;
use crate::referral::application::domain::entities::Referral;

/// Whether a user may redeem their own referral code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfReferralPolicy {
    #[default]
    Allow,
    Deny,
}

impl SelfReferralPolicy {
    pub fn from_allow(allow: bool) -> Self {
        if allow {
            Self::Allow
        } else {
            Self::Deny
        }
    }

    pub fn permits(&self, referrer: UserId, referred: UserId) -> bool {
        match self {
            Self::Allow => true,
            Self::Deny => referrer != referred,
        }
    }
}

/// Whose code `get-referral-code-by-email` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeLookupPolicy {
    /// The `email` parameter is ignored
    #[default]
    CallerOnly,
    ByEmail,
}

impl CodeLookupPolicy {
    pub fn from_lookup_by_email(enabled: bool) -> Self {
        if enabled {
            Self::ByEmail
        } else {
            Self::CallerOnly
        }
    }
}

/// Who may read a single referral by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferralVisibility {
    #[default]
    Participants,
    AnyUser,
}

impl ReferralVisibility {
    pub fn from_participants_only(participants_only: bool) -> Self {
        if participants_only {
            Self::Participants
        } else {
            Self::AnyUser
        }
    }

    pub fn permits(&self, referral: &Referral, requester: UserId) -> bool {
        match self {
            Self::Participants => referral.involves(requester),
            Self::AnyUser => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn allow_permits_self_referral() {
        let user = UserId::from(Uuid::new_v4());
        assert!(SelfReferralPolicy::Allow.permits(user, user));
    }

    #[test]
    fn deny_rejects_only_self_referral() {
        let a = UserId::from(Uuid::new_v4());
        let b = UserId::from(Uuid::new_v4());

        assert!(!SelfReferralPolicy::Deny.permits(a, a));
        assert!(SelfReferralPolicy::Deny.permits(a, b));
    }

    #[test]
    fn from_allow_maps_flag() {
        assert_eq!(SelfReferralPolicy::from_allow(true), SelfReferralPolicy::Allow);
        assert_eq!(SelfReferralPolicy::from_allow(false), SelfReferralPolicy::Deny);
        assert_eq!(SelfReferralPolicy::default(), SelfReferralPolicy::Allow);
    }

    #[test]
    fn code_lookup_defaults_to_caller() {
        assert_eq!(CodeLookupPolicy::default(), CodeLookupPolicy::CallerOnly);
        assert_eq!(
            CodeLookupPolicy::from_lookup_by_email(true),
            CodeLookupPolicy::ByEmail
        );
        assert_eq!(
            CodeLookupPolicy::from_lookup_by_email(false),
            CodeLookupPolicy::CallerOnly
        );
    }

    #[test]
    fn visibility_limits_outsiders_only_when_participants() {
        let (referrer, referred, outsider) = (
            UserId::from(Uuid::new_v4()),
            UserId::from(Uuid::new_v4()),
            UserId::from(Uuid::new_v4()),
        );
        let referral = Referral {
            id: Uuid::new_v4(),
            referrer,
            referred,
            created_at: Utc::now(),
        };

        let participants = ReferralVisibility::from_participants_only(true);
        assert!(participants.permits(&referral, referrer));
        assert!(participants.permits(&referral, referred));
        assert!(!participants.permits(&referral, outsider));

        assert!(ReferralVisibility::AnyUser.permits(&referral, outsider));
    }
}

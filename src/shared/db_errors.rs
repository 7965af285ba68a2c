use sea_orm::{DbErr, SqlErr};

/// Message of a unique-constraint violation, if `err` is one.
///
/// Driver errors are classified through `sql_err()`; anything else (mock or
/// wrapped errors) falls back to SQLSTATE `23505` / message matching.
pub fn unique_violation_message(err: &DbErr) -> Option<String> {
    if let Some(SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
        return Some(msg);
    }

    let text = err.to_string();
    let lowered = text.to_lowercase();
    if lowered.contains("23505")
        || lowered.contains("duplicate key")
        || lowered.contains("unique constraint")
    {
        return Some(text);
    }

    None
}

pub fn is_unique_violation(err: &DbErr) -> bool {
    unique_violation_message(err).is_some()
}

/// True when `err` is a unique violation of the named constraint.
pub fn violates_constraint(err: &DbErr, constraint: &str) -> bool {
    unique_violation_message(err).is_some_and(|msg| msg.contains(constraint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_duplicate_key_messages() {
        let err = DbErr::Custom(
            "duplicate key value violates unique constraint \"uq_referral_codes_code\"".to_string(),
        );

        assert!(is_unique_violation(&err));
        assert!(violates_constraint(&err, "uq_referral_codes_code"));
        assert!(!violates_constraint(&err, "uq_referral_codes_user_id"));
    }

    #[test]
    fn recognizes_sqlstate() {
        let err = DbErr::Custom("error returned from database: 23505".to_string());
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn other_errors_are_not_unique_violations() {
        let err = DbErr::Custom("connection timeout".to_string());

        assert!(!is_unique_violation(&err));
        assert!(!violates_constraint(&err, "uq_referrals_referred_id"));
    }
}

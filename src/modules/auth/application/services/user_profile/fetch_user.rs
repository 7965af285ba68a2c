use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::UserQuery,
    use_cases::fetch_profile::{FetchUserError, FetchUserOutput, FetchUserProfileUseCase},
};

pub struct FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<FetchUserOutput, FetchUserError> {
        let user = self
            .user_query
            .find_by_id(user_id.value())
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| FetchUserError::UserNotFound(user_id.to_string()))?;

        Ok(FetchUserOutput {
            user_id: user.id.into(),
            email: user.email,
            username: user.username,
            is_active: user.is_active,
            created_at: user.created_at,
        })
    }
}

use crate::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher,
    user_query::UserQuery,
    user_repository::{CreateUserData, UserRepository, UserRepositoryError},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use std::sync::Arc;
use uuid::Uuid;

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 150;
const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 128;

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// Possible errors for creating a user
#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("A user with that username already exists")]
    UsernameAlreadyExists,

    #[error("A user with that email already exists")]
    EmailAlreadyExists,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// Interface for CreateUser use case
#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

// Implementation of CreateUser use case
#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    fn validate_username(username: &str) -> Result<String, CreateUserError> {
        let username = username.trim();
        let len = username.chars().count();

        if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
            return Err(CreateUserError::InvalidUsername(format!(
                "Username must be between {} and {} characters",
                USERNAME_MIN_LEN, USERNAME_MAX_LEN
            )));
        }

        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            return Err(CreateUserError::InvalidUsername(
                "Username may contain only letters, digits and @/./+/-/_".to_string(),
            ));
        }

        Ok(username.to_string())
    }

    fn validate_email(email: &str) -> Result<String, CreateUserError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(CreateUserError::InvalidEmail(
                "Email is required".to_string(),
            ));
        }

        if !EmailAddress::is_valid(email) {
            return Err(CreateUserError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }

        Ok(email.to_lowercase())
    }

    fn validate_password(password: &str) -> Result<(), CreateUserError> {
        let len = password.chars().count();

        if len < PASSWORD_MIN_LEN {
            return Err(CreateUserError::InvalidPassword(format!(
                "Password must be at least {} characters",
                PASSWORD_MIN_LEN
            )));
        }

        if len > PASSWORD_MAX_LEN {
            return Err(CreateUserError::InvalidPassword(format!(
                "Password must not exceed {} characters",
                PASSWORD_MAX_LEN
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        // 1️⃣ Validate input
        let username = Self::validate_username(&input.username)?;
        let email = Self::validate_email(&input.email)?;
        Self::validate_password(&input.password)?;

        // 2️⃣ Check username and email uniqueness
        if self
            .query
            .find_by_username(&username)
            .await
            .map_err(|e| CreateUserError::QueryError(e.to_string()))?
            .is_some()
        {
            return Err(CreateUserError::UsernameAlreadyExists);
        }

        if self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| CreateUserError::QueryError(e.to_string()))?
            .is_some()
        {
            return Err(CreateUserError::EmailAlreadyExists);
        }

        // 3️⃣ Hash password
        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        // 4️⃣ Persist; the unique constraints catch a concurrent registration
        let created = self
            .repository
            .create_user(CreateUserData {
                username,
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => CreateUserError::RepositoryError(msg),
            })?;

        Ok(CreateUserOutput {
            user_id: created.id,
            username: created.username,
            email: created.email,
            created_at: created.created_at,
        })
    }
}

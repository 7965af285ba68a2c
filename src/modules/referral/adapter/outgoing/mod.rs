pub mod referral_code_query_postgres;
pub mod referral_code_repository_postgres;
pub mod referral_query_postgres;
pub mod referral_repository_postgres;
pub mod sea_orm_entity;

pub use referral_code_query_postgres::ReferralCodeQueryPostgres;
pub use referral_code_repository_postgres::ReferralCodeRepositoryPostgres;
pub use referral_query_postgres::ReferralQueryPostgres;
pub use referral_repository_postgres::ReferralRepositoryPostgres;

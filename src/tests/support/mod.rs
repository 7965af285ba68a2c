pub mod app_state_builder;
pub mod in_memory_referral_store;
pub mod stubs;

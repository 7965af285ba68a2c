pub mod code_generator;
pub mod entities;
pub mod expires_at;
pub mod policies;

pub mod domain;
pub mod ports;
pub mod referral_use_cases;
pub mod services;

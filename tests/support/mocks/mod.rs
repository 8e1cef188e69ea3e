// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod time;

pub use security::{DummyPasswordHasher, admin_context};
pub use time::{FixedClock, StepClock, fixed_now};

pub mod field;
pub mod layout;
pub mod particle;
pub mod rng;
pub mod time;

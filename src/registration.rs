// author: kodeholic (powered by Claude)

pub mod client;
pub mod model;

pub use client::RegistrationServiceClient;
pub use model::{RegisterOutcome, Registration};

//! Application services

pub mod controller;
pub mod token;

pub use controller::{ControllerService, AUTH_HEADER};
pub use token::{TokenService, TokenSource};

pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod config;
pub mod cracker;
pub mod engine;
pub mod errors;
pub mod files;
pub mod frequency;
pub mod logger;
pub mod menu;
pub mod metrics;

pub use cipher::{decrypt, encrypt, Key};
pub use engine::{CipherEngine, Operation, Report};
pub use errors::{AppError, CipherError};

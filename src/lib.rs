#[macro_use]
extern crate log;
extern crate env_logger;

pub mod config;
pub mod contact;
pub mod error;
pub mod logger;
pub mod zalloc;

pub use config::{Config, NameOverflow};
pub use contact::{ArrayFactory, ContactList, ContactNode};
pub use error::{ListError, Rejected};

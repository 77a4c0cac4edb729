#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod date;
pub mod days;
pub mod duration;
pub mod error;
pub mod months;
pub mod sub;

pub use date::DateInput;
pub use duration::Duration;
pub use error::{Error, Result};
pub use sub::{add, sub};

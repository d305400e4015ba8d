pub mod application;
pub mod codec;
pub mod defaults;
pub mod domain;
pub mod error;
pub mod filter;
pub mod ports;
pub mod utils;
pub mod validate;

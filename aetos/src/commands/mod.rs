pub mod config;
pub mod delegate;

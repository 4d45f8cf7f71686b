pub mod factories;
pub mod helpers;

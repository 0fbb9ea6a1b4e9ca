pub mod app;
pub mod cli;
pub mod config;
pub mod filter;
pub mod lint;
pub mod loader;
pub mod model;
pub mod output;
pub mod render;
pub mod runner;

#[cfg(test)]
mod tests;

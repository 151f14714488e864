pub mod app;
pub mod config;
pub mod counter;
pub mod demo;
pub mod expenses;
pub mod filters;
pub mod logging;
pub mod mvi;
pub mod sink;

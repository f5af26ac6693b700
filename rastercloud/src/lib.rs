pub mod cli;
pub mod collect;
pub mod commons;
pub mod geometric;
pub mod loader;
pub mod logging;
pub mod project;

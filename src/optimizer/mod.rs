pub mod runner;
pub mod worker;

pub use runner::SearchPool;
pub use worker::Worker;

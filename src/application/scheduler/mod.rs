// src/application/scheduler/mod.rs
mod runner;
mod schedule;

pub use runner::DailyScheduler;
pub use schedule::DailySchedule;

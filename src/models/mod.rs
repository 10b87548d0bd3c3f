pub mod config;
pub mod habit;
pub mod log;

pub use habit::Habit;
pub use log::HabitLog;

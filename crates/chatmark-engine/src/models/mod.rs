pub mod chart;
pub mod message;

pub use chart::{ChartData, ChartError};
pub use message::{ChatMessage, Detail, Role, Stat};

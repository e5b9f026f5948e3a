pub mod logger;

pub use logger::CommandLog;

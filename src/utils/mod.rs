//! Process-level helpers shared by the front-ends

pub mod logger;

pub use logger::init_logger;

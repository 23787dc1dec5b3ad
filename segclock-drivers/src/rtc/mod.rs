//! Real-time clock drivers

mod ds3231;

pub use ds3231::Ds3231;

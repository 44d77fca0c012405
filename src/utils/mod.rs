pub mod formatter;
pub mod units;

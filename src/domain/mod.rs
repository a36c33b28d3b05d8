pub mod change;
pub mod report;

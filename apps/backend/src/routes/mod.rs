pub mod check;
pub mod problems;

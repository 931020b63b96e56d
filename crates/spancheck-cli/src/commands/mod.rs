pub mod check;
pub mod remind;

pub mod daily;
pub mod monthly;
pub mod weekly;

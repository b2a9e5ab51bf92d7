pub mod gate;
pub mod select;

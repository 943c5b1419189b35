pub mod kind;
pub mod row;

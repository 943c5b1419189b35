pub mod import;
pub mod parser;
pub mod writer;

//! Generated content domain module

mod generated;
pub mod markers;
mod parser;
mod table;

pub use generated::{ActivityInsertion, GeneratedContent};
pub use parser::parse as parse_response;
pub use table::AppendixTable;

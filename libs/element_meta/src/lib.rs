pub mod types;
pub mod meta;

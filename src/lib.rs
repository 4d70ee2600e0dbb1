pub mod config;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod ts_generator;
pub mod type_mapper;

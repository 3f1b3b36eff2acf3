//! Main module for wahy library functionality

pub mod document;
pub mod interpreter;
pub mod registry;
pub mod source;
pub mod tokenizer;

//! Main module for tokenizer library functionality

pub mod config;
pub mod error;
pub mod formats;
pub mod grammar;
pub mod matcher;
pub mod observer;
pub mod scanner;
pub mod sink;
pub mod testing;

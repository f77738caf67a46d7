//! Main module for mdhtml library functionality

pub mod config;
pub mod error;
pub mod formats;
pub mod inlines;
pub mod lexing;
pub mod pipeline;
pub mod token;

// deepl-gateway - Minimal HTTP gateway in front of the DeepL API

pub mod cli;
pub mod config;
pub mod deepl;
pub mod error;
pub mod server;
pub mod translation;
pub mod utils;

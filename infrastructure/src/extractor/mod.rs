//! API extractor adapters

mod command;

pub use command::CommandApiExtractor;

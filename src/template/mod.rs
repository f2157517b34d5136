pub mod materializer;

pub use materializer::Materializer;

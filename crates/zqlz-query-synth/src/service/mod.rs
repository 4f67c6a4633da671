//! Rendering of operation specs to SQL and MongoDB shell text

mod fragments;
mod mongo_generator;
mod sql_generator;
mod synthesizer;


pub use mongo_generator::MongoGenerator;
pub use sql_generator::SqlGenerator;
pub use synthesizer::{Synthesizer, synthesize, synthesize_tagged};

//! Static data assets loaded once into the lexicon types.

pub mod dictionary;
pub mod registry;

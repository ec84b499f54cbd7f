#[cfg(doc)]
pub mod doc;

mod rocca;

pub use rocca::{open, seal, Error, KEY_SIZE, NONCE_SIZE, OVERHEAD, TAG_SIZE};

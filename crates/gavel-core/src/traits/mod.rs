//! Seam traits between the core and its collaborators.

mod navigator;
mod transport;

pub use navigator::{Navigator, Route};
pub use transport::Transport;

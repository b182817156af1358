pub use anstream::eprintln;
pub use color_eyre::eyre::{Context, Result};

//! Library side of the `smk` command-line driver.

pub mod input;
pub mod logging;

// crates/fstvarint-cli/src/io/mod.rs

pub mod raw;

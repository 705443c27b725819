// crates/fstvarint-cli/src/cmd/mod.rs

pub mod decode;
pub mod encode;
pub mod len;
pub mod scan;

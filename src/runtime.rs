use lazy_static::lazy_static;

use crate::library::{fnread, fnwrite};

lazy_static! {
    /// Name-to-address table for hosts that patch calls into loaded code
    /// by symbol instead of going through the linker.
    pub static ref DEFAULT_RUNTIME: [(&'static str, usize); 2] = [
        ("fnread", fnread as usize),
        ("fnwrite", fnwrite as usize),
    ];
}

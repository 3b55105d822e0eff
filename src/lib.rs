//! Console helpers for assembly callers: `fnread` pulls one integer off
//! stdin, `fnwrite` prints one to stdout. Both are exported with C linkage
//! so the symbols come out unmangled and can be called by name.

mod scan;

pub mod library;
pub mod runtime;

pub use crate::library::{fnread, fnwrite};
pub use crate::scan::{read_number, write_number};

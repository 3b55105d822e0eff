use std::io::{stdin, stdout, Write};

use crate::scan::{read_number, write_number};

// The result is handed back in eax under the 32-bit calling convention.
#[no_mangle]
pub extern "C" fn fnread() -> i32 {
    read_number(stdin().lock())
}

#[no_mangle]
pub extern "C" fn fnwrite(n: i32) {
    let mut out = stdout().lock();
    write_number(&mut out, n);
    let _ = out.flush();
}

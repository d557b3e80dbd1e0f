//! Operating system abstraction layer (Linux)
//!
//! On Linux, randomness is read from the kernel entropy pool through the
//! `getrandom` system call, which blocks only until the pool has been
//! initialized once after boot.

use std::io;

use libc::{c_void, getrandom};
use log::warn;

use crate::error::{CryptoError, Result};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// This function repeatedly calls the Linux `getrandom` system call until
/// the entire buffer is filled. Partial reads and `EINTR` interruptions are
/// handled transparently; any other failure is reported as
/// [`CryptoError::Entropy`].
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();

            if err.kind() == io::ErrorKind::Interrupted {
                warn!("getrandom() interrupted, retrying");
                continue;
            }

            return Err(CryptoError::Entropy(format!("getrandom() failed: {err}")));
        }

        filled += ret as usize;
    }

    Ok(())
}

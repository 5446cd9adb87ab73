/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use crate::error::FillError;
use crate::query::NameSource;

const FALLBACK_HOST_NAME_MAX: usize = 255;

#[derive(Default)]
pub(crate) struct SystemSource {}

impl NameSource for SystemSource {
    type Unit = u8;

    fn initial_len(&self) -> usize {
        let max = unsafe { libc::sysconf(libc::_SC_HOST_NAME_MAX) };
        let max = usize::try_from(max)
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(FALLBACK_HOST_NAME_MAX);
        // room for the trailing NUL
        max + 1
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, FillError> {
        let r = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
        if r != 0 {
            let e = io::Error::last_os_error();
            return match e.raw_os_error() {
                Some(code @ (libc::ENAMETOOLONG | libc::EINVAL)) => {
                    Err(FillError::BufferTooSmall {
                        required: None,
                        os_error: Some(code),
                    })
                }
                _ => Err(FillError::Os(e)),
            };
        }
        terminated_len(buf)
    }
}

/// POSIX leaves it unspecified whether a truncated name is NUL terminated,
/// so a name that reaches the last byte of the buffer is treated as
/// truncated and queried again with a larger buffer.
fn terminated_len(buf: &[u8]) -> Result<usize, FillError> {
    match buf.iter().position(|b| *b == 0) {
        Some(end) if end + 1 < buf.len() => Ok(end),
        _ => Err(FillError::BufferTooSmall {
            required: None,
            os_error: None,
        }),
    }
}

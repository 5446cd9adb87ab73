/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use windows_sys::Win32::Foundation::ERROR_MORE_DATA;
use windows_sys::Win32::System::SystemInformation;

use crate::error::FillError;
use crate::query::NameSource;

const INITIAL_LEN: usize = 256;

#[derive(Default)]
pub(crate) struct SystemSource {}

impl NameSource for SystemSource {
    type Unit = u16;

    fn initial_len(&self) -> usize {
        INITIAL_LEN
    }

    fn fill(&mut self, buf: &mut [u16]) -> Result<usize, FillError> {
        let mut size = u32::try_from(buf.len()).unwrap_or(u32::MAX);
        let r = unsafe {
            SystemInformation::GetComputerNameExW(
                SystemInformation::ComputerNamePhysicalDnsHostname,
                buf.as_mut_ptr(),
                &mut size,
            )
        };
        // on success size is the name length without the NUL
        if r != 0 {
            return Ok(size as usize);
        }

        let e = io::Error::last_os_error();
        if e.raw_os_error() == Some(ERROR_MORE_DATA as i32) {
            // size now includes the NUL
            Err(FillError::BufferTooSmall {
                required: Some(size as usize),
                os_error: e.raw_os_error(),
            })
        } else {
            Err(FillError::Os(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_small() {
        let mut source = SystemSource::default();
        let mut buf = [0u16; 1];
        match source.fill(&mut buf) {
            Err(FillError::BufferTooSmall { required, os_error }) => {
                assert!(required.unwrap() > 1);
                assert_eq!(os_error, Some(ERROR_MORE_DATA as i32));
            }
            r => panic!("unexpected fill result: {r:?}"),
        }
    }

    #[test]
    fn fill_system() {
        let mut source = SystemSource::default();
        let mut buf = vec![0u16; source.initial_len()];
        let len = source.fill(&mut buf).unwrap();
        assert!(len > 0);
        assert_eq!(buf[len], 0);
    }
}

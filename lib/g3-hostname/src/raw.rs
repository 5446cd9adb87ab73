/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::ffi::OsString;

/// Cut `buf` down to the name the platform reported.
///
/// The reported length is capped at the buffer size, and the name ends at
/// the first NUL unit inside it, so trailing terminators and padding never
/// leak into the result.
pub(crate) fn trim_terminated<T: Copy + Default + PartialEq>(
    mut buf: Vec<T>,
    reported_len: usize,
) -> Vec<T> {
    let nul = T::default();
    let end = reported_len.min(buf.len());
    let end = buf[..end].iter().position(|u| *u == nul).unwrap_or(end);
    buf.truncate(end);
    buf
}

/// Bytes are passed through unchanged, unix host names need not be utf-8.
#[cfg(unix)]
pub(crate) fn into_os_string(buf: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;

    OsString::from_vec(buf)
}

#[cfg(windows)]
pub(crate) fn into_os_string(buf: Vec<u16>) -> OsString {
    use std::os::windows::ffi::OsStringExt;

    OsString::from_wide(&buf)
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn into_os_string(buf: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&buf).into_owned())
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::SystemSource;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::SystemSource;

#[cfg(not(any(unix, windows)))]
mod unsupported;
#[cfg(not(any(unix, windows)))]
pub(crate) use unsupported::SystemSource;

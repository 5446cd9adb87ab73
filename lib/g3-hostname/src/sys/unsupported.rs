/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use crate::error::FillError;
use crate::query::NameSource;

#[derive(Default)]
pub(crate) struct SystemSource {}

impl NameSource for SystemSource {
    type Unit = u8;

    fn initial_len(&self) -> usize {
        1
    }

    fn fill(&mut self, _buf: &mut [u8]) -> Result<usize, FillError> {
        Err(FillError::Os(io::Error::new(
            io::ErrorKind::Unsupported,
            "host name is not available on this platform",
        )))
    }
}

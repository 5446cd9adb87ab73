/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use log::debug;

use crate::error::{FillError, QueryError};

const MAX_GROW_ROUNDS: usize = 8;

/// A platform facility that writes the host name into a caller buffer.
pub(crate) trait NameSource {
    /// Code unit of the native encoding, `u8` on unix and `u16` on windows.
    type Unit: Copy + Default + PartialEq;

    /// Size of the first buffer to try.
    fn initial_len(&self) -> usize;

    /// Fill `buf` with the host name and return the number of units the
    /// platform reported as written.
    fn fill(&mut self, buf: &mut [Self::Unit]) -> Result<usize, FillError>;
}

/// Staging buffer for a single query.
struct QueryBuffer<T> {
    data: Vec<T>,
}

impl<T: Copy + Default + PartialEq> QueryBuffer<T> {
    fn new(len: usize) -> Self {
        QueryBuffer {
            data: vec![T::default(); len.max(1)],
        }
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn grow(&mut self, required: Option<usize>) {
        let mut new_len = self.data.len().saturating_mul(2);
        if let Some(required) = required {
            new_len = new_len.max(required);
        }
        self.data.clear();
        self.data.resize(new_len, T::default());
    }

    fn finish(self, reported_len: usize) -> Vec<T> {
        crate::raw::trim_terminated(self.data, reported_len)
    }
}

/// Run the query against `source`, growing the buffer as long as the
/// source reports that the name did not fit.
pub(crate) fn query_with<S: NameSource>(source: &mut S) -> Result<Vec<S::Unit>, QueryError> {
    let mut buf = QueryBuffer::new(source.initial_len());
    let mut rounds = 0;

    loop {
        match source.fill(buf.as_mut_slice()) {
            Ok(len) => return Ok(buf.finish(len)),
            Err(FillError::BufferTooSmall { required, os_error }) => {
                if rounds >= MAX_GROW_ROUNDS {
                    return Err(QueryError::growth_exhausted(rounds, buf.len(), os_error));
                }
                rounds += 1;
                let old_len = buf.len();
                buf.grow(required);
                debug!(
                    "host name does not fit in {old_len} units, retry with {}",
                    buf.len()
                );
            }
            Err(FillError::Os(e)) => return Err(QueryError::from(e)),
        }
    }
}

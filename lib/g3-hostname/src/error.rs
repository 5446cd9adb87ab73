/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

/// The host name query failed for a reason other than a too small buffer.
#[derive(Debug, Error)]
#[error("host name query failed: {0}")]
pub struct QueryError(#[from] io::Error);

impl QueryError {
    /// The buffer kept growing without the name ever fitting.
    ///
    /// Wraps the last OS error code instead, if the platform reported one.
    pub(crate) fn growth_exhausted(rounds: usize, size: usize, os_error: Option<i32>) -> Self {
        match os_error {
            Some(code) => QueryError(io::Error::from_raw_os_error(code)),
            None => QueryError(io::Error::other(format!(
                "host name still does not fit after {rounds} buffer growths ({size} units)"
            ))),
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.0.kind()
    }

    pub fn raw_os_error(&self) -> Option<i32> {
        self.0.raw_os_error()
    }

    pub fn into_io_error(self) -> io::Error {
        self.0
    }
}

impl From<QueryError> for io::Error {
    fn from(e: QueryError) -> Self {
        e.0
    }
}

/// Result of a single fill attempt on a name source.
#[derive(Debug)]
pub(crate) enum FillError {
    /// The name did not fit, the query should be retried with more room.
    ///
    /// `required` is the number of units the platform asked for, and
    /// `os_error` the error code it returned, if it reported them.
    BufferTooSmall {
        required: Option<usize>,
        os_error: Option<i32>,
    },
    Os(io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_os_error() {
        let e = QueryError::from(io::Error::from_raw_os_error(1));
        assert_eq!(e.raw_os_error(), Some(1));
        let e: io::Error = e.into();
        assert_eq!(e.raw_os_error(), Some(1));
    }

    #[test]
    fn growth_exhausted() {
        let e = QueryError::growth_exhausted(8, 65536, None);
        assert_eq!(e.kind(), io::ErrorKind::Other);
        assert!(e.raw_os_error().is_none());
        assert!(e.to_string().contains("8 buffer growths"));

        let e = QueryError::growth_exhausted(8, 65536, Some(22));
        assert_eq!(e.raw_os_error(), Some(22));
    }
}

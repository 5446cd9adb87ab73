/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Query the host name of the local machine.
//!
//! On unix this wraps [gethostname(2)], and on windows `GetComputerNameExW`
//! with the `ComputerNamePhysicalDnsHostname` name type. The returned name is
//! never truncated: if the platform reports that the buffer is too small, the
//! buffer is grown and the query retried.
//!
//! [gethostname(2)]: https://pubs.opengroup.org/onlinepubs/9799919799/functions/gethostname.html

use std::ffi::OsString;

mod error;
pub use error::QueryError;

mod name;
pub use name::HostName;

mod query;
mod raw;
mod sys;

/// Query the host name of the current machine.
///
/// Every call queries the operating system again, nothing is cached.
pub fn query_hostname() -> Result<HostName, QueryError> {
    let mut source = sys::SystemSource::default();
    let units = query::query_with(&mut source)?;
    Ok(HostName::from(raw::into_os_string(units)))
}

/// Like [`query_hostname`], but returns the plain [`OsString`].
pub fn try_hostname() -> Result<OsString, QueryError> {
    query_hostname().map(HostName::into_os_string)
}

/// Get the host name of the current machine.
///
/// # Panics
///
/// Panics if the host name can not be retrieved. This only happens on broken
/// or very unusual systems; use [`try_hostname`] if that has to be handled.
pub fn hostname() -> OsString {
    match try_hostname() {
        Ok(name) => name,
        Err(e) => panic!("failed to get the local host name: {e}"),
    }
}

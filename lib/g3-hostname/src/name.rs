/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;

/// The host name of the local machine, in the platform native encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HostName(OsString);

impl HostName {
    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    pub fn into_os_string(self) -> OsString {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the name as `&str` if it is valid unicode.
    pub fn to_str(&self) -> Option<&str> {
        self.0.to_str()
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    /// Converts into a `String`, or gives the name back if it is not valid
    /// unicode.
    pub fn into_string(self) -> Result<String, HostName> {
        self.0.into_string().map_err(HostName)
    }

    /// Host names are case-insensitive, so this is what comparisons against
    /// a configured name should use.
    pub fn eq_ignore_ascii_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl From<OsString> for HostName {
    fn from(value: OsString) -> Self {
        HostName(value)
    }
}

impl From<HostName> for OsString {
    fn from(value: HostName) -> Self {
        value.0
    }
}

impl AsRef<OsStr> for HostName {
    fn as_ref(&self) -> &OsStr {
        &self.0
    }
}

impl PartialEq<str> for HostName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HostName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_string_lossy())
    }
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use log::{debug, info};

use g3_hostname::HostName;

mod logger;
mod opts;
use opts::{OutputFormat, ProcArgs};

fn main() -> anyhow::Result<()> {
    let args = opts::build_cli_args().get_matches();
    let mut proc_args = opts::parse_clap(&args);
    if proc_args.generate_shell_completion() {
        return Ok(());
    }

    let _log_guard = logger::setup(proc_args.verbose_level).context("failed to setup logger")?;

    let name = g3_hostname::query_hostname().context("failed to get the local host name")?;
    debug!("got local host name {name}");

    if let Some(expected) = &proc_args.expect {
        verify(&name, expected, &proc_args)?;
        info!("local host name matches {expected}");
    }

    println!("{}", render(&name, proc_args.format)?);
    Ok(())
}

fn verify(name: &HostName, expected: &str, proc_args: &ProcArgs) -> anyhow::Result<()> {
    let matched = if proc_args.case_sensitive {
        name == expected
    } else {
        name.eq_ignore_ascii_case(expected)
    };
    if matched {
        Ok(())
    } else {
        Err(anyhow!(
            "local host name {name} does not match the expected {expected}"
        ))
    }
}

fn render(name: &HostName, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Lossy => Ok(name.to_string()),
        OutputFormat::Strict => name
            .to_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow!("local host name {name} is not valid unicode")),
        OutputFormat::Hex => Ok(native_hex(name)),
    }
}

#[cfg(not(windows))]
fn native_hex(name: &HostName) -> String {
    hex::encode(name.as_os_str().as_encoded_bytes())
}

/// Each UTF-16 unit as 4 hex digits, unpaired surrogates included.
#[cfg(windows)]
fn native_hex(name: &HostName) -> String {
    use std::os::windows::ffi::OsStrExt;

    name.as_os_str()
        .encode_wide()
        .map(|u| hex::encode(u.to_be_bytes()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn host(s: &str) -> HostName {
        HostName::from(OsString::from(s))
    }

    #[test]
    fn verify_name() {
        let name = host("Hostname-For-Testing");
        let mut proc_args = ProcArgs::default();
        assert!(verify(&name, "hostname-for-testing", &proc_args).is_ok());
        assert!(verify(&name, "other-host", &proc_args).is_err());

        proc_args.case_sensitive = true;
        assert!(verify(&name, "hostname-for-testing", &proc_args).is_err());
        assert!(verify(&name, "Hostname-For-Testing", &proc_args).is_ok());
    }

    #[test]
    fn render_name() {
        let name = host("host-a");
        assert_eq!(render(&name, OutputFormat::Lossy).unwrap(), "host-a");
        assert_eq!(render(&name, OutputFormat::Strict).unwrap(), "host-a");
        #[cfg(not(windows))]
        assert_eq!(render(&name, OutputFormat::Hex).unwrap(), "686f73742d61");
        #[cfg(windows)]
        assert_eq!(
            render(&name, OutputFormat::Hex).unwrap(),
            "0068006f00730074002d0061"
        );
    }

    #[cfg(windows)]
    #[test]
    fn render_wide_surrogate() {
        use std::os::windows::ffi::OsStringExt;

        let name = HostName::from(OsString::from_wide(&[0x68, 0xd800]));
        assert!(render(&name, OutputFormat::Strict).is_err());
        assert_eq!(render(&name, OutputFormat::Hex).unwrap(), "0068d800");
    }

    #[cfg(unix)]
    #[test]
    fn render_not_unicode() {
        use std::os::unix::ffi::OsStringExt;

        let name = HostName::from(OsString::from_vec(vec![b'h', 0xff]));
        assert_eq!(render(&name, OutputFormat::Lossy).unwrap(), "h\u{fffd}");
        assert!(render(&name, OutputFormat::Strict).is_err());
        assert_eq!(render(&name, OutputFormat::Hex).unwrap(), "68ff");
    }
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use clap_complete::Shell;

const ARG_EXPECT: &str = "expect";
const ARG_CASE_SENSITIVE: &str = "case-sensitive";
const ARG_STRICT: &str = "strict";
const ARG_HEX: &str = "hex";
const ARG_VERBOSE: &str = "verbose";
const ARG_COMPLETION: &str = "completion";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum OutputFormat {
    #[default]
    Lossy,
    Strict,
    Hex,
}

#[derive(Debug, Default)]
pub(crate) struct ProcArgs {
    pub(crate) verbose_level: u8,
    pub(crate) expect: Option<String>,
    pub(crate) case_sensitive: bool,
    pub(crate) format: OutputFormat,
    shell_completion: Option<Shell>,
}

impl ProcArgs {
    pub(crate) fn generate_shell_completion(&mut self) -> bool {
        let Some(shell) = self.shell_completion.take() else {
            return false;
        };
        let mut cmd = build_cli_args();
        let bin_name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, bin_name, &mut io::stdout());
        true
    }
}

pub(crate) fn build_cli_args() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new(ARG_EXPECT)
                .help("Fail unless the host name equals this value")
                .long(ARG_EXPECT)
                .num_args(1)
                .value_name("NAME")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new(ARG_CASE_SENSITIVE)
                .help("Compare with the expected value case-sensitively")
                .long(ARG_CASE_SENSITIVE)
                .action(ArgAction::SetTrue)
                .requires(ARG_EXPECT),
        )
        .arg(
            Arg::new(ARG_STRICT)
                .help("Fail if the host name is not valid unicode")
                .long(ARG_STRICT)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_HEX)
                .help("Print the platform encoded host name in hex")
                .long(ARG_HEX)
                .action(ArgAction::SetTrue)
                .conflicts_with(ARG_STRICT),
        )
        .arg(
            Arg::new(ARG_VERBOSE)
                .help("Show verbose output")
                .short('v')
                .long(ARG_VERBOSE)
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new(ARG_COMPLETION)
                .help("Generate shell completion script for the specified shell")
                .long(ARG_COMPLETION)
                .num_args(1)
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .exclusive(true),
        )
}

pub(crate) fn parse_clap(args: &ArgMatches) -> ProcArgs {
    let mut proc_args = ProcArgs::default();

    if let Some(shell) = args.get_one::<Shell>(ARG_COMPLETION) {
        proc_args.shell_completion = Some(*shell);
        return proc_args;
    }

    proc_args.verbose_level = args.get_count(ARG_VERBOSE);
    if let Some(name) = args.get_one::<String>(ARG_EXPECT) {
        proc_args.expect = Some(name.to_string());
    }
    proc_args.case_sensitive = args.get_flag(ARG_CASE_SENSITIVE);
    if args.get_flag(ARG_HEX) {
        proc_args.format = OutputFormat::Hex;
    } else if args.get_flag(ARG_STRICT) {
        proc_args.format = OutputFormat::Strict;
    }

    proc_args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> ProcArgs {
        let args = build_cli_args().try_get_matches_from(argv).unwrap();
        parse_clap(&args)
    }

    #[test]
    fn verify_cli() {
        build_cli_args().debug_assert();
    }

    #[test]
    fn defaults() {
        let proc_args = parse(&["g3hostname"]);
        assert_eq!(proc_args.verbose_level, 0);
        assert!(proc_args.expect.is_none());
        assert!(!proc_args.case_sensitive);
        assert_eq!(proc_args.format, OutputFormat::Lossy);
    }

    #[test]
    fn expect_fixed() {
        let proc_args = parse(&[
            "g3hostname",
            "--expect",
            "hostname-for-testing",
            "--case-sensitive",
            "-vv",
        ]);
        assert_eq!(proc_args.expect.as_deref(), Some("hostname-for-testing"));
        assert!(proc_args.case_sensitive);
        assert_eq!(proc_args.verbose_level, 2);
    }

    #[test]
    fn output_format() {
        assert_eq!(parse(&["g3hostname", "--hex"]).format, OutputFormat::Hex);
        assert_eq!(
            parse(&["g3hostname", "--strict"]).format,
            OutputFormat::Strict
        );
        assert!(
            build_cli_args()
                .try_get_matches_from(["g3hostname", "--hex", "--strict"])
                .is_err()
        );
    }

    #[test]
    fn case_sensitive_requires_expect() {
        assert!(
            build_cli_args()
                .try_get_matches_from(["g3hostname", "--case-sensitive"])
                .is_err()
        );
    }

    #[test]
    fn completion() {
        let mut proc_args = parse(&["g3hostname", "--completion", "bash"]);
        assert!(proc_args.shell_completion.is_some());
        assert!(
            build_cli_args()
                .try_get_matches_from(["g3hostname", "--completion", "bash", "--hex"])
                .is_err()
        );
        // only taken once
        proc_args.shell_completion = None;
        assert!(!proc_args.generate_shell_completion());
    }
}

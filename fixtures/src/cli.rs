use std::{collections::HashSet, ffi::OsString, path::PathBuf};

use clap::{Command, Parser};
use log::LevelFilter;

use crate::output::FixturePaths;

pub const MISSING_TX_OUT: &str = "missing required -tx-out path (or legacy -out)";

#[derive(Parser, Debug)]
#[command(name = "nitro_fixtures")]
#[command(about = "Generate Arbitrum Nitro encoding fixtures", long_about = None)]
pub struct GeneratorArgs {
    /// Output path for transaction fixtures (legacy spelling of --tx-out)
    #[arg(long, value_name = "PATH")]
    pub out: Option<OsString>,

    /// Output path for transaction fixtures
    #[arg(long, value_name = "PATH")]
    pub tx_out: Option<OsString>,

    /// Output path for receipt fixtures
    #[arg(long, value_name = "PATH")]
    pub receipt_out: Option<OsString>,

    /// Output path for header info fixtures
    #[arg(long, value_name = "PATH")]
    pub header_out: Option<OsString>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl GeneratorArgs {
    /// `--tx-out` wins over `--out`, an empty value counts as not given
    pub fn tx_out_path(&self) -> Option<PathBuf> {
        non_empty(&self.tx_out).or_else(|| non_empty(&self.out))
    }

    pub fn fixture_paths(&self) -> Option<FixturePaths> {
        let tx_out = self.tx_out_path()?;
        Some(FixturePaths {
            tx_out,
            receipt_out: non_empty(&self.receipt_out),
            header_out: non_empty(&self.header_out),
        })
    }
}

fn non_empty(value: &Option<OsString>) -> Option<PathBuf> {
    value
        .as_ref()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[derive(Parser, Debug)]
#[command(name = "verify_fixtures")]
#[command(about = "Check Nitro fixture files against the decoder", long_about = None)]
pub struct VerifierArgs {
    /// Transaction fixture file
    #[arg(long, value_name = "PATH")]
    pub tx: PathBuf,

    /// Receipt fixture file
    #[arg(long, value_name = "PATH")]
    pub receipt: Option<PathBuf>,

    /// Header info fixture file
    #[arg(long, value_name = "PATH")]
    pub header: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Parses the process arguments, accepting `-flag` for every long flag
pub fn parse_args<P: Parser>() -> P {
    P::parse_from(normalize_flags(&P::command(), std::env::args_os()))
}

pub fn try_parse_args_from<P, I, S>(args: I) -> Result<P, clap::Error>
where
    P: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    P::try_parse_from(normalize_flags(&P::command(), args))
}

/// Rewrites `-name` and `-name=value` to their `--` form when `name` is a
/// long flag of `command`. Short flags and anything after `--` are kept.
pub fn normalize_flags<I, S>(command: &Command, args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let longs: HashSet<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .chain(["help"])
        .collect();

    let mut terminated = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if terminated {
                return arg;
            }
            let text = match arg.to_str() {
                Some(text) => text.to_owned(),
                None => return arg,
            };
            if text == "--" {
                terminated = true;
                return arg;
            }

            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if longs.contains(name) {
                        OsString::from(format!("-{text}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

pub fn init_logger(verbose: bool) {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("nitro_fixtures")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_normalize_single_dash() {
        let normalized = normalize_flags(
            &GeneratorArgs::command(),
            args(&["-tx-out", "a.json", "-receipt-out=b.json", "-v", "--", "-out"]),
        );
        assert_eq!(
            normalized,
            ["nitro_fixtures", "--tx-out", "a.json", "--receipt-out=b.json", "-v", "--", "-out"]
                .map(OsString::from)
        );
    }

    #[test]
    fn test_tx_out_wins_over_out() {
        let parsed: GeneratorArgs =
            try_parse_args_from(args(&["-out", "legacy.json", "-tx-out", "tx.json"])).unwrap();
        assert_eq!(parsed.tx_out_path(), Some(PathBuf::from("tx.json")));

        let parsed: GeneratorArgs = try_parse_args_from(args(&["-out=legacy.json"])).unwrap();
        assert_eq!(parsed.tx_out_path(), Some(PathBuf::from("legacy.json")));
    }

    #[test]
    fn test_missing_tx_out() {
        let parsed: GeneratorArgs =
            try_parse_args_from(args(&["--receipt-out", "r.json"])).unwrap();
        assert!(parsed.fixture_paths().is_none());

        let parsed: GeneratorArgs = try_parse_args_from(args(&["-tx-out", ""])).unwrap();
        assert!(parsed.fixture_paths().is_none());

        let parsed: GeneratorArgs = try_parse_args_from(args(&["-tx-out="])).unwrap();
        assert!(parsed.tx_out_path().is_none());
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let parsed: GeneratorArgs =
            try_parse_args_from(args(&["-out", "legacy.json", "-tx-out", ""])).unwrap();
        assert_eq!(parsed.tx_out_path(), Some(PathBuf::from("legacy.json")));

        let parsed: GeneratorArgs = try_parse_args_from(args(&[
            "-tx-out",
            "tx.json",
            "-receipt-out",
            "",
            "-header-out=",
        ]))
        .unwrap();
        assert_eq!(parsed.fixture_paths(), Some(FixturePaths::new("tx.json")));
    }

    #[test]
    fn test_fixture_paths() {
        let parsed: GeneratorArgs = try_parse_args_from(args(&[
            "--tx-out",
            "tx.json",
            "-header-out",
            "h.json",
            "-verbose",
        ]))
        .unwrap();
        assert!(parsed.verbose);
        assert_eq!(
            parsed.fixture_paths(),
            Some(FixturePaths {
                tx_out: PathBuf::from("tx.json"),
                receipt_out: None,
                header_out: Some(PathBuf::from("h.json")),
            })
        );
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result: Result<GeneratorArgs, _> = try_parse_args_from(args(&["-bogus", "x"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_verifier_requires_tx() {
        let result: Result<VerifierArgs, _> = try_parse_args_from(args(&["-receipt", "r.json"]));
        assert!(result.is_err());

        let parsed: VerifierArgs =
            try_parse_args_from(args(&["-tx", "tx.json", "-header", "h.json"])).unwrap();
        assert_eq!(parsed.tx, PathBuf::from("tx.json"));
        assert_eq!(parsed.header, Some(PathBuf::from("h.json")));
        assert!(parsed.receipt.is_none());
    }
}

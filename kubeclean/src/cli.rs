//! This file defines the command-line interface (CLI) for the kubeclean application.
//! License: MIT OR Apache-2.0

use clap::{ArgAction, Parser};

/// Top-level CLI definition. There are no subcommands: the manifest is read
/// from stdin and the cleaned manifest is written to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "kubeclean",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip cluster-generated fields from Kubernetes manifests",
    long_about = "kubeclean reads a Kubernetes manifest (a single resource or a List, as printed by `kubectl get -o yaml`) from stdin and writes it back without the fields the cluster filled in: status, UIDs, resource versions, timestamps, assigned cluster IPs and controller annotations. Values left empty are pruned. Raw regex substitutions can be applied to the text before it is parsed.",
)]
pub struct Cli {
    /// Print more stuff
    #[arg(long, short = 'v', help = "Enable debug logging on stderr.")]
    pub verbose: bool,

    /// Raw string replacement, applied to the input text before parsing.
    #[arg(
        long = "replace-raw",
        short = 's',
        value_name = "FROM=TO",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        help = "Replace every match of the regex FROM with TO in the raw input. Repeatable; applied in order."
    )]
    pub replace_raw: Vec<String>,

    /// Intelligent namespace replacement (not implemented; accepted and ignored).
    #[arg(long, short = 'n', value_name = "NAMESPACE", help = "Reserved. Accepted but has no effect.")]
    pub namespace: Option<String>,

    /// Remove cattle data (from/if used rancher).
    #[arg(
        long = "remove-cattle",
        short = 'c',
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        help = "Remove Rancher (cattle) metadata. Defaults to true."
    )]
    pub remove_cattle: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["kubeclean"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.replace_raw.is_empty());
        assert!(cli.namespace.is_none());
        assert!(cli.remove_cattle);
    }

    #[test]
    fn test_replace_raw_is_repeatable_and_ordered() {
        let cli = Cli::try_parse_from([
            "kubeclean", "-s", "a=b", "--replace-raw", "c=d", "--replace-raw=e=f",
        ])
        .unwrap();
        assert_eq!(cli.replace_raw, vec!["a=b", "c=d", "e=f"]);
    }

    #[test]
    fn test_replace_raw_accepts_leading_hyphen() {
        let cli = Cli::try_parse_from(["kubeclean", "-s", "-dev=-prod"]).unwrap();
        assert_eq!(cli.replace_raw, vec!["-dev=-prod"]);
    }

    #[test]
    fn test_remove_cattle_forms() {
        assert!(Cli::try_parse_from(["kubeclean", "-c"]).unwrap().remove_cattle);
        assert!(!Cli::try_parse_from(["kubeclean", "-c", "false"]).unwrap().remove_cattle);
        assert!(!Cli::try_parse_from(["kubeclean", "--remove-cattle=false"]).unwrap().remove_cattle);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["kubeclean", "--frobnicate"]).is_err());
    }

    #[test]
    fn test_namespace_is_accepted() {
        let cli = Cli::try_parse_from(["kubeclean", "-n", "staging"]).unwrap();
        assert_eq!(cli.namespace.as_deref(), Some("staging"));
    }
}

//! Command-line parsing tests.

use clap::Parser;
use pulsage_gateway::{Cli, GatewayConfig};
use std::io::Write;

#[test]
fn parse_without_arguments() {
    let cli = Cli::try_parse_from(["pulsage"]).unwrap();
    assert!(cli.config.is_none());
    assert!(cli.bind.is_none());
}

#[test]
fn bind_flag_overrides_config() {
    let cli = Cli::try_parse_from(["pulsage", "--bind", "0.0.0.0:9999"]).unwrap();
    assert_eq!(cli.bind_address(&GatewayConfig::default()), "0.0.0.0:9999");

    let cli = Cli::try_parse_from(["pulsage"]).unwrap();
    assert_eq!(cli.bind_address(&GatewayConfig::default()), "127.0.0.1:8501");
}

#[test]
fn config_flag_loads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nport = 7000").unwrap();
    let path = file.path().to_str().unwrap().to_owned();

    let cli = Cli::try_parse_from(["pulsage", "-c", &path]).unwrap();
    let config = cli.load_config().unwrap();
    assert_eq!(config.server.port, 7000);
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["pulsage", "--verbose"]).is_err());
}

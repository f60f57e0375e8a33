//! CLI command structure using clap

use clap::Parser;

/// Re-render autogen sections and whole-file templates in the current project
///
/// Reads `autogen.toml` from the current directory, or falls back to the
/// builtin manifest. Set `RUST_LOG=debug` to follow the scan.
#[derive(Parser)]
#[command(name = "autogen")]
#[command(version, about, long_about)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_rejects_arguments() {
        assert!(Cli::try_parse_from(["autogen", "extra"]).is_err());
        assert!(Cli::try_parse_from(["autogen", "--force"]).is_err());
        assert!(Cli::try_parse_from(["autogen"]).is_ok());
    }
}

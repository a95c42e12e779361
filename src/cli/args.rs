use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "barcus")]
#[command(about = "Parse and check barcus task commands")]
#[command(long_about = "barcus - a personal task tracker

Tasks are managed by typing short keyword commands. This tool parses those
commands and shows exactly what each line would do, or why it is rejected.

QUICK START:
  barcus parse todo read book                 Parse a single command
  barcus parse deadline essay /by 22/08/2024 16:00
  barcus repl                                 Parse commands line by line
  barcus keywords                             List every command keyword

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  barcus <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. When omitted, the
    /// `general.default_output` setting from the config file is used.
    #[arg(short, long, value_enum, global = true, env = "BARCUS_OUTPUT")]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a single command line
    ///
    /// All remaining words are joined with single spaces and parsed as one
    /// line. Lines that start with an unknown word are reported as unknown;
    /// lines that start with a keyword but have the wrong shape fail with
    /// that keyword's message and a non-zero exit code.
    ///
    /// # Examples
    ///
    ///   barcus parse todo homework
    ///   barcus parse event camp /from 22/08/2024 09:00 /to 24/08/2024 18:00
    ///   barcus parse tag 2 '#fun'
    ///   barcus -o json parse mark 2
    #[command(alias = "p")]
    Parse {
        /// The command line to parse
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Parse commands interactively, one per line
    ///
    /// Reads lines from standard input until 'bye' or end of input. Each
    /// line is parsed and reported; rejected lines show their message and
    /// the session carries on.
    ///
    /// # Examples
    ///
    ///   barcus repl
    ///   cat commands.txt | barcus repl -o json
    #[command(alias = "r")]
    Repl,

    /// List every command keyword and its usage
    #[command(alias = "k")]
    Keywords,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   barcus completions bash
    ///   barcus completions zsh --install
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Print installation instructions instead of the script
        #[arg(long)]
        install: bool,
    },
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default config file to ~/.barcus/config.yaml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Print the path of the config file
    Path,
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
    fn test_parse_collects_words() {
        let cli = Cli::try_parse_from(["barcus", "parse", "deadline", "essay", "/by", "22/08/2024", "16:00"])
            .unwrap();
        match cli.command {
            Commands::Parse { words } => {
                assert_eq!(words.join(" "), "deadline essay /by 22/08/2024 16:00");
            },
            _ => panic!("expected parse subcommand"),
        }
    }

    #[test]
    fn test_parse_accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["barcus", "parse", "delete", "-1"]).unwrap();
        match cli.command {
            Commands::Parse { words } => assert_eq!(words, vec!["delete", "-1"]),
            _ => panic!("expected parse subcommand"),
        }
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::try_parse_from(["barcus", "keywords", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}

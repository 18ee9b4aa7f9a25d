//! singlish - Singlish to Sinhala transliteration on the command line

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use singlish::config::{load_config, TransliteratorConfig};
use singlish::{Transliterator, VowelAdvance};

/// Transliterate romanized Singlish text into Sinhala script
#[derive(Debug, Parser)]
#[command(name = "singlish", version, about)]
struct Cli {
    /// Text to transliterate (stdin when omitted)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read input from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON table bundle replacing the built-in alphabet
    #[arg(short, long, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// Advance past an independent vowel by the matched key length
    #[arg(long)]
    match_length: bool,

    /// Fail on the first word that cannot be segmented
    #[arg(long)]
    strict: bool,

    /// Print the active tables as JSON and exit
    #[arg(long)]
    print_tables: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn init_logging(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }

    /// File settings first, command-line flags on top
    fn settings(&self) -> Result<TransliteratorConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => TransliteratorConfig::default(),
        };
        if let Some(path) = &self.tables {
            config = config.with_tables_path(path);
        }
        if self.match_length {
            config = config.with_vowel_advance(VowelAdvance::MatchLength);
        }
        if self.strict {
            config = config.with_strict(true);
        }
        Ok(config)
    }

    fn read_input(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
        io::read_to_string(io::stdin()).context("failed to read stdin")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    log::debug!("arguments: {:?}", cli);

    let config = cli.settings()?;
    let transliterator = Transliterator::from_config(&config)?;

    if cli.print_tables {
        println!("{}", transliterator.tables().to_json_pretty()?);
        return Ok(());
    }

    let input = cli.read_input()?;
    // a trailing newline from stdin or a file is not an extra paragraph
    let input = input.strip_suffix('\n').unwrap_or(&input);

    let output = if config.strict {
        transliterator.try_transliterate(input)?
    } else {
        transliterator.transliterate(input)
    };
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from(["singlish", "--match-length", "--strict", "ka"]);
        let config = cli.settings().unwrap();
        assert_eq!(config.vowel_advance, VowelAdvance::MatchLength);
        assert!(config.strict);
        assert_eq!(cli.read_input().unwrap(), "ka");
    }

    #[test]
    fn test_text_conflicts_with_input() {
        let result = Cli::try_parse_from(["singlish", "--input", "in.txt", "ka"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_tables_flag_sets_path() {
        let cli = Cli::parse_from(["singlish", "-t", "alphabet.json", "ka"]);
        let config = cli.settings().unwrap();
        assert_eq!(config.tables_path, Some(PathBuf::from("alphabet.json")));
        assert_eq!(config.vowel_advance, VowelAdvance::Fixed);
    }
}

//! Command line argument parsing for the Concordancer CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::concordance::SortSide;
use crate::config::{
    ConcordanceConfig, DEFAULT_LEFT_CONTEXT_SIZE, DEFAULT_RIGHT_CONTEXT_SIZE, DEFAULT_TOP_N,
};
use crate::error::{ConcordanceError, Result};

/// Concordancer - word concordance and frequency extraction for plain text
#[derive(Parser, Debug, Clone)]
#[command(name = "concordancer")]
#[command(about = "Extract word concordances and frequency statistics from plain text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ConcordancerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ConcordancerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the full pipeline and write report.txt
    Run(RunArgs),

    /// Print the concordance of a word
    Concordance(ConcordanceArgs),

    /// Print the adjacent words of a word
    Adjacent(AdjacentArgs),

    /// Print the most frequent words
    Top(TopArgs),
}

/// Arguments for a full pipeline run
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// JSON configuration file; flags below override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Text file to analyse
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Word to build the concordance for
    #[arg(short, long)]
    pub word: Option<String>,

    /// Stop-word list (whitespace separated)
    #[arg(short, long, value_name = "STOP_WORDS_FILE")]
    pub stop_words: Option<PathBuf>,

    /// Number of tokens before each occurrence
    #[arg(short, long)]
    pub left: Option<usize>,

    /// Number of tokens after each occurrence
    #[arg(short, long)]
    pub right: Option<usize>,

    /// Sort the concordance by left or right context
    #[arg(long)]
    pub sort: Option<SortSide>,

    /// Number of most frequent words to report
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Directory that receives report.txt
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

impl RunArgs {
    /// Merge the optional config file with the flags given on the command line.
    pub fn into_config(self) -> Result<ConcordanceConfig> {
        let mut config = match &self.config {
            Some(path) => ConcordanceConfig::from_file(path)?,
            None => ConcordanceConfig::default(),
        };

        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(word) = self.word {
            config.word = word;
        }
        if let Some(stop_words) = self.stop_words {
            config.stop_words_path = Some(stop_words);
        }
        if let Some(left) = self.left {
            config.left_context_size = left;
        }
        if let Some(right) = self.right {
            config.right_context_size = right;
        }
        if self.sort.is_some() {
            config.sort = self.sort;
        }
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }

        if config.input_path.as_os_str().is_empty() {
            return Err(ConcordanceError::config(
                "no input file given (pass INPUT or set input_path in --config)",
            ));
        }

        Ok(config)
    }
}

/// Arguments for printing a concordance
#[derive(Parser, Debug, Clone)]
pub struct ConcordanceArgs {
    /// Text file to analyse
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Word to build the concordance for
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Number of tokens before each occurrence
    #[arg(short, long, default_value_t = DEFAULT_LEFT_CONTEXT_SIZE)]
    pub left: usize,

    /// Number of tokens after each occurrence
    #[arg(short, long, default_value_t = DEFAULT_RIGHT_CONTEXT_SIZE)]
    pub right: usize,

    /// Sort the concordance by left or right context
    #[arg(long)]
    pub sort: Option<SortSide>,

    /// Also write report.txt into this directory
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for printing adjacent words
#[derive(Parser, Debug, Clone)]
pub struct AdjacentArgs {
    /// Text file to analyse
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Word whose neighbours are extracted
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Distance of the left neighbour (0 to skip the left side)
    #[arg(short, long, default_value_t = 1)]
    pub left: usize,

    /// Distance of the right neighbour (0 to skip the right side)
    #[arg(short, long, default_value_t = 1)]
    pub right: usize,
}

/// Arguments for printing the most frequent words
#[derive(Parser, Debug, Clone)]
pub struct TopArgs {
    /// Text file to analyse
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of words to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Stop-word list (whitespace separated)
    #[arg(short, long, value_name = "STOP_WORDS_FILE")]
    pub stop_words: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_concordance_command() {
        let args = ConcordancerArgs::try_parse_from([
            "concordancer",
            "concordance",
            "text.txt",
            "happy",
            "--left",
            "1",
            "--sort",
            "right",
        ])
        .unwrap();

        if let Command::Concordance(conc_args) = args.command {
            assert_eq!(conc_args.input, PathBuf::from("text.txt"));
            assert_eq!(conc_args.word, "happy");
            assert_eq!(conc_args.left, 1);
            assert_eq!(conc_args.right, DEFAULT_RIGHT_CONTEXT_SIZE);
            assert_eq!(conc_args.sort, Some(SortSide::Right));
            assert!(conc_args.output_dir.is_none());
        } else {
            panic!("Expected Concordance command");
        }
    }

    #[test]
    fn test_negative_context_is_rejected() {
        let result = ConcordancerArgs::try_parse_from([
            "concordancer",
            "concordance",
            "text.txt",
            "happy",
            "--left=-1",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_top_command() {
        let args = ConcordancerArgs::try_parse_from([
            "concordancer",
            "top",
            "text.txt",
            "-n",
            "5",
            "--stop-words",
            "stop.txt",
        ])
        .unwrap();

        if let Command::Top(top_args) = args.command {
            assert_eq!(top_args.top_n, 5);
            assert_eq!(top_args.stop_words, Some(PathBuf::from("stop.txt")));
        } else {
            panic!("Expected Top command");
        }
    }

    #[test]
    fn test_run_args_into_config() {
        let args = ConcordancerArgs::try_parse_from([
            "concordancer",
            "run",
            "text.txt",
            "--word",
            "happy",
            "--right",
            "0",
            "--sort",
            "left",
            "--output-dir",
            "out",
        ])
        .unwrap();

        let Command::Run(run_args) = args.command else {
            panic!("Expected Run command");
        };
        let config = run_args.into_config().unwrap();

        assert_eq!(config.input_path, PathBuf::from("text.txt"));
        assert_eq!(config.word, "happy");
        assert_eq!(config.left_context_size, DEFAULT_LEFT_CONTEXT_SIZE);
        assert_eq!(config.right_context_size, 0);
        assert_eq!(config.sort, Some(SortSide::Left));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_run_without_input_fails() {
        let args = ConcordancerArgs::try_parse_from(["concordancer", "run", "-w", "happy"]).unwrap();

        let Command::Run(run_args) = args.command else {
            panic!("Expected Run command");
        };

        assert!(matches!(
            run_args.into_config(),
            Err(ConcordanceError::Config(_))
        ));
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = ConcordancerArgs::try_parse_from(["concordancer", "top", "t.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = ConcordancerArgs::try_parse_from(["concordancer", "-vv", "top", "t.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args =
            ConcordancerArgs::try_parse_from(["concordancer", "--quiet", "top", "t.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            ConcordancerArgs::try_parse_from(["concordancer", "--format", "json", "top", "t.txt"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}

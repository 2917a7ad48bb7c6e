//! Command implementations for the Concordancer CLI.

use std::path::Path;

use log::{debug, info};

use crate::analysis::token::Token;
use crate::analysis::token_filter::remove_stop_words;
use crate::analysis::tokenizer::tokenize;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::concordance::{ConcordanceBuilder, ConcordanceSorter, get_adjacent_words};
use crate::error::{ConcordanceError, Result};
use crate::frequency::calculate_frequencies;
use crate::pipeline::Pipeline;
use crate::report::{read_from_file, read_stop_words, write_to_file};

/// Execute a CLI command.
pub fn execute_command(args: ConcordancerArgs) -> Result<()> {
    match &args.command {
        Command::Run(run_args) => run_pipeline(run_args.clone(), &args),
        Command::Concordance(conc_args) => show_concordance(conc_args.clone(), &args),
        Command::Adjacent(adj_args) => show_adjacent(adj_args.clone(), &args),
        Command::Top(top_args) => show_top_words(top_args.clone(), &args),
    }
}

/// Run the full pipeline and write the report.
fn run_pipeline(args: RunArgs, cli_args: &ConcordancerArgs) -> Result<()> {
    let mut config = args.into_config()?;
    config.word = normalized_word(&config.word)?;
    debug!("pipeline configuration: {config:?}");

    let summary = Pipeline::new(config).run()?;

    output_result("Pipeline finished", &summary, cli_args)
}

/// Print the concordance of a word, optionally writing the report.
fn show_concordance(args: ConcordanceArgs, cli_args: &ConcordancerArgs) -> Result<()> {
    let word = normalized_word(&args.word)?;
    let tokens = load_tokens(&args.input)?;

    let builder = ConcordanceBuilder::new(args.left, args.right);
    let windows = match args.sort {
        Some(side) => ConcordanceSorter::new(builder, side).sort(&tokens, &word),
        None => builder.build(&tokens, &word),
    };

    let report_path = match &args.output_dir {
        Some(dir) => Some(write_to_file(dir, &windows)?),
        None => None,
    };

    output_result(
        "Concordance extracted",
        &ConcordanceResult {
            word,
            windows,
            report_path,
        },
        cli_args,
    )
}

/// Print the adjacent words of a word.
fn show_adjacent(args: AdjacentArgs, cli_args: &ConcordancerArgs) -> Result<()> {
    let word = normalized_word(&args.word)?;
    let tokens = load_tokens(&args.input)?;

    let pairs = get_adjacent_words(&tokens, &word, args.left, args.right);

    output_result(
        "Adjacent words extracted",
        &AdjacencyResult { word, pairs },
        cli_args,
    )
}

/// Print the most frequent words, after optional stop-word removal.
fn show_top_words(args: TopArgs, cli_args: &ConcordancerArgs) -> Result<()> {
    let mut tokens = load_tokens(&args.input)?;

    if let Some(path) = &args.stop_words {
        let stop_words = read_stop_words(path)?;
        tokens = remove_stop_words(&tokens, &stop_words);
        debug!("{} tokens left after stop words", tokens.len());
    }

    let table = calculate_frequencies(&tokens);

    output_result(
        "Frequencies calculated",
        &TopWordsResult {
            total_tokens: table.total(),
            distinct_tokens: table.len(),
            words: table.top(args.top_n).to_vec(),
        },
        cli_args,
    )
}

/// Read and tokenize a document.
fn load_tokens(path: &Path) -> Result<Vec<Token>> {
    let tokens = tokenize(&read_from_file(path)?);
    info!("{} tokens in {}", tokens.len(), path.display());
    Ok(tokens)
}

/// Normalize a word from the command line the same way document text is,
/// so `Happy!` finds `happy`.
fn normalized_word(word: &str) -> Result<String> {
    let mut tokens = tokenize(word);
    match tokens.len() {
        1 => Ok(tokens.remove(0)),
        0 => Err(ConcordanceError::invalid_argument(format!(
            "'{word}' contains no word characters"
        ))),
        _ => Err(ConcordanceError::invalid_argument(format!(
            "'{word}' is more than one word; phrase search is not supported"
        ))),
    }
}

//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{BanterArgs, OutputFormat};
use crate::error::Result;

/// Result structure for corpus validation.
#[derive(Debug, Serialize)]
pub struct ValidationOutput {
    pub path: String,
    pub intents: usize,
    pub patterns: usize,
    pub responses: usize,
}

/// Result structure for corpus statistics.
#[derive(Debug, Serialize)]
pub struct CorpusStatsOutput {
    pub intents: usize,
    pub patterns: usize,
    pub responses: usize,
    pub vocabulary_size: usize,
}

/// Result structure for one-shot matching.
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub matcher: String,
    pub text: String,
    pub tag: Option<String>,
    pub confidence: Option<f64>,
    pub duration_ms: u64,
}

/// Serialize a result as JSON, honoring `--pretty`.
pub fn output_json<T: Serialize>(result: &T, args: &BanterArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Print a validation result.
pub fn output_validation(result: &ValidationOutput, args: &BanterArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Corpus OK: {}", result.path);
            }
            println!(
                "{} intents, {} patterns, {} responses",
                result.intents, result.patterns, result.responses
            );
            Ok(())
        }
    }
}

/// Print a corpus statistics result.
pub fn output_stats(result: &CorpusStatsOutput, args: &BanterArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("Intents:          {}", result.intents);
            println!("Patterns:         {}", result.patterns);
            println!("Responses:        {}", result.responses);
            println!("Vocabulary terms: {}", result.vocabulary_size);
            Ok(())
        }
    }
}

/// Print a one-shot match result.
pub fn output_match(result: &MatchOutput, args: &BanterArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("{}", result.text);
            if args.verbosity() > 1 {
                if let Some(tag) = &result.tag {
                    println!("  tag: {tag}");
                }
                if let Some(confidence) = result.confidence {
                    println!("  confidence: {confidence:.2}");
                }
                println!("  matched in {} ms by {}", result.duration_ms, result.matcher);
            }
            Ok(())
        }
    }
}

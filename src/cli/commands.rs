//! Command implementations for the Banter CLI.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::StandardAnalyzer;
use crate::analysis::analyzer::Analyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::intent::{
    Intent, RandomResponseSelector, ResponseSelector, SeededResponseSelector, load_intents,
};
use crate::matcher::{Matcher, TfIdfVectorizer, new_keyword, new_similarity};
use crate::session::{Cart, ChatSession, Menu, PaymentMethod};

/// Execute a CLI command.
pub fn execute_command(args: BanterArgs) -> Result<()> {
    match &args.command {
        Command::Validate(validate_args) => validate_corpus(validate_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Match(match_args) => run_match(match_args.clone(), &args),
        Command::Chat(chat_args) => run_chat(chat_args.clone(), &args),
    }
}

/// Validate a corpus document.
fn validate_corpus(args: ValidateArgs, cli_args: &BanterArgs) -> Result<()> {
    let intents = load_intents(&args.corpus_file)?;

    output_validation(
        &ValidationOutput {
            path: args.corpus_file.to_string_lossy().to_string(),
            intents: intents.len(),
            patterns: intents.iter().map(|i| i.patterns.len()).sum(),
            responses: intents.iter().map(|i| i.responses.len()).sum(),
        },
        cli_args,
    )
}

/// Show corpus statistics, including the fitted vocabulary size.
fn show_stats(args: StatsArgs, cli_args: &BanterArgs) -> Result<()> {
    let intents = load_intents(&args.corpus_file)?;

    let patterns: Vec<String> = intents
        .iter()
        .flat_map(|intent| intent.patterns.iter().cloned())
        .collect();

    let mut vectorizer = TfIdfVectorizer::new(Arc::new(StandardAnalyzer::new()));
    vectorizer.fit(&patterns)?;

    output_stats(
        &CorpusStatsOutput {
            intents: intents.len(),
            patterns: patterns.len(),
            responses: intents.iter().map(|i| i.responses.len()).sum(),
            vocabulary_size: vectorizer.vocabulary_size(),
        },
        cli_args,
    )
}

/// Match a single query and print the result.
fn run_match(args: MatchArgs, cli_args: &BanterArgs) -> Result<()> {
    let intents = load_intents(&args.corpus_file)?;
    let matcher = build_matcher(args.matcher, &intents, args.seed, args.keep_stop_words)?;

    let start = Instant::now();
    let result = matcher.match_query(&args.query)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    output_match(
        &MatchOutput {
            matcher: matcher.name().to_string(),
            text: result.text,
            tag: result.tag,
            confidence: result.confidence,
            duration_ms,
        },
        cli_args,
    )
}

/// Run an interactive chat session on stdin/stdout.
fn run_chat(args: ChatArgs, cli_args: &BanterArgs) -> Result<()> {
    let intents = load_intents(&args.corpus_file)?;
    let matcher = build_matcher(args.matcher, &intents, args.seed, args.keep_stop_words)?;
    let menu = args.menu.as_ref().map(Menu::load).transpose()?;

    let mut session = ChatSession::new();
    let mut cart = Cart::new();

    if cli_args.verbosity() > 0 {
        println!("Chatting with the {} matcher. Type `quit` to leave.", matcher.name());
        if menu.is_some() {
            println!("Cart commands: /menu, /add <item>, /cart, /checkout <method>");
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("you> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            print!("you> ");
            stdout.flush()?;
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        if let Some(menu) = &menu {
            if let Some(reply) = handle_cart_command(input, menu, &mut cart) {
                println!("bot> {reply}");
                print!("you> ");
                stdout.flush()?;
                continue;
            }
        }

        let result = session.post(matcher.as_ref(), input)?;
        if cli_args.verbosity() > 1 {
            if let Some(confidence) = result.confidence {
                println!("  (confidence: {confidence:.2})");
            }
        }
        println!("bot> {}", result.text);

        print!("you> ");
        stdout.flush()?;
    }

    if cli_args.verbosity() > 0 {
        println!("Bye! ({} lines of chat this session)", session.len());
    }

    Ok(())
}

/// Handle a `/`-prefixed cart command; returns the reply, or None if the
/// input is not a cart command.
fn handle_cart_command(input: &str, menu: &Menu, cart: &mut Cart) -> Option<String> {
    let mut parts = input.splitn(2, ' ');
    let command = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match command {
        "/menu" => {
            let listing = menu
                .items()
                .iter()
                .map(|item| format!("{} ({:.2})", item.name, item.price))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("On the menu: {listing}"))
        }
        "/add" => match cart.add(menu, rest) {
            Ok(()) => Some(format!("Added {rest} to your cart.")),
            Err(e) => Some(e.to_string()),
        },
        "/cart" => {
            if cart.is_empty() {
                Some("Your cart is empty.".to_string())
            } else {
                Some(format!(
                    "In your cart: {} (total {:.2})",
                    cart.items().join(", "),
                    cart.total(menu)
                ))
            }
        }
        "/checkout" => {
            let method = match rest.parse::<PaymentMethod>() {
                Ok(method) => method,
                Err(e) => return Some(e.to_string()),
            };
            match cart.checkout(menu, method) {
                Ok(receipt) => Some(format!(
                    "Payment successful! Charged {:.2}. Your order is being prepared.",
                    receipt.total
                )),
                Err(e) => Some(e.to_string()),
            }
        }
        _ => None,
    }
}

/// Build the requested matcher over the loaded intents.
fn build_matcher(
    kind: MatcherKind,
    intents: &[Intent],
    seed: Option<u64>,
    keep_stop_words: bool,
) -> Result<Box<dyn Matcher>> {
    let selector: Arc<dyn ResponseSelector> = match seed {
        Some(seed) => Arc::new(SeededResponseSelector::new(seed)),
        None => Arc::new(RandomResponseSelector::new()),
    };

    match kind {
        MatcherKind::Keyword => Ok(new_keyword(intents, selector)),
        MatcherKind::Similarity => {
            let analyzer: Arc<dyn Analyzer> = if keep_stop_words {
                Arc::new(StandardAnalyzer::without_stop_words())
            } else {
                Arc::new(StandardAnalyzer::new())
            };
            new_similarity(intents, selector.as_ref(), analyzer)
        }
    }
}

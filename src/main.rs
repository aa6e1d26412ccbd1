//! Command-line interface for lexto-rs
//!
//! Usage:
//!   lexto [OPTIONS] [TEXT]
//!   echo "กินข้าวหรือยัง" | lexto -d lexitron.txt

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use lexto_rs::{LexerConfig, Tokenizer, Trie};

/// A dictionary-based Thai word tokenizer
#[derive(Debug, Parser)]
#[command(name = "lexto", version, about)]
struct Args {
    /// Text to tokenize (read from stdin when omitted)
    text: Option<String>,

    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "FILE", env = "LEXTO_DICT")]
    dict: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tokenize without a dictionary
    #[arg(short, long)]
    simple: bool,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Keep the case of Western words
    #[arg(long)]
    keep_case: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    }

    /// Merge the config file, if any, with the command-line flags
    fn lexer_config(&self) -> Result<LexerConfig> {
        let mut config = match &self.config {
            Some(path) => LexerConfig::from_file(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => LexerConfig::default(),
        };

        if let Some(dict) = &self.dict {
            config.dictionary = Some(dict.clone());
        }
        if self.keep_case {
            config.lowercase_western = false;
        }

        Ok(config)
    }

    fn input_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        Ok(input)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.init_logging();
    log::debug!("Arguments: {:?}", args);

    let config = args.lexer_config()?;
    let input_text = args.input_text()?;

    if input_text.is_empty() {
        bail!("no input text provided");
    }

    let tokenizer = if args.simple {
        Tokenizer::new(Trie::new()).lowercase_western(config.lowercase_western)
    } else {
        Tokenizer::from_config(&config)
    };
    let tokens = tokenizer.tokenize(&input_text);

    if args.json {
        let json = serde_json::to_string_pretty(&tokens).context("failed to serialize tokens")?;
        println!("{}", json);
    } else {
        for token in &tokens {
            println!("{}\t{}", token.text.escape_debug(), token.kind);
        }
    }

    Ok(())
}

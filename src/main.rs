//! lexvoice command line
//!
//! Reads text from the arguments (or stdin), runs it through a voice and
//! prints the phones:
//!
//! ```text
//! lexvoice [--debug|-d] [--lang NAME] [--config PATH] [--words|--json] TEXT...
//! lexvoice --list
//! ```

use anyhow::{bail, Context};
use log::{debug, error, info};
use lexvoice::voice::VoiceConfig;
use lexvoice::{lang, Utterance};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Segments,
    Words,
    Json,
}

#[derive(Debug)]
struct Args {
    lang: Option<String>,
    config: Option<PathBuf>,
    output: Output,
    list: bool,
    text: Vec<String>,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut parsed = Args {
        lang: None,
        config: None,
        output: Output::Segments,
        list: false,
        text: Vec::new(),
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" | "-d" => {}
            "--lang" | "-l" => {
                parsed.lang = Some(iter.next().context("--lang needs a language name")?.clone());
            }
            "--config" | "-c" => {
                parsed.config = Some(PathBuf::from(iter.next().context("--config needs a path")?));
            }
            "--words" | "-w" => parsed.output = Output::Words,
            "--json" | "-j" => parsed.output = Output::Json,
            "--list" => parsed.list = true,
            "--" => parsed.text.extend(iter.by_ref().cloned()),
            flag if flag.starts_with('-') && flag.len() > 1 => bail!("Unknown option: {}", flag),
            _ => parsed.text.push(arg.clone()),
        }
    }
    Ok(parsed)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    // Initialize logger
    if debug_mode {
        // Debug mode: write to lexvoice.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("lexvoice.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open lexvoice.log for debug logging: {}", e);
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "{} version {} starting (debug mode, logging to lexvoice.log)",
            lexvoice::APP_NAME,
            lexvoice::VERSION
        );
    } else {
        // Normal mode: minimal logging to stderr, only errors
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    if let Err(e) = run(&args) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let args = parse_args(args)?;
    debug!("Arguments: {:?}", args);

    if args.list {
        for name in lang::languages() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => VoiceConfig::load_from(path),
        None => VoiceConfig::load(),
    }
    .context("loading voice config")?;
    info!("Voice config from {:?}", config.path());

    let language = args.lang.clone().unwrap_or_else(|| config.language());
    let voice = config
        .build_voice_for(&language)
        .with_context(|| format!("building voice for language '{}'", language))?;

    let text = if args.text.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading text from stdin")?;
        buf
    } else {
        args.text.join(" ")
    };

    let utt = voice.text_to_utterance(&text)?;
    match args.output {
        Output::Segments => println!("{}", utt.segment_names().join(" ")),
        Output::Words => print_words(&utt),
        Output::Json => println!("{}", serde_json::to_string_pretty(&utt)?),
    }
    Ok(())
}

fn print_words(utt: &Utterance) {
    for word in &utt.words {
        let syllables: Vec<String> = word
            .syllables
            .iter()
            .map(|s| format!("{}{}", s.phones.join(" "), if s.stress > 0 { "*" } else { "" }))
            .collect();
        println!("{:<16} {}", word.name, syllables.join(" . "));
    }
}

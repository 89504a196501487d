//! CLI utility to classify one piece of news text against the prediction endpoint.

use std::io::Read;

use newscheck::config;
use newscheck::logging::{self, ConsoleOutput};
use newscheck::prediction::{self, HttpPredictor, Predictor};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    if let Err(err) = logging::init_with_console(ConsoleOutput::Stderr) {
        eprintln!("Logging disabled: {err}");
    }
    let mut settings = config::load_or_default().map_err(|err| err.to_string())?;
    if let Some(endpoint) = options.endpoint {
        settings.predict.endpoint = endpoint;
        settings.predict.validate().map_err(|err| err.to_string())?;
    }

    let raw = match options.text {
        Some(text) => text,
        None => read_stdin()?,
    };
    let text = prediction::submission_text(&raw).map_err(|err| err.to_string())?;

    let predictor = HttpPredictor::new(&settings.predict);
    let result = predictor.predict(text).map_err(|err| {
        format!(
            "{}\n({err}; endpoint {})",
            prediction::GENERIC_FAILURE_MESSAGE,
            predictor.endpoint()
        )
    })?;

    println!("{}", result.label);
    println!("{}", result.verdict.summary());
    if let Some(confidence) = result.confidence {
        println!("Confidence: {confidence}");
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    endpoint: Option<String>,
    text: Option<String>,
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut words = Vec::new();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--endpoint" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--endpoint requires a value".to_string())?;
                options.endpoint = Some(value.to_string());
            }
            "--" => {
                words.extend(args[idx + 1..].iter().cloned());
                break;
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown argument: {flag}\n\n{}", help_text()));
            }
            word => words.push(word.to_string()),
        }
        idx += 1;
    }
    if !words.is_empty() {
        options.text = Some(words.join(" "));
    }
    Ok(Some(options))
}

fn read_stdin() -> Result<String, String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    Ok(text)
}

fn help_text() -> &'static str {
    "Usage: newscheck-predict [--endpoint URL] [TEXT...]\n\n\
Classifies TEXT (or stdin when no TEXT is given) as fake or real news.\n\n\
Options:\n  --endpoint URL   Override the configured prediction endpoint\n  -h, --help       Show this help"
}

use std::io::Read;

use anyhow::Context;
use tracing::{error, info};

use correcteur::config::Config;
use correcteur::{render_highlights, CorrectionOptions, Corrector, LanguageToolClient};

const USAGE: &str = "usage: correcteur [--highlight] [--threshold <0..1>] [--server <url>] [text]
Reads the text from stdin when none is given on the command line.";

struct CliArgs {
    text: Option<String>,
    options: CorrectionOptions,
    server_url: String,
}

/// `Ok(None)` means help was requested and nothing should run.
fn parse_args<I>(mut args: I, config: &Config) -> Result<Option<CliArgs>, String>
where
    I: Iterator<Item = String>,
{
    let mut options = config.options();
    let mut server_url = config.server_url.clone();
    let mut words: Vec<String> = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--highlight" => options.highlight_corrections = true,
            "--no-capitalization" => options.preserve_capitalization = false,
            "--threshold" => {
                let value = args.next().ok_or("--threshold needs a value")?;
                let threshold: f64 = value
                    .parse()
                    .map_err(|_| format!("not a number: {value}"))?;
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(format!("threshold {threshold} outside 0..1"));
                }
                options.confidence_threshold = threshold;
            }
            "--server" => {
                server_url = args.next().ok_or("--server needs a value")?;
            }
            "--help" | "-h" => return Ok(None),
            _ => words.push(arg),
        }
    }

    let text = if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    };

    Ok(Some(CliArgs {
        text,
        options,
        server_url,
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load();
    let args = match parse_args(std::env::args().skip(1), &config) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("could not read text from stdin")?;
            buffer
        }
    };

    let client = LanguageToolClient::new(args.server_url).with_language(config.language.clone());
    let corrector = Corrector::new(client);

    match corrector.correct(&text, &args.options).await {
        Ok(result) => {
            if let Some(applied) = &result.applied {
                for edit in applied {
                    info!(
                        "{} -> {} at {}",
                        edit.original, edit.replacement, edit.position
                    );
                }
                println!(
                    "{}",
                    render_highlights(&result.corrected_text, applied, "[", "]")
                );
            } else {
                println!("{}", result.corrected_text);
            }
            Ok(())
        }
        Err(e) => {
            // leave the original text alone, report the failure once
            error!("correction failed: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> impl Iterator<Item = String> {
        args.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_usage_mentions_flags() {
        assert!(USAGE.contains("--highlight"));
        assert!(USAGE.contains("--threshold"));
    }

    #[test]
    fn test_help_is_not_an_error() {
        let config = Config::default();
        assert!(matches!(parse_args(argv(&["--help"]), &config), Ok(None)));
        assert!(matches!(parse_args(argv(&["-h"]), &config), Ok(None)));
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::default();
        let args = parse_args(
            argv(&["--highlight", "--threshold", "0.7", "du", "texte"]),
            &config,
        )
        .unwrap()
        .unwrap();
        assert!(args.options.highlight_corrections);
        assert_eq!(args.options.confidence_threshold, 0.7);
        assert_eq!(args.text.as_deref(), Some("du texte"));
    }

    #[test]
    fn test_bad_threshold_is_rejected() {
        let config = Config::default();
        assert!(parse_args(argv(&["--threshold", "deux"]), &config).is_err());
        assert!(parse_args(argv(&["--threshold", "1.5"]), &config).is_err());
        assert!(parse_args(argv(&["--threshold"]), &config).is_err());
    }

    #[test]
    fn test_no_args_means_read_stdin() {
        let config = Config::default();
        let args = parse_args(argv(&[]), &config).unwrap().unwrap();
        assert!(args.text.is_none());
        assert_eq!(args.server_url, config.server_url);
    }
}

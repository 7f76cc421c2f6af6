// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line front end.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use unispace_core::error::Result;
use unispace_core::types::DocumentType;
use unispace_text::{
    Registry, apply_custom_spacing_html, code_point_escape, compare, substitute_spaces,
    substitute_spaces_in_html,
};

use crate::services::app_services::AppServices;
use crate::state::Session;

#[derive(Debug, Parser)]
#[command(name = "unispace", version, about = "Swap ASCII spaces for look-alike Unicode whitespace")]
pub struct Cli {
    /// Settings file (defaults to $XDG_CONFIG_HOME/unispace/config.json).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` wins if set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the whitespace variants with their code points.
    Variants,
    /// Print word, character and space counts.
    Stats {
        #[command(flatten)]
        input: InputArgs,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Substitute spaces and print the result.
    Transform(TransformArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Use this text instead of reading a file or stdin.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Input file; stdin when omitted.
    pub file: Option<PathBuf>,

    /// Treat the input file as a PDF even without a .pdf extension.
    #[arg(long, requires = "file")]
    pub pdf: bool,
}

#[derive(Debug, Args)]
pub struct TransformArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Apply a single variant, e.g. "Hair Space".
    #[arg(long, value_parser = variant_name, conflicts_with = "combine")]
    pub variant: Option<String>,

    /// Apply variants in this order as one combined sequence.
    #[arg(long, num_args = 1.., value_parser = variant_name)]
    pub combine: Vec<String>,

    /// Input is HTML; only text nodes are rewritten.
    #[arg(long)]
    pub html: bool,

    /// Copy the result to the clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Report SHA-256 of input and output on stderr.
    #[arg(long)]
    pub fingerprint: bool,
}

/// Accept only names from the standard registry.
fn variant_name(name: &str) -> std::result::Result<String, String> {
    let registry = Registry::standard();
    if registry.contains(name) {
        return Ok(name.to_string());
    }
    let known: Vec<_> = registry.names().map(|n| format!("{n:?}")).collect();
    Err(format!("unknown variant; expected one of {}", known.join(", ")))
}

pub async fn run(command: Command, services: &AppServices) -> Result<()> {
    match command {
        Command::Variants => {
            for variant in services.registry().iter() {
                println!(
                    "{:<18} {:<20} {}",
                    variant.name,
                    code_point_escape(variant.sequence),
                    variant.description
                );
            }
            Ok(())
        }
        Command::Stats { input, json } => {
            let session = load_session(&input, services).await?;
            let stats = session.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!(
                    "Words: {}  Characters: {}  Spaces: {}  Source: {:?}",
                    stats.words,
                    stats.characters,
                    stats.spaces,
                    session.input_source()
                );
            }
            Ok(())
        }
        Command::Transform(args) => transform(args, services).await,
    }
}

async fn transform(args: TransformArgs, services: &AppServices) -> Result<()> {
    let registry = services.registry();
    let mut session = load_session(&args.input, services).await?;

    for name in &args.combine {
        session.select(name.as_str());
        session.add_selected(registry);
    }

    let (label, output) = match (&args.variant, session.combination().is_empty()) {
        (Some(name), _) => {
            let replacement = &registry[name.as_str()];
            (name.clone(), rewrite(session.input_text(), replacement, args.html)?)
        }
        (None, false) => {
            let combination = session.combination();
            let output = if args.html {
                apply_custom_spacing_html(combination.names(), session.input_text(), registry)?
            } else {
                combination.apply(session.input_text(), registry)
            };
            ("Custom".to_string(), output)
        }
        (None, true) => {
            print_grid(&session, registry);
            return Ok(());
        }
    };

    println!("{output}");

    if args.fingerprint {
        let comparison = compare(session.input_text(), &output);
        eprintln!("input  sha256 {} ({} bytes)", comparison.original, comparison.original_bytes);
        eprintln!(
            "output sha256 {} ({} bytes)",
            comparison.transformed, comparison.transformed_bytes
        );
    }

    if args.copy {
        eprintln!("{}", services.copy(&output, &label)?);
    }
    Ok(())
}

fn rewrite(text: &str, replacement: &str, html: bool) -> Result<String> {
    if html {
        substitute_spaces_in_html(text, replacement)
    } else {
        Ok(substitute_spaces(text, replacement))
    }
}

fn print_grid(session: &Session, registry: &Registry) {
    for cell in session.variant_outputs(registry) {
        println!("== {} {} ({})", cell.name, cell.escaped, cell.description);
        println!("{}", cell.output);
    }
}

async fn load_session(input: &InputArgs, services: &AppServices) -> Result<Session> {
    let mut session = Session::new();

    if let Some(text) = &input.text {
        session.set_text(text.as_str());
        return Ok(session);
    }

    match &input.file {
        Some(path) if input.pdf || is_pdf_path(path) => {
            let summary = services.load_pdf(&mut session, path, input.pdf).await?;
            tracing::info!(
                pages = summary.pages,
                title = %summary.title,
                author = %summary.author,
                "PDF loaded"
            );
        }
        Some(path) => session.set_text(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            session.set_text(text);
        }
    }
    Ok(session)
}

fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(DocumentType::from_extension)
        == Some(DocumentType::Pdf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_combination_in_order() {
        let cli = Cli::try_parse_from([
            "unispace",
            "transform",
            "--text",
            "a b",
            "--combine",
            "Hair Space",
            "Em Space",
        ])
        .unwrap();
        let Command::Transform(args) = cli.command else {
            panic!("expected transform");
        };
        assert_eq!(args.combine, ["Hair Space", "Em Space"]);
    }

    #[test]
    fn rejects_unknown_variant() {
        let result = Cli::try_parse_from(["unispace", "transform", "--variant", "Figure Space"]);
        assert!(result.is_err());
    }

    #[test]
    fn variant_and_combine_conflict() {
        let result = Cli::try_parse_from([
            "unispace",
            "transform",
            "--variant",
            "Em Space",
            "--combine",
            "Hair Space",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn pdf_detection_by_extension() {
        assert!(is_pdf_path(Path::new("paper.PDF")));
        assert!(!is_pdf_path(Path::new("paper.txt")));
        assert!(!is_pdf_path(Path::new("paper")));
    }

    #[test]
    fn html_rewrite_keeps_tags() {
        assert_eq!(
            rewrite("<b>a b</b>", "\u{2009}", true).unwrap(),
            "<b>a\u{2009}b</b>"
        );
        assert_eq!(rewrite("<b>a b</b>", "\u{2009}", false).unwrap(), "<b>a\u{2009}b</b>");
    }
}

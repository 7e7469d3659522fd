//! Command parsing and dispatch for `webaccess-criteria`.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info};
use unic_langid::LanguageIdentifier;
use webaccess_expr::{ValueSpan, capture_values, translate_id_to_label, translate_label_to_id};
use webaccess_rules::localization::{message, strip_directional_isolates};
use webaccess_rules::{Field, FieldOutcome, validate_expression_field};

use crate::config::{LogLevel, parse_language};
use crate::vocabulary::load_vocabulary;

/// Inspect, translate and validate Web Access criteria expressions.
#[derive(Debug, Parser)]
#[command(name = "webaccess-criteria", author, version, about)]
pub struct Cli {
    /// Language of user-facing messages, such as `fr`.
    #[arg(long = "lang", global = true, value_parser = parse_language)]
    pub language: Option<LanguageIdentifier>,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the value tokens of an expression with their byte offsets.
    Values(ValuesArgs),
    /// Replace labels with identifiers.
    ToIds(TranslateArgs),
    /// Replace identifiers with labels.
    ToLabels(TranslateArgs),
    /// Validate an expression the way the rule editor does before storing it.
    Check(CheckArgs),
}

/// Arguments of `values`.
#[derive(Debug, Args)]
pub struct ValuesArgs {
    /// Expression to scan.
    pub expression: String,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `to-ids` and `to-labels`.
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// JSON vocabulary file.
    #[arg(long)]
    pub vocabulary: PathBuf,
    /// Expression to translate.
    pub expression: String,
}

/// Arguments of `check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON vocabulary file.
    #[arg(long)]
    pub vocabulary: PathBuf,
    /// Expression field being edited: `role` or `states`.
    #[arg(long, default_value = "role")]
    pub field: Field,
    /// Raw field value; accelerator markers are accepted.
    pub expression: String,
}

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The command succeeded.
    Success,
    /// `check` rejected the expression.
    Rejected,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::Rejected => Self::FAILURE,
        }
    }
}

#[derive(Serialize)]
struct SpanReport<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> From<ValueSpan<'a>> for SpanReport<'a> {
    fn from(span: ValueSpan<'a>) -> Self {
        Self {
            text: span.text,
            start: span.start,
            end: span.end,
        }
    }
}

/// Run `command`, writing results to `out` and rejections to `err`.
///
/// Returns [`Status::Rejected`] when `check` rejects the expression.
///
/// # Errors
///
/// Returns an error if a vocabulary cannot be loaded, `check` is asked for a
/// field that is not an expression, or writing fails.
pub fn execute(command: &Command, out: &mut dyn Write, err: &mut dyn Write) -> Result<Status> {
    match command {
        Command::Values(args) => handle_values(args, out)?,
        Command::ToIds(args) => handle_translate(args, out, translate_label_to_id)?,
        Command::ToLabels(args) => handle_translate(args, out, translate_id_to_label)?,
        Command::Check(args) => return handle_check(args, out, err),
    }
    Ok(Status::Success)
}

fn handle_values(args: &ValuesArgs, out: &mut dyn Write) -> Result<()> {
    let spans = capture_values(&args.expression);
    if args.json {
        let reports: Vec<SpanReport<'_>> = spans.map(SpanReport::from).collect();
        serde_json::to_writer_pretty(&mut *out, &reports)
            .wrap_err("failed to serialize value spans")?;
        return writeln!(out).wrap_err("failed to write value spans");
    }
    for span in spans {
        writeln!(out, "{}..{}\t{}", span.start, span.end, span.text)
            .wrap_err_with(|| format!("failed to write value {:?}", span.text))?;
    }
    Ok(())
}

fn handle_translate(
    args: &TranslateArgs,
    out: &mut dyn Write,
    translate: fn(&str, &webaccess_expr::LabelTable) -> String,
) -> Result<()> {
    let table = load_vocabulary(&args.vocabulary)?;
    writeln!(out, "{}", translate(&args.expression, &table))
        .wrap_err("failed to write translated expression")
}

fn handle_check(args: &CheckArgs, out: &mut dyn Write, err: &mut dyn Write) -> Result<Status> {
    if args.field.vocabulary().is_none() {
        bail!("{} is not an expression field", args.field);
    }
    let table = load_vocabulary(&args.vocabulary)?;
    debug!(field = %args.field, expression = %args.expression, "checking expression");
    match validate_expression_field(args.field, &args.expression, &table) {
        Ok(FieldOutcome::Accepted(stored)) => {
            writeln!(out, "{stored}").wrap_err("failed to write accepted expression")?;
            Ok(Status::Success)
        }
        Ok(FieldOutcome::Cleared) => {
            writeln!(out, "{}", message("field-outcome-cleared"))
                .wrap_err("failed to write cleared outcome")?;
            Ok(Status::Success)
        }
        Err(error) => {
            info!(field = %error.field(), "expression rejected");
            writeln!(err, "{}", strip_directional_isolates(&error.to_string()))
                .wrap_err("failed to write rejection")?;
            Ok(Status::Rejected)
        }
    }
}

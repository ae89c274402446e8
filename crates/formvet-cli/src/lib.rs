//! formvet-cli: command-line host for the formvet validation engine.
//!
//! Loads a form document from YAML, runs the submission flow, and renders
//! the report as an aligned table or JSON. Exit codes: 0 valid, 1 invalid,
//! 2 on usage or load errors.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use formvet_core::{Engine, Field, Form, FormReport, Overrides, SubmitHooks};
use serde::Deserialize;
use tabwriter::TabWriter;

/// Stable crate label used for bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "formvet-cli"
}

/// Captured output of one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// A form document: optional settings overrides plus the tracked fields.
#[derive(Debug, Deserialize)]
struct FormDocument {
    #[serde(default)]
    settings: Overrides,
    #[serde(default)]
    fields: Vec<Field>,
}

/// Submission lifecycle events, recorded in firing order.
#[derive(Debug, Default)]
struct RecordedEvents {
    events: Vec<&'static str>,
}

impl SubmitHooks for RecordedEvents {
    fn on_submitting(&mut self) {
        self.events.push("submitting");
    }

    fn on_submitted(&mut self) {
        self.events.push("submitted");
    }

    fn on_invalid(&mut self, _report: &FormReport) {
        self.events.push("invalid");
    }
}

/// Run the CLI against already-split arguments.
pub fn run_cli(args: &[String]) -> CommandOutput {
    match args.first().map(String::as_str) {
        None | Some("help") | Some("--help") | Some("-h") => CommandOutput {
            stdout: help_text(),
            stderr: String::new(),
            exit_code: 0,
        },
        Some("--version") | Some("-v") => CommandOutput {
            stdout: format!("formvet {}\n", env!("CARGO_PKG_VERSION")),
            stderr: String::new(),
            exit_code: 0,
        },
        Some("check") => run_check(&args[1..]),
        Some(other) => CommandOutput {
            stdout: String::new(),
            stderr: format!("unknown command {other:?}\n\n{}", help_text()),
            exit_code: 2,
        },
    }
}

fn help_text() -> String {
    "\
formvet validates form field values against declarative rule strings.

Usage:
  formvet [command]

Available Commands:
  check       Validate a form document and report per-field errors
  help        Help about any command

Flags:
  -h, --help      help for formvet
  -v, --version   version for formvet

Use \"formvet check <form.yaml> [--json]\" to validate a document.\n"
        .to_string()
}

fn run_check(args: &[String]) -> CommandOutput {
    match execute_check(args) {
        Ok(out) => out,
        Err(message) => CommandOutput {
            stdout: String::new(),
            stderr: format!("{message}\n"),
            exit_code: 2,
        },
    }
}

fn execute_check(args: &[String]) -> Result<CommandOutput, String> {
    let mut json = false;
    let mut path: Option<&str> = None;
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            other if other.starts_with('-') => return Err(format!("unknown flag {other:?}")),
            other => {
                if path.is_some() {
                    return Err("expected exactly one form document".to_string());
                }
                path = Some(other);
            }
        }
    }
    let path = path.ok_or_else(|| "usage: formvet check <form.yaml> [--json]".to_string())?;

    let document = load_document(Path::new(path))?;
    let engine = Engine::new(document.settings).map_err(|err| err.to_string())?;
    let form = Form::new(document.fields);

    let mut events = RecordedEvents::default();
    let report = engine.submit(&form, &mut events);

    let stdout = if json {
        render_json(&report)?
    } else {
        render_table(&report, &events)?
    };
    let exit_code = i32::from(!report.is_valid());
    Ok(CommandOutput {
        stdout,
        stderr: String::new(),
        exit_code,
    })
}

fn load_document(path: &Path) -> Result<FormDocument, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("read {}: {err}", path.display()))?;
    serde_yaml::from_str(&raw).map_err(|err| format!("parse {}: {err}", path.display()))
}

fn render_json(report: &FormReport) -> Result<String, String> {
    let mut rendered =
        serde_json::to_string_pretty(report).map_err(|err| format!("encode report: {err}"))?;
    rendered.push('\n');
    Ok(rendered)
}

fn render_table(report: &FormReport, events: &RecordedEvents) -> Result<String, String> {
    let mut out = String::new();
    for event in &events.events {
        let _ = writeln!(out, "event: {event}");
    }

    let has_errors = report.fields.iter().any(|field| !field.is_valid());
    if has_errors {
        let mut tw = TabWriter::new(Vec::new());
        let _ = writeln!(tw, "FIELD\tRULE\tMESSAGE");
        for field in &report.fields {
            for error in &field.errors {
                let _ = writeln!(tw, "{}\t{}\t{}", field.field, error.rule, error.message);
            }
        }
        let _ = tw.flush();
        let rendered = match tw.into_inner() {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => return Err("failed to render table".to_string()),
        };
        out.push_str(&rendered);
    }

    let _ = writeln!(
        out,
        "form: {}",
        if report.is_valid() { "valid" } else { "invalid" }
    );
    Ok(out)
}

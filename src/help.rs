// src/help.rs

//! Usage and help text rendering.
//!
//! Pure formatting over the schema's registration-order iterators; nothing
//! here participates in matching or retrieval.

use crate::constants::{OPTION_TEXT_WIDTH, POSITIONAL_TEXT_WIDTH};
use crate::schema::{OptionKind, Schema};
use std::fmt::Write;

/// Render the one-line usage text, e.g.
/// `Usage: prog [options] <file> <dest>`.
pub fn render_usage(program: &str, schema: &Schema) -> String {
    let mut out = format!("Usage: {program}");
    if schema.has_optionals() {
        out.push_str(" [options]");
    }
    for positional in schema.positionals() {
        let _ = write!(out, " <{}>", positional.name());
    }
    out.push('\n');
    out
}

/// Render the full help text: the usage line followed by the positional and
/// option sections in registration order.
pub fn render_help(program: &str, schema: &Schema) -> String {
    let mut out = render_usage(program, schema);

    if schema.positional_count() > 0 {
        out.push_str("\nPositional arguments:\n");
        for positional in schema.positionals() {
            push_entry(
                &mut out,
                positional.name(),
                positional.help_text(),
                POSITIONAL_TEXT_WIDTH,
            );
        }
    }

    if schema.has_optionals() {
        out.push_str("\nOptions:\n");
        for optional in schema.optionals() {
            let mut label = String::new();
            if let Some(flag) = optional.flag() {
                let _ = write!(label, "-{flag}, ");
            }
            let _ = write!(label, "--{}", optional.name());
            if optional.kind() != OptionKind::Flag {
                let _ = write!(label, " {}", optional.name().to_uppercase());
            }
            push_entry(&mut out, &label, optional.help_text(), OPTION_TEXT_WIDTH);
        }
    }

    out
}

fn push_entry(out: &mut String, label: &str, help_text: &str, text_width: usize) {
    let width = text_width.saturating_sub(2);
    let _ = writeln!(out, "  {label:<width$}{help_text}");
}

// MARK: --- UNIT TESTS ---

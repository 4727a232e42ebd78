//! Clipboard export with a platform-utility fallback.
//!
//! The primary path is the `arboard` system clipboard. When that is
//! unavailable or rejects the write (headless session, missing display
//! server), the text is piped to the platform clipboard utility instead.
//! Only when both paths fail does an error surface, carrying both causes.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Copy `text` to the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let primary_err = match primary_copy(text) {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    fallback_copy(text).map_err(|fallback_err| {
        Error::Clipboard(format!("{primary_err}; fallback: {fallback_err}"))
    })
}

fn primary_copy(text: &str) -> std::result::Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|err| err.to_string())?;
    clipboard
        .set_text(text.to_string())
        .map_err(|err| err.to_string())
}

#[cfg(target_os = "macos")]
const FALLBACK_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const FALLBACK_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const FALLBACK_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

fn fallback_copy(text: &str) -> std::result::Result<(), String> {
    let mut last_err = String::from("no clipboard utility found");
    for command in FALLBACK_COMMANDS {
        match pipe_to(command, text) {
            Ok(()) => return Ok(()),
            Err(err) => last_err = err,
        }
    }
    Err(last_err)
}

fn pipe_to(command: &[&str], text: &str) -> std::result::Result<(), String> {
    let Some((program, args)) = command.split_first() else {
        return Err("empty command".to_string());
    };

    let mut child = Command::new(program)
        .args(args.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| format!("{program}: {err}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|err| format!("{program}: {err}"))?;
        // Dropping stdin closes the pipe so the utility sees EOF.
    }

    let status = child.wait().map_err(|err| format!("{program}: {err}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{program} exited with {status}"))
    }
}

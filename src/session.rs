//! Interactive-surface state machine.
//!
//! Owns the output text shown on the read-only display and gates the
//! reformat and copy actions behind a usable extraction. The extraction
//! itself never errors; everything here is about what the user may do in
//! which state.

use crate::error::{Error, Result};
use crate::options::Options;
use crate::reformat;
use crate::result::{ExtractResult, Strategy};

/// Placeholder shown before any extraction has run.
pub const PLACEHOLDER_TEXT: &str = "Your converted output will appear here...";

/// The no-candidates message with format hints for the given marker
/// configuration. Informational, not an error.
#[must_use]
pub fn no_matches_text(options: &Options) -> String {
    let label = &options.label_class;
    format!(
        "No events found. Please check your HTML structure.\n\n\
         Try using one of these formats:\n\
         \u{2022} <div class=\"{label}\">Event Name</div>\n\
         \u{2022} <span class=\"{label}\">Event Name</span>\n\
         \u{2022} <li>Event Name</li>"
    )
}

#[derive(Debug, Clone)]
enum State {
    /// Nothing extracted yet; the display shows the placeholder.
    Idle,
    /// An extraction ran. Empty events means the display shows the
    /// no-matches message and reformat/copy stay blocked.
    Extracted(ExtractResult),
    /// The single-line reformatting replaced the event list.
    Reformatted(String),
}

/// One user session: current output state plus the options extraction runs
/// with. State only changes through successful actions; rejected actions
/// leave the display untouched.
#[derive(Debug)]
pub struct Session {
    options: Options,
    state: State,
}

impl Session {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            state: State::Idle,
        }
    }

    /// Run extraction over a pasted fragment and make its outcome the
    /// current output. Blank input is rejected with [`Error::EmptyInput`]
    /// and leaves the current output untouched.
    ///
    /// Returns the number of extracted events (zero is a valid,
    /// informational outcome).
    pub fn extract(&mut self, html: &str) -> Result<usize> {
        if html.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        let result = crate::extract_with_options(html, &self.options);
        let count = result.events.len();
        self.state = State::Extracted(result);
        Ok(count)
    }

    /// Collapse the extracted event list into the single-line form.
    /// Idempotent once reformatted; blocked until a non-empty extraction
    /// exists.
    pub fn reformat(&mut self) -> Result<()> {
        let line = match &self.state {
            State::Extracted(result) if !result.events.is_empty() => {
                reformat::single_line(&result.events)
            }
            State::Reformatted(_) => return Ok(()),
            _ => return Err(Error::NothingExtracted),
        };
        self.state = State::Reformatted(line);
        Ok(())
    }

    /// The text a copy action would export. Blocked while the display
    /// shows the placeholder or the no-matches message.
    pub fn exportable_text(&self) -> Result<String> {
        match &self.state {
            State::Extracted(result) if !result.events.is_empty() => {
                Ok(result.events.join("\n"))
            }
            State::Reformatted(line) => Ok(line.clone()),
            _ => Err(Error::NothingExtracted),
        }
    }

    /// What the read-only output surface shows right now.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.state {
            State::Idle => PLACEHOLDER_TEXT.to_string(),
            State::Extracted(result) if result.events.is_empty() => {
                no_matches_text(&self.options)
            }
            State::Extracted(result) => result.events.join("\n"),
            State::Reformatted(line) => line.clone(),
        }
    }

    /// The strategy behind the current output, if an extraction ran.
    #[must_use]
    pub fn last_strategy(&self) -> Option<Strategy> {
        match &self.state {
            State::Extracted(result) => result.strategy,
            _ => None,
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

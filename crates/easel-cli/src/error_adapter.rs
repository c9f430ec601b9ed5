//! Error adapter for converting EaselError to miette diagnostics.
//!
//! Easel errors carry no source text, so each one becomes a single
//! diagnostic with a stable code and, where useful, a hint.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use easel::EaselError;

/// Adapter that lets miette render an [`EaselError`].
pub struct ErrorAdapter<'a>(pub &'a EaselError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            EaselError::Validation(_) => "easel::validation",
            EaselError::Io(_) => "easel::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            EaselError::Validation(_) => None,
            EaselError::Io(_) => Some(Box::new(
                "check that the output directory exists and is writable",
            )),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Renders `err` with miette's graphical handler.
pub fn render_report(err: &EaselError) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    if reporter.render_report(&mut writer, &ErrorAdapter(err)).is_err() {
        // Fall back to the plain message if the handler fails to format.
        writer = err.to_string();
    }
    writer
}

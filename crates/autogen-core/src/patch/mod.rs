//! Inline autogen patcher
//!
//! Host files carry regions like
//!
//! ```text
//! // -- autogen
//! // -- ## for item in configuration
//! // -- #define {{ item.key }} {{ item.id }}
//! // -- ## endfor
//! #define CONFIG_VIBRATE_DISCONNECT 1
//! // -- end autogen
//! ```
//!
//! The template lines are kept as they are; everything between the last
//! template line and the end marker is thrown away and replaced with the
//! freshly rendered output. Content outside regions is never touched, and
//! a file is only rewritten when the result differs from what is on disk.

mod marker;
mod state;

pub use marker::{classify, LineKind};
pub use state::{transition, Action, ScanState};

use crate::error::{AutogenError, Result};
use crate::fs;
use crate::template::{TemplateContext, TemplateEngine};
use std::borrow::Cow;
use std::path::Path;

/// Result of patching one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Generated content already up to date, file left alone
    Unchanged,
    /// File rewritten
    Rewritten { regions: usize },
}

/// Output of scanning a host file in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedSource {
    pub content: String,
    /// Number of regions rendered
    pub regions: usize,
}

/// Embedded template of one region, as collected from its template lines
#[derive(Debug)]
struct TemplateRegion<'a> {
    start_line: usize,
    /// Start marker ended in `\r\n`; rendered lines get the same ending
    crlf: bool,
    fragments: Vec<&'a str>,
}

impl<'a> TemplateRegion<'a> {
    fn open(start_line: usize, marker: &str) -> Self {
        Self {
            start_line,
            crlf: marker.ends_with('\r'),
            fragments: Vec::new(),
        }
    }

    fn push(&mut self, fragment: &'a str) {
        self.fragments
            .push(fragment.strip_suffix('\r').unwrap_or(fragment));
    }

    fn source(&self) -> String {
        self.fragments.join("\n")
    }
}

/// Re-renders inline regions against a shared context
pub struct InlinePatcher<'a> {
    engine: &'a TemplateEngine,
    context: &'a TemplateContext,
}

impl<'a> InlinePatcher<'a> {
    pub fn new(engine: &'a TemplateEngine, context: &'a TemplateContext) -> Self {
        Self { engine, context }
    }

    /// Patch the file at `path` in place
    ///
    /// The file is rewritten only if its content changes. On any error the
    /// file is left as it was.
    pub fn patch(&self, path: impl AsRef<Path>) -> Result<PatchOutcome> {
        let path = path.as_ref();
        let original = fs::read_to_string(path)?;
        let patched = self.patch_source(&original, path)?;

        if patched.content == original {
            log::debug!("{} is up to date", path.display());
            return Ok(PatchOutcome::Unchanged);
        }

        fs::atomic_write(path, &patched.content)?;
        log::info!(
            "rewrote {} ({} region(s))",
            path.display(),
            patched.regions
        );

        Ok(PatchOutcome::Rewritten {
            regions: patched.regions,
        })
    }

    /// Scan `source` and re-render its regions without touching the disk
    ///
    /// `origin` names the file in errors and logs.
    pub fn patch_source(&self, source: &str, origin: &Path) -> Result<PatchedSource> {
        let mut output: Vec<Cow<'_, str>> = Vec::new();
        let mut state = ScanState::Scanning;
        let mut region: Option<TemplateRegion<'_>> = None;
        let mut regions = 0;

        for (index, line) in source.split('\n').enumerate() {
            let line_number = index + 1;
            let (next, action) = transition(state, classify(line), line_number);

            match action {
                Action::Keep | Action::Close => output.push(Cow::Borrowed(line)),
                Action::KeepStray => {
                    log::warn!(
                        "{}:{}: end marker without an open autogen section",
                        origin.display(),
                        line_number
                    );
                    output.push(Cow::Borrowed(line));
                }
                Action::Open => {
                    log::debug!("{}:{}: autogen section opened", origin.display(), line_number);
                    region = Some(TemplateRegion::open(line_number, line));
                    output.push(Cow::Borrowed(line));
                }
                Action::Collect(fragment) => {
                    if let Some(region) = region.as_mut() {
                        region.push(fragment);
                    }
                    output.push(Cow::Borrowed(line));
                }
                Action::RenderAndClose | Action::RenderAndDrop => {
                    if let Some(region) = region.take() {
                        let rendered = self.render_region(&region, origin)?;
                        regions += 1;
                        if !rendered.is_empty() {
                            output.push(Cow::Owned(rendered));
                        }
                    }
                    if action == Action::RenderAndClose {
                        output.push(Cow::Borrowed(line));
                    }
                }
                Action::Discard => {}
                Action::Nested { start_line } => {
                    return Err(AutogenError::NestedRegion {
                        path: origin.to_path_buf(),
                        start_line,
                        line: line_number,
                    });
                }
            }

            state = next;
        }

        if let Some(start_line) = state.open_region() {
            return Err(AutogenError::UnterminatedRegion {
                path: origin.to_path_buf(),
                start_line,
            });
        }

        Ok(PatchedSource {
            content: output.join("\n"),
            regions,
        })
    }

    fn render_region(&self, region: &TemplateRegion<'_>, origin: &Path) -> Result<String> {
        let location = format!("{}:{}", origin.display(), region.start_line);
        let rendered = self
            .engine
            .render(&location, &region.source(), self.context)
            .map_err(|source| AutogenError::TemplateRender {
                location: location.clone(),
                source,
            })?;
        let rendered = rendered.replace("\r\n", "\n");
        let rendered = rendered.trim_end_matches('\n');

        if rendered
            .split('\n')
            .any(|line| classify(line) != LineKind::Plain)
        {
            log::warn!(
                "{}: generated output contains autogen marker or template lines; the next run will read them as part of the section",
                location
            );
        }

        log::debug!(
            "{}: rendered {} template line(s)",
            location,
            region.fragments.len()
        );

        if region.crlf && !rendered.is_empty() {
            Ok(format!("{}\r", rendered.replace('\n', "\r\n")))
        } else {
            Ok(rendered.to_string())
        }
    }
}

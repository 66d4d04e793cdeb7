use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Columns per printed line
pub const PAGE_WIDTH: usize = 80;
/// Lines per printed page
pub const PAGE_LINES: usize = 60;

const PAGE_BREAK: &str = "\u{0C}";
const FALLBACK_NAME: &str = "desempenho";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("report surface has not been rendered yet")]
    SurfaceUnavailable,

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Holds the rendered report once it exists
#[derive(Debug, Default)]
pub struct ReportSurface {
    rendered: Option<String>,
}

impl ReportSurface {
    pub fn new() -> Self {
        ReportSurface::default()
    }

    pub fn attach(&mut self, rendered: String) {
        self.rendered = Some(rendered);
    }

    pub fn detach(&mut self) {
        self.rendered = None;
    }

    pub fn content(&self) -> Option<&str> {
        self.rendered.as_deref()
    }
}

/// `relatorio-<name>.txt`, with a generic name when none is given
pub fn export_file_name(name_hint: Option<&str>) -> String {
    let name = name_hint
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_NAME);
    let safe: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("relatorio-{}.txt", safe)
}

/// Lays the text out on fixed-size pages separated by form feeds
///
/// Lines wider than a page are wrapped at the page width. Every page ends
/// with a newline.
pub fn paginate(text: &str) -> String {
    let lines: Vec<String> = text.lines().flat_map(wrap_line).collect();
    if lines.is_empty() {
        return String::new();
    }

    lines
        .chunks(PAGE_LINES)
        .map(|page| {
            let mut page = page.join("\n");
            page.push('\n');
            page
        })
        .collect::<Vec<_>>()
        .join(PAGE_BREAK)
}

fn wrap_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(PAGE_WIDTH)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Writes the attached report into `dir` and returns the file path
///
/// The document goes to a temporary file in the same directory first and is
/// renamed over the target, so a failed export never leaves a partial file.
pub fn export_report(
    surface: &ReportSurface,
    name_hint: Option<&str>,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let rendered = surface.content().ok_or(ExportError::SurfaceUnavailable)?;
    let document = paginate(rendered);
    let target = dir.join(export_file_name(name_hint));

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(document.as_bytes())?;
    file.flush()?;
    file.persist(&target).map_err(|e| ExportError::Io(e.error))?;

    info!("Exported report to {}", target.display());
    Ok(target)
}

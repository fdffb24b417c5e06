//! Output sinks for rendered documents.
//!
//! The core only produces [`SvgDocument`]s; a [`PageSink`] decides where they
//! go. Printing itself stays with the host: the HTML sink produces a file that
//! a browser can send to its print dialog at true scale.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// A self-contained SVG image with its physical page size.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    /// File stem used by sinks (e.g. `page-01`)
    pub name: String,
    /// Physical width
    pub width_mm: f64,
    /// Physical height
    pub height_mm: f64,
    /// Complete `<svg>` markup
    pub markup: String,
}

/// Formats a millimetre value with at most three decimals and no trailing zeros.
#[must_use]
pub fn format_mm(value: f64) -> String {
    let mut s = format!("{value:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Escapes text for use in XML content or attribute values.
#[must_use]
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Writes `content` to `path` via a sibling temp file and rename.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }

    let file_name = path
        .file_name()
        .context(format!("Output path has no file name: {}", path.display()))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)
        .context(format!("Failed to write temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp file to: {}",
        path.display()
    ))?;

    Ok(())
}

/// Destination for rendered documents.
pub trait PageSink {
    /// Accepts one document. Returns the path written, if the sink writes
    /// per document.
    fn write_document(&mut self, doc: &SvgDocument) -> Result<Option<PathBuf>>;

    /// Flushes buffered output and returns every path written.
    fn finish(&mut self) -> Result<Vec<PathBuf>>;
}

/// Writes each document as `<dir>/<name>.svg`.
#[derive(Debug)]
pub struct SvgDirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl SvgDirectorySink {
    /// Creates a sink rooted at `dir`; the directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }
}

impl PageSink for SvgDirectorySink {
    fn write_document(&mut self, doc: &SvgDocument) -> Result<Option<PathBuf>> {
        let path = self.dir.join(format!("{}.svg", doc.name));
        write_atomic(&path, &doc.markup)?;
        info!(path = %path.display(), "wrote page");
        self.written.push(path.clone());
        Ok(Some(path))
    }

    fn finish(&mut self) -> Result<Vec<PathBuf>> {
        Ok(std::mem::take(&mut self.written))
    }
}

/// Collects documents into one print-ready HTML file.
///
/// Every page gets its own `@page` size so the browser prints at 100% scale
/// with one drawing per sheet.
#[derive(Debug)]
pub struct HtmlPrintSink {
    path: PathBuf,
    title: String,
    pages: Vec<SvgDocument>,
}

impl HtmlPrintSink {
    /// Creates a sink that writes `path` on [`finish`](PageSink::finish).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            pages: Vec::new(),
        }
    }

    /// Builds the HTML document for the collected pages.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_xml(&self.title));
        html.push_str("<style>\n");
        html.push_str("  body { margin: 0; padding: 0; }\n");
        html.push_str("  .page { page-break-after: always; break-after: page; }\n");
        html.push_str("  .page:last-child { page-break-after: auto; break-after: auto; }\n");
        html.push_str("  .page svg { display: block; }\n");
        html.push_str("  .page-label { font: 14px sans-serif; margin: 8px; }\n");
        html.push_str("  @media print { .page-label { display: none; } }\n");

        for (idx, doc) in self.pages.iter().enumerate() {
            let _ = writeln!(
                html,
                "  @page p{idx} {{ size: {}mm {}mm; margin: 0; }}\n  #p{idx} {{ page: p{idx}; }}",
                format_mm(doc.width_mm),
                format_mm(doc.height_mm)
            );
        }

        html.push_str("</style>\n</head>\n<body>\n");
        for (idx, doc) in self.pages.iter().enumerate() {
            let number = idx + 1;
            let _ = writeln!(
                html,
                "<div class=\"page\" id=\"p{idx}\" data-page=\"{number}\" data-name=\"{}\">",
                escape_xml(&doc.name)
            );
            let _ = writeln!(html, "<h2 class=\"page-label\">Page {number}</h2>");
            html.push_str(&doc.markup);
            html.push_str("</div>\n");
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

impl PageSink for HtmlPrintSink {
    fn write_document(&mut self, doc: &SvgDocument) -> Result<Option<PathBuf>> {
        self.pages.push(doc.clone());
        Ok(None)
    }

    fn finish(&mut self) -> Result<Vec<PathBuf>> {
        write_atomic(&self.path, &self.to_html())?;
        info!(path = %self.path.display(), pages = self.pages.len(), "wrote print document");
        Ok(vec![self.path.clone()])
    }
}

/// Sends every document to `sink` and finishes it.
pub fn write_all<'a, I>(sink: &mut dyn PageSink, docs: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = &'a SvgDocument>,
{
    for doc in docs {
        sink.write_document(doc)?;
    }
    sink.finish()
}

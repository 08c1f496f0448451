//! Presentation sinks.

use retrace_format::{FormatError, OutputFormat, write_series_as};
use retrace_indicators::EnrichedSeries;
use retrace_types::RetraceError;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Timestamp layout used in output file names.
const FILE_STAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Receives one enriched series per successfully processed event.
pub trait Renderer {
    /// Presents the series for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`RetraceError::RenderFailed`] if the series cannot be presented.
    fn render(&mut self, symbol: &str, series: &EnrichedSeries) -> Result<(), RetraceError>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, symbol: &str, series: &EnrichedSeries) -> Result<(), RetraceError> {
        (**self).render(symbol, series)
    }
}

/// Writes each series to its own file under an output directory.
///
/// Files are named `<symbol>_<top>.<ext>` with the top timestamp as
/// `%Y%m%dT%H%M%S`, so two episodes of one symbol never collide. Path
/// separators, `:` and NUL in the symbol become `_`.
///
/// Each file is written to a temporary file in the output directory and
/// moved into place only once complete.
#[derive(Debug, Clone)]
pub struct FileSink {
    output_dir: PathBuf,
    format: OutputFormat,
    written: Vec<PathBuf>,
}

impl FileSink {
    /// Creates a sink writing `format` files into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
            written: Vec::new(),
        }
    }

    /// Returns the output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the files written so far, in render order.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Returns the path a series for `symbol` would be written to.
    #[must_use]
    pub fn path_for(&self, symbol: &str, series: &EnrichedSeries) -> PathBuf {
        let stamp = series.top().format(FILE_STAMP_FORMAT);
        self.output_dir.join(format!(
            "{}_{stamp}.{}",
            file_component(symbol),
            self.format.extension()
        ))
    }
}

/// Replaces characters that would split or escape a file name.
fn file_component(symbol: &str) -> String {
    symbol.replace(['/', '\\', ':', '\0'], "_")
}

/// Writes through `write` into a temporary file next to `path`, then renames
/// it onto `path`. A failed write leaves no file at `path`.
fn write_atomic<F>(dir: &Path, path: &Path, write: F) -> Result<(), RetraceError>
where
    F: FnOnce(&mut NamedTempFile) -> Result<(), FormatError>,
{
    let render_failed =
        |e: &dyn std::fmt::Display| RetraceError::RenderFailed(format!("{}: {e}", path.display()));

    std::fs::create_dir_all(dir).map_err(|e| render_failed(&e))?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| render_failed(&e))?;
    write(&mut tmp).map_err(|e| render_failed(&e))?;
    tmp.persist(path).map_err(|e| render_failed(&e.error))?;
    Ok(())
}

impl Renderer for FileSink {
    fn render(&mut self, symbol: &str, series: &EnrichedSeries) -> Result<(), RetraceError> {
        let path = self.path_for(symbol, series);
        let format = self.format;
        write_atomic(&self.output_dir, &path, |file| {
            let mut writer = BufWriter::new(file);
            write_series_as(format, series, &mut writer)?;
            writer.flush()?;
            Ok(())
        })?;

        tracing::debug!(path = %path.display(), "wrote series");
        self.written.push(path);
        Ok(())
    }
}

/// Writes every series to a single writer, e.g. stdout.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write + Send> WriterSink<W> {
    /// Creates a sink writing `format` output to `writer`.
    pub const fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Renderer for WriterSink<W> {
    fn render(&mut self, _symbol: &str, series: &EnrichedSeries) -> Result<(), RetraceError> {
        write_series_as(self.format, series, &mut self.writer)
            .map_err(|e| RetraceError::RenderFailed(e.to_string()))
    }
}

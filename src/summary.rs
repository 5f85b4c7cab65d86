//! Completion summaries for generation runs.

use humansize::{format_size, BINARY};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// What a finished generation produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationSummary {
    /// Record lines written, header excluded
    pub records: usize,
    /// Whether a header line was written
    pub header: bool,
    /// Bytes in the destination after finalization. For stream output this
    /// counts the bytes handed to the sink.
    pub bytes: u64,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_elapsed")]
    pub elapsed: Duration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
}

fn serialize_elapsed<S: serde::Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(elapsed.as_secs_f64())
}

impl GenerationSummary {
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed)
    }

    pub fn size_display(&self) -> String {
        format_size(self.bytes, BINARY)
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} records in {} ({})",
            self.records,
            self.elapsed_display(),
            self.size_display()
        )?;
        if let Some(ref path) = self.destination {
            write!(f, " to {}", path.display())?;
        }
        Ok(())
    }
}

/// `S.SSs`, or `Mm S.SSs` once the run took longer than a minute
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis > 60_000 {
        let minutes = millis / 60_000;
        let seconds = (millis % 60_000) as f64 / 1000.0;
        format!("{}m {:.2}s", minutes, seconds)
    } else {
        format!("{:.2}s", millis as f64 / 1000.0)
    }
}

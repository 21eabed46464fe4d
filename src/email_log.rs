use std::fs::OpenOptions;
use std::path::PathBuf;

/// Append-only sink for captured addresses, one CSV row per submission.
///
/// The file is opened and closed on every append and writers are not
/// serialized across requests; concurrent submissions may interleave at the
/// mercy of the platform's append semantics.
#[derive(Clone, Debug)]
pub struct EmailLog {
    path: PathBuf,
}

impl EmailLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[tracing::instrument(name = "Append email to capture log", skip(self))]
    pub fn append(&self, email: &str) -> Result<(), csv::Error> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record([email])?;
        writer.flush()?;
        Ok(())
    }
}

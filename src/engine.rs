use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::alphabet::ALPHABET_LEN;
use crate::cipher::{decrypt, encrypt, Key};
use crate::config::Settings;
use crate::cracker;
use crate::errors::{CipherError, Result};
use crate::files::{read_text, write_text};
use crate::metrics::Metrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Encrypt,
    Decrypt,
    BruteForce,
    StatisticalAnalysis,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
            Operation::BruteForce => "brute-force",
            Operation::StatisticalAnalysis => "statistical-analysis",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one completed file operation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub operation: Operation,
    pub input: PathBuf,
    pub output: PathBuf,
    pub key: Option<Key>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// False only when brute force wrote the failure marker.
    pub recovered: bool,
    pub chars_written: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.recovered, self.key) {
            (false, _) => write!(
                f,
                "{}: no key found, failure marker written to {}",
                self.operation,
                self.output.display()
            ),
            (true, Some(key)) => write!(
                f,
                "{}: key {} applied, {} characters written to {}",
                self.operation,
                key,
                self.chars_written,
                self.output.display()
            ),
            (true, None) => write!(
                f,
                "{}: {} characters written to {}",
                self.operation,
                self.chars_written,
                self.output.display()
            ),
        }
    }
}

/// File-level front end over the cipher and the key-search strategies.
///
/// Each operation reads its input whole, transforms it in memory and
/// overwrites the output file.
pub struct CipherEngine {
    failure_message: String,
    metrics: Option<Metrics>,
}

impl CipherEngine {
    pub fn new(settings: &Settings) -> Self {
        Self {
            failure_message: settings.failure_message.clone(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn encrypt_file(&self, input: &Path, output: &Path, key: i64) -> Result<Report> {
        let key = validate(input, key)?;
        let plaintext = read_text(input)?;
        let ciphertext = encrypt(&plaintext, key);
        write_text(output, &ciphertext)?;

        info!(
            operation = "encrypt",
            key = key.value(),
            input = %input.display(),
            output = %output.display(),
            "text encrypted"
        );
        self.record(Operation::Encrypt, 0);
        Ok(self.report(Operation::Encrypt, input, output, Some(key), &ciphertext))
    }

    pub fn decrypt_file(&self, input: &Path, output: &Path, key: i64) -> Result<Report> {
        let key = validate(input, key)?;
        let ciphertext = read_text(input)?;
        let plaintext = decrypt(&ciphertext, key);
        write_text(output, &plaintext)?;

        info!(
            operation = "decrypt",
            key = key.value(),
            input = %input.display(),
            output = %output.display(),
            "text decrypted"
        );
        self.record(Operation::Decrypt, 0);
        Ok(self.report(Operation::Decrypt, input, output, Some(key), &plaintext))
    }

    /// Decrypt with the first key whose output contains the sample text.
    ///
    /// Without a sample, or when no key matches, the configured failure
    /// message becomes the output file's content and the report says
    /// `recovered: false`.
    pub fn brute_force_file(
        &self,
        input: &Path,
        output: &Path,
        sample: Option<&Path>,
    ) -> Result<Report> {
        ensure_exists(input)?;
        let ciphertext = read_text(input)?;
        let sample_text = sample.map(read_text).transpose()?;

        match cracker::brute_force(&ciphertext, sample_text.as_deref()) {
            Some(found) => {
                write_text(output, &found.plaintext)?;
                info!(
                    operation = "brute-force",
                    key = found.key.value(),
                    output = %output.display(),
                    "key recovered"
                );
                self.record(Operation::BruteForce, found.key.value() + 1);
                Ok(self.report(
                    Operation::BruteForce,
                    input,
                    output,
                    Some(found.key),
                    &found.plaintext,
                ))
            }
            None => {
                write_text(output, &self.failure_message)?;
                let tried = if sample_text.as_deref().map_or(true, str::is_empty) {
                    warn!(operation = "brute-force", "no sample text supplied");
                    0
                } else {
                    warn!(operation = "brute-force", "no key produced the sample text");
                    ALPHABET_LEN
                };
                self.record(Operation::BruteForce, tried);
                let mut report = self.report(
                    Operation::BruteForce,
                    input,
                    output,
                    None,
                    &self.failure_message,
                );
                report.recovered = false;
                Ok(report)
            }
        }
    }

    /// Decrypt with the key whose output's symbol distribution is closest to
    /// the sample's.
    pub fn statistical_analysis_file(
        &self,
        input: &Path,
        output: &Path,
        sample: Option<&Path>,
    ) -> Result<Report> {
        ensure_exists(input)?;
        let sample = sample.ok_or(CipherError::MissingSample)?;
        let ciphertext = read_text(input)?;
        let sample_text = read_text(sample)?;

        let analysis = cracker::statistical_analysis(&ciphertext, &sample_text);
        write_text(output, &analysis.plaintext)?;

        info!(
            operation = "statistical-analysis",
            key = analysis.best.key.value(),
            distance = analysis.best.distance,
            output = %output.display(),
            "key recovered"
        );
        self.record(Operation::StatisticalAnalysis, ALPHABET_LEN);
        let mut report = self.report(
            Operation::StatisticalAnalysis,
            input,
            output,
            Some(analysis.best.key),
            &analysis.plaintext,
        );
        report.distance = Some(analysis.best.distance);
        Ok(report)
    }

    fn record(&self, operation: Operation, keys_tried: usize) {
        if let Some(metrics) = &self.metrics {
            metrics
                .operations
                .with_label_values(&[operation.as_str()])
                .inc();
            metrics.keys_tried.inc_by(keys_tried as u64);
        }
    }

    fn report(
        &self,
        operation: Operation,
        input: &Path,
        output: &Path,
        key: Option<Key>,
        written: &str,
    ) -> Report {
        Report {
            operation,
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            key,
            distance: None,
            recovered: true,
            chars_written: written.chars().count(),
        }
    }
}

fn ensure_exists(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(CipherError::InputNotFound(input.to_path_buf()));
    }
    Ok(())
}

fn validate(input: &Path, key: i64) -> Result<Key> {
    ensure_exists(input)?;
    Key::new(key)
}

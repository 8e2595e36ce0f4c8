use crate::{DistributedCount, WorkerFailure};
use std::fmt;
use std::time::Duration;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Console summary of a distributed count
#[derive(Debug, Clone)]
pub struct RunReport {
    pub top_words: Vec<(String, u64)>,
    pub unique_words: usize,
    pub elapsed: Duration,
    pub data_size_bytes: usize,
    pub failures: Vec<WorkerFailure>,
}

impl RunReport {
    pub fn new(count: &DistributedCount, data_size_bytes: usize, top_n: usize) -> Self {
        Self {
            top_words: count
                .table
                .most_common(top_n)
                .into_iter()
                .map(|(word, n)| (word.to_string(), n))
                .collect(),
            unique_words: count.table.len(),
            elapsed: count.elapsed,
            data_size_bytes,
            failures: count.failures.clone(),
        }
    }

    /// `None` when the run was too fast to measure
    pub fn throughput_bytes_per_sec(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            Some(self.data_size_bytes as f64 / secs)
        } else {
            None
        }
    }

    pub fn throughput_mb_per_sec(&self) -> Option<f64> {
        self.throughput_bytes_per_sec().map(|b| b / BYTES_PER_MB)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top {} words:", self.top_words.len())?;
        for (word, count) in &self.top_words {
            writeln!(f, "{}: {}", word, count)?;
        }

        writeln!(f)?;
        writeln!(f, "Total unique words: {}", self.unique_words)?;
        writeln!(f, "Elapsed time: {:.4} seconds", self.elapsed.as_secs_f64())?;

        if let Some(mb) = self.throughput_mb_per_sec() {
            writeln!(f, "Data size: {} bytes", self.data_size_bytes)?;
            writeln!(f, "Throughput: {:.4} MB/s", mb)?;
        }

        if !self.failures.is_empty() {
            writeln!(f, "Failed workers: {}", self.failures.len())?;
            for failure in &self.failures {
                writeln!(f, "  - {}: {}", failure.worker, failure.reason)?;
            }
        }
        Ok(())
    }
}

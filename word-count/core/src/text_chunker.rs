use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("cannot split text into zero chunks")]
    ZeroChunks,
}

/// What to do with the lines left over when floor division produces more
/// strides than requested chunks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkPolicy {
    /// Keep the first `n` strides and drop the trailing lines
    #[default]
    Truncate,
    /// Append the trailing lines to the last chunk
    FoldRemainder,
}

impl fmt::Display for ChunkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkPolicy::Truncate => write!(f, "truncate"),
            ChunkPolicy::FoldRemainder => write!(f, "fold_remainder"),
        }
    }
}

impl FromStr for ChunkPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(ChunkPolicy::Truncate),
            "fold_remainder" | "fold-remainder" => Ok(ChunkPolicy::FoldRemainder),
            other => Err(format!(
                "unknown chunk policy '{}' (expected 'truncate' or 'fold_remainder')",
                other
            )),
        }
    }
}

fn chunk_size(total_lines: usize, n: usize) -> usize {
    (total_lines / n).max(1)
}

/// Split `text` into exactly `n` contiguous chunks aligned on line boundaries
///
/// Lines are separated by `\n` (a trailing `\r` is stripped) and each chunk
/// re-joins its lines with `\n`. When there are fewer strides than `n` the
/// result is padded with empty chunks. When there are more, `policy` decides
/// whether the extra lines are dropped or folded into the last chunk.
pub fn split_into_chunks(
    text: &str,
    n: usize,
    policy: ChunkPolicy,
) -> Result<Vec<String>, ChunkError> {
    if n == 0 {
        return Err(ChunkError::ZeroChunks);
    }

    let lines: Vec<&str> = text.lines().collect();
    let size = chunk_size(lines.len(), n);

    let mut strides: Vec<&[&str]> = lines.chunks(size).collect();
    if strides.len() > n && policy == ChunkPolicy::FoldRemainder {
        let start = (n - 1) * size;
        strides.truncate(n - 1);
        strides.push(&lines[start..]);
    }

    let mut chunks: Vec<String> = strides
        .into_iter()
        .take(n)
        .map(|stride| stride.join("\n"))
        .collect();
    chunks.resize(n, String::new());

    Ok(chunks)
}

/// Number of lines `ChunkPolicy::Truncate` discards for this `(text, n)`
pub fn dropped_line_count(text: &str, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let total_lines = text.lines().count();
    total_lines.saturating_sub(chunk_size(total_lines, n) * n)
}

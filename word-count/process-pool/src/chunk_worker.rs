use std::io::{self, Read, Write};
use word_count_core::count_words;

/// Child process side of the pool: read one chunk, write its table as JSON
pub fn count_chunk_stream<R: Read, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut chunk = String::new();
    input.read_to_string(&mut chunk)?;

    let table = count_words(&chunk);
    serde_json::to_writer(&mut output, &table)?;
    output.flush()
}

use crate::WordCountTable;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Count the words of a single chunk
///
/// The chunk is lowercased and split into maximal runs of alphanumeric or
/// underscore characters. Every call builds its own table, so it can run on
/// any number of threads at once.
pub fn count_words(chunk: &str) -> WordCountTable {
    let mut table = WordCountTable::new();
    let lowered = chunk.to_lowercase();

    for token in lowered.split(|c: char| !is_word_char(c)) {
        if !token.is_empty() {
            table.add(token, 1);
        }
    }

    table
}

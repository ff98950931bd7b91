//! Fixture dictionary used across game-flow tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Words the fixture scenarios play, lowercase.
pub const FIXTURE_WORDS: &[&str] = &[
    "bac", "bacs", "bonjour", "chat", "con", "cons", "lame", "lames", "ma", "mot", "mots",
    "sapin", "sapins", "son", "sons", "te", "tu",
];

/// Fixture words as a newline-separated list with a comment header.
pub fn fixture_word_list() -> String {
    let mut text = String::from("# fixture dictionary\n");
    for word in FIXTURE_WORDS {
        text.push_str(word);
        text.push('\n');
    }
    text
}

/// Write the fixture list to a temporary file. The file is removed when the
/// handle drops.
pub fn fixture_dictionary_file() -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(fixture_word_list().as_bytes())?;
    file.flush()?;
    Ok(file)
}

use flagword_countries::IsoCode;

/// Shortest word that yields two tiles.
pub const MIN_WORD_LEN: usize = 4;

/// Split a word into consecutive two-letter codes, left to right.
///
/// `None` for odd lengths, words under [`MIN_WORD_LEN`], or any chunk that is
/// not two ASCII letters. Chunks are uppercased.
pub fn tile(word: &str) -> Option<Vec<IsoCode>> {
    let bytes = word.as_bytes();
    if bytes.len() < MIN_WORD_LEN || bytes.len() % 2 != 0 {
        return None;
    }
    bytes
        .chunks_exact(2)
        .map(|pair| IsoCode::from_letters(pair[0], pair[1]))
        .collect()
}

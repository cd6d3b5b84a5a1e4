use deunicode::deunicode_char;

/// Normalize `text` into lowercase ASCII letters and digits
///
/// Non-ASCII characters are transliterated first, so accented letters keep their base letter
/// (`"Crème"` becomes `"creme"`). Everything that isn't alphanumeric afterwards is dropped.
pub fn clean(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        let decoded = match deunicode_char(c) {
            Some(decoded) => decoded,
            None => continue,
        };

        cleaned.extend(
            decoded
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_lowercase()),
        );
    }
    cleaned
}

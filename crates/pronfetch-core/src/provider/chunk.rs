//! Splitting text into pieces the TTS endpoint accepts.

/// Longest text, in characters, the endpoint takes per request.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Splits `text` on whitespace into chunks of at most `max_chars` characters,
/// joining neighbouring tokens with a single space. A token longer than
/// `max_chars` is cut on character boundaries.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for token in text.split_whitespace() {
        let token_len = token.chars().count();
        if token_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = token.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }
        let needed = if current.is_empty() {
            token_len
        } else {
            current_len + 1 + token_len
        };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(token);
        current_len += token_len;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

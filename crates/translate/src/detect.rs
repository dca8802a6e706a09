use whatlang::Lang;

/// Share of ASCII letters above which text is treated as English
const ASCII_LETTER_RATIO: f64 = 0.85;

/// Whether `text` is English.
///
/// A reliable `whatlang` verdict decides. Short or ambiguous text falls back
/// to the ASCII-letter share, so a Korean headline quoting "Fed" or "CPI"
/// still reads as non-English.
pub fn is_english(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    match whatlang::detect(text) {
        Some(info) if info.is_reliable() => info.lang() == Lang::Eng,
        _ => mostly_ascii_letters(text),
    }
}

fn mostly_ascii_letters(text: &str) -> bool {
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    if letters == 0 {
        return false;
    }
    let ascii_letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count();

    ascii_letters as f64 / letters as f64 > ASCII_LETTER_RATIO
}

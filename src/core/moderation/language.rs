// Arabic-script detection.
//
// This is a membership test against a fixed list of letters, not a Unicode
// script-range check. Persian/Urdu letters, Arabic-Indic digits, harakat and
// teh marbuta are not in the list and must keep passing through untouched.

/// Letters that mark a message as Arabic: the base alphabet, hamza, and the
/// alef/waw/yeh hamza carriers plus alef madda.
pub const ARABIC_LETTERS: &str = "ابتثجحخدذرزسشصضطظعغفقكلمنهويءآأؤإئ";

/// Returns `true` if any character of `text` is one of [`ARABIC_LETTERS`].
pub fn contains_arabic_script(text: &str) -> bool {
    let has_arabic = text.chars().any(is_arabic_letter);
    tracing::debug!(text, has_arabic, "Checked text for Arabic");
    has_arabic
}

fn is_arabic_letter(c: char) -> bool {
    ARABIC_LETTERS.contains(c)
}

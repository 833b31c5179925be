/// Whether `lexeme` is legal as a binding name, binding value, or bare
/// token. Any one of the following makes it valid:
///
/// 1. it contains any decimal digit, or
/// 2. it is exactly the `---` sentinel, or
/// 3. every character is an identifier character, `.`, `:`, or `"`.
///
/// The third clause is why quoted strings pass: the tokenizer has already
/// grouped `"foo bar"` into one lexeme, and both surrounding quotes are in
/// the allowed class.
///
/// The first clause is permissive by design (and preserved here to match
/// the source format rather than tighten it): `abc1!` passes because it
/// contains a digit, even though `!` is outside the identifier class.
pub fn is_valid_value(lexeme: &str) -> bool {
    if lexeme.is_empty() {
        return false;
    }
    if lexeme.bytes().any(|b| b.is_ascii_digit()) {
        return true;
    }
    if lexeme == "---" {
        return true;
    }
    lexeme
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b == b':' || b == b'"')
}

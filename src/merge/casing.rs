//! Adapts a replacement's letter-casing to the text it replaces, so that
//! splicing "marché" over "Marcher" yields "Marché" and not a mid-sentence
//! lowercase word.

/// Carry the original substring's capitalization over to the replacement.
///
/// An all-uppercase original upper-cases the whole replacement; an original
/// starting with an uppercase letter capitalizes only the replacement's
/// first character. Anything else, or an empty input on either side, leaves
/// the replacement untouched. Works per `char`, so accented letters survive.
pub fn preserve_capitalization(original: &str, replacement: &str) -> String {
    if original.is_empty() || replacement.is_empty() {
        return replacement.to_string();
    }

    let all_upper = original.chars().any(char::is_uppercase)
        && !original.chars().any(char::is_lowercase);
    if all_upper {
        return replacement.to_uppercase();
    }

    let first_upper = original.chars().next().is_some_and(char::is_uppercase);
    if first_upper {
        let mut chars = replacement.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
    }

    replacement.to_string()
}

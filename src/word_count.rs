//! Word frequency counting backed by an `AvlMap`.

use crate::avl_tree::AvlMap;
use log::debug;

/// Lowercases a token and strips the non-alphanumeric characters surrounding it. Returns `None`
/// if nothing is left.
fn normalize(token: &str) -> Option<String> {
    let word = token.trim_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

/// Adds each whitespace-separated word of `text` to `counts`, incrementing the count of words
/// that are already present.
pub fn add_words(counts: &mut AvlMap<String, u32>, text: &str) {
    let mut num_words = 0;
    for word in text.split_whitespace().filter_map(normalize) {
        num_words += 1;
        match counts.find_mut(word.as_str()) {
            Ok(count) => *count += 1,
            Err(_) => {
                counts.insert(word, 1);
            },
        }
    }
    debug!("counted {} words, {} distinct", num_words, counts.len());
}

/// Counts the occurrences of each word in `text`.
///
/// # Examples
///
/// ```
/// use avl_collections::word_count::count_words;
///
/// let counts = count_words("to be or not to be");
/// assert_eq!(counts.find("to"), Ok(&2));
/// assert_eq!(counts.find("or"), Ok(&1));
/// ```
pub fn count_words(text: &str) -> AvlMap<String, u32> {
    let mut counts = AvlMap::new();
    add_words(&mut counts, text);
    counts
}

//! Plain Levenshtein distance, for callers that do not want transpositions
//! counted as a single edit.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein(a: &str, b: &str) -> usize {
    levenshtein_bounded(a, b, usize::MAX)
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns `max_distance + 1` as soon as the distance is known to exceed the threshold.
pub fn levenshtein_bounded(a: &str, b: &str, max_distance: usize) -> usize {
    if a == b {
        return 0;
    }

    let over = max_distance.saturating_add(1);

    let mut long: Vec<char> = a.chars().collect();
    let mut short: Vec<char> = b.chars().collect();
    if long.len() < short.len() {
        std::mem::swap(&mut long, &mut short);
    }

    // Early termination if length difference exceeds threshold
    if long.len() - short.len() > max_distance {
        return over;
    }
    if short.is_empty() {
        return long.len();
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Early termination if minimum in row exceeds threshold
        if min_in_row > max_distance {
            return over;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[short.len()];
    if distance > max_distance {
        over
    } else {
        distance
    }
}

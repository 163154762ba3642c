//! Damerau-Levenshtein distance with an optional cap for early termination.

use ahash::AHashMap;

/// Calculate the Damerau-Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions,
/// substitutions and adjacent transpositions needed to turn `a` into `b`.
/// Characters are compared per Unicode scalar value.
///
/// ```
/// use fuzzmatch::distance::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein("ab", "ba"), 1);
/// assert_eq!(damerau_levenshtein("kitten", "sitting"), 3);
/// ```
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    damerau_levenshtein_bounded(a, b, usize::MAX)
}

/// Calculate the Damerau-Levenshtein distance, giving up once it provably
/// exceeds `max_distance`.
///
/// This is the unrestricted distance (Lowrance-Wagner), where a transposed
/// pair may also have characters inserted between it. Unlike
/// [`osa_distance`] it satisfies the triangle inequality, so it is safe to
/// index with a [`MetricTree`](crate::bktree::MetricTree).
///
/// When the true distance is greater than `max_distance` the result is exactly
/// `max_distance + 1`; otherwise it is the true distance. Columns are sized to
/// the shorter string and only the last `max_distance + 2` rows are kept, so
/// a small cap keeps memory linear in the shorter input.
///
/// ```
/// use fuzzmatch::distance::{damerau_levenshtein_bounded, osa_distance};
///
/// assert_eq!(damerau_levenshtein_bounded("ca", "abc", 5), 2);
/// assert_eq!(osa_distance("ca", "abc"), 3);
/// assert_eq!(damerau_levenshtein_bounded("ca", "abc", 1), 2);
/// ```
pub fn damerau_levenshtein_bounded(a: &str, b: &str, max_distance: usize) -> usize {
    if a == b {
        return 0;
    }

    let over = max_distance.saturating_add(1);

    let mut long: Vec<char> = a.chars().collect();
    let mut short: Vec<char> = b.chars().collect();
    if long.len() < short.len() {
        std::mem::swap(&mut long, &mut short);
    }

    // The length difference is a lower bound on the distance.
    if long.len() - short.len() > max_distance {
        return over;
    }
    if short.is_empty() {
        return long.len();
    }

    let width = short.len() + 1;
    // A transposition spanning more than `max_distance` rows already costs
    // more than the cap, so older rows are never read.
    let window = max_distance.min(long.len()).saturating_add(2);
    let mut rows = vec![vec![0usize; width]; window];
    for (j, cell) in rows[0].iter_mut().enumerate() {
        *cell = j;
    }

    // Last row in which each character of `long` was seen.
    let mut last_row: AHashMap<char, usize> = AHashMap::new();

    for i in 1..=long.len() {
        let mut last_col = 0;
        let mut row_min = i;
        let mut curr = std::mem::take(&mut rows[i % window]);
        curr[0] = i;

        for j in 1..width {
            let prev = &rows[(i - 1) % window];
            let cost = usize::from(long[i - 1] != short[j - 1]);

            let mut value = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution

            let k = last_row.get(&short[j - 1]).copied().unwrap_or(0);
            let l = last_col;
            if k > 0 && l > 0 && i - k <= max_distance {
                let before = rows[(k - 1) % window][l - 1];
                value = value.min(before + (i - k - 1) + 1 + (j - l - 1)); // transposition
            }
            if cost == 0 {
                last_col = j;
            }

            curr[j] = value;
            row_min = row_min.min(value);
        }

        rows[i % window] = curr;
        last_row.insert(long[i - 1], i);

        // Row minima never decrease, so nothing below the cap can follow.
        if row_min > max_distance {
            return over;
        }
    }

    let distance = rows[long.len() % window][width - 1];
    if distance > max_distance {
        over
    } else {
        distance
    }
}

/// Optimal string alignment distance: Damerau-Levenshtein where no substring
/// is edited more than once.
///
/// This is not a metric: `osa_distance("ca", "abc")` is 3 although
/// "ca" -> "ac" -> "abc" takes two edits. Do not use it as the metric of a
/// [`MetricTree`](crate::bktree::MetricTree), whose pruning would then miss
/// matches.
pub fn osa_distance(a: &str, b: &str) -> usize {
    osa_distance_bounded(a, b, usize::MAX)
}

/// Capped variant of [`osa_distance`] using three rows sized to the shorter
/// string. Results above the cap are exactly `max_distance + 1`.
pub fn osa_distance_bounded(a: &str, b: &str, max_distance: usize) -> usize {
    if a == b {
        return 0;
    }

    let over = max_distance.saturating_add(1);

    let mut long: Vec<char> = a.chars().collect();
    let mut short: Vec<char> = b.chars().collect();
    if long.len() < short.len() {
        std::mem::swap(&mut long, &mut short);
    }

    if long.len() - short.len() > max_distance {
        return over;
    }
    if short.is_empty() {
        return long.len();
    }

    let width = short.len() + 1;
    let mut two_back = vec![0usize; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr = vec![0usize; width];

    for i in 1..=long.len() {
        curr[0] = i;
        let mut row_min = i;

        for j in 1..width {
            let cost = usize::from(long[i - 1] != short[j - 1]);

            let mut value = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);

            if i > 1 && j > 1 && long[i - 1] == short[j - 2] && long[i - 2] == short[j - 1] {
                value = value.min(two_back[j - 2] + 1);
            }

            curr[j] = value;
            row_min = row_min.min(value);
        }

        if row_min > max_distance {
            return over;
        }

        std::mem::swap(&mut two_back, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[width - 1];
    if distance > max_distance {
        over
    } else {
        distance
    }
}

/// Calculate a normalized similarity between 0.0 and 1.0 from the
/// Damerau-Levenshtein distance. 1.0 means identical strings.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());

    if max_len == 0 {
        return 1.0;
    }

    let distance = damerau_levenshtein(a, b);
    1.0 - (distance as f64 / max_len as f64)
}

//! Ordering of scored sentences.
//!
//! Ties on score go to the candidate closest to the original phrase in
//! character edits, then to the lexically smaller sentence, so the winner
//! never depends on enumeration order.

use std::cmp::Ordering;

use crate::enumerate::CandidateSentence;

/// Levenshtein distance between `a` and `b`, or `max_dist + 1` once it is
/// known to exceed `max_dist`.
pub fn bounded_levenshtein(a: &str, b: &str, max_dist: usize) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if longer.len() - shorter.len() > max_dist {
        return max_dist + 1;
    }

    let n = longer.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, &sc) in shorter.iter().enumerate() {
        let row = i + 1;
        curr[0] = row;

        let col_min = row.saturating_sub(max_dist).max(1);
        let col_max = (row + max_dist).min(n);

        for j in 1..=n {
            if j < col_min || j > col_max {
                curr[j] = max_dist + 1;
                continue;
            }
            let cost = usize::from(sc != longer[j - 1]);
            let ins = curr[j - 1] + 1;
            let del = prev[j] + 1;
            let sub = prev[j - 1] + cost;
            curr[j] = ins.min(del).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n].min(max_dist + 1)
}

/// Total character edits between a candidate and the original, position by
/// position.
pub fn sentence_distance(candidate: &[String], original: &[String]) -> usize {
    candidate
        .iter()
        .zip(original)
        .filter(|(a, b)| a != b)
        .map(|(a, b)| {
            let bound = a.chars().count().max(b.chars().count());
            bounded_levenshtein(a, b, bound)
        })
        .sum()
}

/// Sort `sentences` best first.
pub fn rank(sentences: Vec<CandidateSentence>, original: &[String]) -> Vec<CandidateSentence> {
    let mut keyed: Vec<(usize, String, CandidateSentence)> = sentences
        .into_iter()
        .map(|s| (sentence_distance(&s.words, original), s.text(), s))
        .collect();

    keyed.sort_by(compare);
    keyed.into_iter().map(|(_, _, s)| s).collect()
}

fn compare(
    a: &(usize, String, CandidateSentence),
    b: &(usize, String, CandidateSentence),
) -> Ordering {
    b.2.score
        .total_cmp(&a.2.score)
        .then_with(|| a.0.cmp(&b.0))
        .then_with(|| a.1.cmp(&b.1))
}

/// The best sentence, if any.
pub fn best(sentences: Vec<CandidateSentence>, original: &[String]) -> Option<CandidateSentence> {
    rank(sentences, original).into_iter().next()
}

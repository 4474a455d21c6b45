//! Participation-level recoding.

/// Free-text participation answers and their short labels, checked in
/// order; the first matching phrase wins.
const PARTICIPATION_RECODES: &[(&str, &str)] = &[
    ("I want to lead a class", "Can lead"),
    ("want to share responsibility", "Can lead with support"),
    ("I want to help support", "Can help"),
    ("I am not available for any", "Not available in fall"),
    ("I have an extenuating circumstance", "Not available in fall"),
];

/// Recode a free-text participation answer to its short label.
///
/// Matching is case-sensitive substring containment with no normalization;
/// an answer matching none of the phrases passes through verbatim.
pub fn recode_participation(answer: &str) -> &str {
    for &(phrase, label) in PARTICIPATION_RECODES {
        if answer.contains(phrase) {
            return label;
        }
    }
    answer
}

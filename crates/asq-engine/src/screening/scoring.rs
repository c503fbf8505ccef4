//! Answer scoring: converts submitted answers into per-domain totals.

use super::domain::AnswerRecord;

/// Maximum score a single question can contribute (a YES answer).
pub const MAX_POINTS_PER_QUESTION: u32 = 10;

/// Score contributed by one answer: the explicit override when the form
/// collaborator supplied one, otherwise the fixed answer map.
pub fn answer_points(record: &AnswerRecord) -> u32 {
    record.score.unwrap_or_else(|| record.answer.points())
}

/// Total score for one domain. Order-independent; an empty answer set scores
/// zero rather than failing.
pub fn domain_score<'a, I>(answers: I) -> u32
where
    I: IntoIterator<Item = &'a AnswerRecord>,
{
    answers.into_iter().map(answer_points).sum()
}

/// Highest total a domain with `question_count` questions can reach.
/// Descriptive only; threshold decisions never consult it. Saturates rather
/// than wrapping for counts beyond any real questionnaire.
pub fn max_score(question_count: usize) -> u32 {
    u32::try_from(question_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(MAX_POINTS_PER_QUESTION)
}

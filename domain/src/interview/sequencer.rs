//! Question sequencing
//!
//! Pure decision logic for "what question comes next". Given the ordered
//! base questions of a business and the chronological exchange history of
//! one interview, [`plan_next`] either names the next base question, asks
//! for a follow-up to be generated, or declares the interview complete.
//!
//! The walk is driven entirely by the most recent answers: a base answer
//! triggers the first follow-up, a follow-up run shorter than
//! [`FOLLOW_UPS_PER_BASE`](crate::interview::entities::FOLLOW_UPS_PER_BASE)
//! triggers the next one, and a full run advances to the next base
//! question. No I/O happens here; producing the actual follow-up question
//! text is the caller's concern.

use crate::core::error::DomainError;
use crate::interview::entities::{Exchange, FOLLOW_UPS_PER_BASE, Question};

/// Outcome of one sequencing decision.
#[derive(Debug, Clone)]
pub enum NextStep {
    /// Ask this already-authored base question next.
    AskBase(Question),
    /// Generate follow-up number `ordinal` (1-based) to `parent`.
    FollowUp { ordinal: u8, parent: Question },
    /// Every base question and its follow-ups have been answered.
    Complete,
}

/// Decide the next step for an interview.
///
/// `base_questions` must be the business's base questions sorted by order
/// index ([`sort_base_questions`] does this defensively); `history` is the
/// interview's exchanges in creation order.
pub fn plan_next(base_questions: &[Question], history: &[Exchange]) -> Result<NextStep, DomainError> {
    let Some(first_base) = base_questions.first() else {
        // A business with no scripted questions has nothing to ask.
        return Ok(NextStep::Complete);
    };

    let Some(last) = history.last() else {
        return Ok(NextStep::AskBase(first_base.clone()));
    };

    if !last.question.is_follow_up {
        return Ok(NextStep::FollowUp {
            ordinal: 1,
            parent: last.question.clone(),
        });
    }

    let trailing = trailing_follow_ups(history);
    if trailing < FOLLOW_UPS_PER_BASE {
        let parent = current_base(history)?;
        return Ok(NextStep::FollowUp {
            ordinal: trailing as u8 + 1,
            parent,
        });
    }

    // Both follow-up slots are used up; move to the base question after the
    // one this topic belongs to.
    let parent = current_base(history)?;
    let position = base_questions
        .iter()
        .position(|q| q.id == parent.id)
        .ok_or_else(|| {
            DomainError::InconsistentState(format!(
                "answered base question {} is not among the business's base questions",
                parent.id
            ))
        })?;

    match base_questions.get(position + 1) {
        Some(next_base) => Ok(NextStep::AskBase(next_base.clone())),
        None => Ok(NextStep::Complete),
    }
}

/// Order index for follow-up `ordinal` of `parent`, guarding the slot
/// invariant: the index must fall strictly between the parent's index and
/// the next base question's index.
pub fn follow_up_slot(
    base_questions: &[Question],
    parent: &Question,
    ordinal: u8,
) -> Result<i32, DomainError> {
    let parent_index = parent.order_index.ok_or_else(|| {
        DomainError::InconsistentState(format!(
            "base question {} has no order index",
            parent.id
        ))
    })?;

    let slot = parent_index + i32::from(ordinal);

    // Base questions authored on an irregular stride could make the slot
    // land on or past the next base question. Refuse rather than collide.
    let next_base_index = base_questions
        .iter()
        .filter_map(|q| q.order_index)
        .filter(|&idx| idx > parent_index)
        .min();
    if let Some(next_index) = next_base_index
        && slot >= next_index
    {
        return Err(DomainError::InconsistentState(format!(
            "follow-up slot {slot} collides with the base question at index {next_index}"
        )));
    }

    Ok(slot)
}

/// Sort base questions by order index, indexless ones last.
///
/// Base questions should always carry an index; the null handling is
/// defensive against partially seeded data.
pub fn sort_base_questions(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by_key(|q| q.order_index.unwrap_or(i32::MAX));
    questions
}

/// Number of consecutive follow-up answers at the end of the history.
fn trailing_follow_ups(history: &[Exchange]) -> usize {
    history
        .iter()
        .rev()
        .take_while(|e| e.question.is_follow_up)
        .count()
}

/// The base question the current topic belongs to: the most recent
/// non-follow-up answer in the history.
fn current_base(history: &[Exchange]) -> Result<Question, DomainError> {
    history
        .iter()
        .rev()
        .find(|e| !e.question.is_follow_up)
        .map(|e| e.question.clone())
        .ok_or_else(|| {
            DomainError::InconsistentState(
                "follow-up responses exist with no preceding base answer".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::{BusinessId, EmployeeId, InterviewId};
    use crate::interview::entities::QuestionResponse;

    struct Fixture {
        business: BusinessId,
        employee: EmployeeId,
        interview: InterviewId,
        base: Vec<Question>,
    }

    impl Fixture {
        fn with_base_questions(n: usize) -> Self {
            let business = BusinessId::generate();
            let base = (0..n)
                .map(|i| Question::base(business, format!("Base {i}"), i as i32 * 3))
                .collect();
            Self {
                business,
                employee: EmployeeId::generate(),
                interview: InterviewId::generate(),
                base,
            }
        }

        fn answer(&self, question: &Question) -> Exchange {
            Exchange::new(
                question.clone(),
                QuestionResponse::new(self.interview, self.employee, question.id, "answer"),
            )
        }

        fn follow_up(&self, slot: i32) -> Question {
            Question::follow_up(self.business, self.interview, format!("Follow-up {slot}"), slot)
        }
    }

    #[test]
    fn empty_history_starts_with_first_base_question() {
        let fx = Fixture::with_base_questions(3);
        match plan_next(&fx.base, &[]).unwrap() {
            NextStep::AskBase(q) => assert_eq!(q.id, fx.base[0].id),
            other => panic!("expected first base question, got {other:?}"),
        }
    }

    #[test]
    fn no_base_questions_is_immediately_complete() {
        let fx = Fixture::with_base_questions(0);
        assert!(matches!(plan_next(&fx.base, &[]).unwrap(), NextStep::Complete));
    }

    #[test]
    fn base_answer_triggers_first_follow_up() {
        let fx = Fixture::with_base_questions(3);
        let history = vec![fx.answer(&fx.base[0])];
        match plan_next(&fx.base, &history).unwrap() {
            NextStep::FollowUp { ordinal, parent } => {
                assert_eq!(ordinal, 1);
                assert_eq!(parent.id, fx.base[0].id);
            }
            other => panic!("expected follow-up 1, got {other:?}"),
        }
    }

    #[test]
    fn one_follow_up_answer_triggers_second() {
        let fx = Fixture::with_base_questions(3);
        let history = vec![fx.answer(&fx.base[0]), fx.answer(&fx.follow_up(1))];
        match plan_next(&fx.base, &history).unwrap() {
            NextStep::FollowUp { ordinal, parent } => {
                assert_eq!(ordinal, 2);
                assert_eq!(parent.id, fx.base[0].id);
            }
            other => panic!("expected follow-up 2, got {other:?}"),
        }
    }

    #[test]
    fn two_follow_ups_advance_to_next_base_question() {
        let fx = Fixture::with_base_questions(3);
        let history = vec![
            fx.answer(&fx.base[0]),
            fx.answer(&fx.follow_up(1)),
            fx.answer(&fx.follow_up(2)),
        ];
        match plan_next(&fx.base, &history).unwrap() {
            NextStep::AskBase(q) => assert_eq!(q.id, fx.base[1].id),
            other => panic!("expected second base question, got {other:?}"),
        }
    }

    #[test]
    fn exhausting_the_last_topic_completes_the_interview() {
        let fx = Fixture::with_base_questions(1);
        let history = vec![
            fx.answer(&fx.base[0]),
            fx.answer(&fx.follow_up(1)),
            fx.answer(&fx.follow_up(2)),
        ];
        assert!(matches!(
            plan_next(&fx.base, &history).unwrap(),
            NextStep::Complete
        ));
    }

    #[test]
    fn full_walk_terminates_after_exactly_three_n_answers() {
        // Drive the sequencer by hand through N topics and count the steps.
        let fx = Fixture::with_base_questions(4);
        let mut history = Vec::new();
        let mut asked = 0;
        loop {
            match plan_next(&fx.base, &history).unwrap() {
                NextStep::AskBase(q) => {
                    history.push(fx.answer(&q));
                    asked += 1;
                }
                NextStep::FollowUp { ordinal, parent } => {
                    let slot = follow_up_slot(&fx.base, &parent, ordinal).unwrap();
                    history.push(fx.answer(&fx.follow_up(slot)));
                    asked += 1;
                }
                NextStep::Complete => break,
            }
            assert!(asked <= 12, "sequencer failed to terminate");
        }
        assert_eq!(asked, 12);

        // The answered pattern is (base, follow-up, follow-up) per topic.
        let flags: Vec<bool> = history.iter().map(|e| e.question.is_follow_up).collect();
        for chunk in flags.chunks(3) {
            assert_eq!(chunk, &[false, true, true]);
        }
    }

    #[test]
    fn orphan_follow_up_is_inconsistent() {
        let fx = Fixture::with_base_questions(2);
        let history = vec![fx.answer(&fx.follow_up(1))];
        assert!(matches!(
            plan_next(&fx.base, &history),
            Err(DomainError::InconsistentState(_))
        ));
    }

    #[test]
    fn unknown_base_question_is_inconsistent() {
        let fx = Fixture::with_base_questions(2);
        let foreign = Question::base(fx.business, "Not in the list", 99);
        let history = vec![
            fx.answer(&foreign),
            fx.answer(&fx.follow_up(100)),
            fx.answer(&fx.follow_up(101)),
        ];
        assert!(matches!(
            plan_next(&fx.base, &history),
            Err(DomainError::InconsistentState(_))
        ));
    }

    #[test]
    fn slot_falls_between_parent_and_next_base() {
        let fx = Fixture::with_base_questions(2);
        assert_eq!(follow_up_slot(&fx.base, &fx.base[0], 1).unwrap(), 1);
        assert_eq!(follow_up_slot(&fx.base, &fx.base[0], 2).unwrap(), 2);
        // Last base question has no upper bound.
        assert_eq!(follow_up_slot(&fx.base, &fx.base[1], 2).unwrap(), 5);
    }

    #[test]
    fn slot_collision_with_next_base_is_refused() {
        let business = BusinessId::generate();
        // Irregular stride: indices 0 and 1 leave no room for follow-ups.
        let base = vec![
            Question::base(business, "First", 0),
            Question::base(business, "Second", 1),
        ];
        assert!(matches!(
            follow_up_slot(&base, &base[0], 1),
            Err(DomainError::InconsistentState(_))
        ));
    }

    #[test]
    fn sort_puts_indexless_questions_last() {
        let business = BusinessId::generate();
        let mut unindexed = Question::base(business, "Unindexed", 0);
        unindexed.order_index = None;
        let sorted = sort_base_questions(vec![
            unindexed,
            Question::base(business, "Second", 3),
            Question::base(business, "First", 0),
        ]);
        assert_eq!(sorted[0].content, "First");
        assert_eq!(sorted[1].content, "Second");
        assert_eq!(sorted[2].content, "Unindexed");
    }
}

//! Conversation transcripts built from exchange history.
//!
//! The same history is rendered from two perspectives depending on who the
//! model is playing. When it plays the interviewer, questions are its own
//! (assistant) turns and answers are user turns; when it plays the
//! employee, the roles invert.

use crate::generation::message::Message;
use crate::interview::entities::{Exchange, Question};
use crate::prompt::template::InterviewPrompt;

/// History as seen by the interviewer model: it asked the questions.
pub fn interviewer_view(history: &[Exchange]) -> Vec<Message> {
    let mut transcript = Vec::with_capacity(history.len() * 2);
    for exchange in history {
        transcript.push(Message::assistant(&exchange.question.content));
        transcript.push(Message::user(&exchange.response.content));
    }
    transcript
}

/// History as seen by the employee model: it gave the answers.
pub fn respondent_view(history: &[Exchange]) -> Vec<Message> {
    let mut transcript = Vec::with_capacity(history.len() * 2);
    for exchange in history {
        transcript.push(Message::user(&exchange.question.content));
        transcript.push(Message::assistant(&exchange.response.content));
    }
    transcript
}

/// Interviewer transcript plus the final instruction turn requesting one
/// follow-up question, tagged with its ordinal.
pub fn follow_up_request(history: &[Exchange], ordinal: u8) -> Vec<Message> {
    let mut transcript = interviewer_view(history);
    transcript.push(Message::user(InterviewPrompt::follow_up_instruction(ordinal)));
    transcript
}

/// Respondent transcript plus the question awaiting an answer.
pub fn answer_request(history: &[Exchange], question: &Question) -> Vec<Message> {
    let mut transcript = respondent_view(history);
    transcript.push(Message::user(&question.content));
    transcript
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::{BusinessId, EmployeeId, InterviewId};
    use crate::generation::message::Role;
    use crate::interview::entities::QuestionResponse;

    fn history() -> Vec<Exchange> {
        let business = BusinessId::generate();
        let employee = EmployeeId::generate();
        let interview = InterviewId::generate();
        let q1 = Question::base(business, "What is your role?", 0);
        let q2 = Question::follow_up(business, interview, "Since when?", 1);
        vec![
            Exchange::new(
                q1.clone(),
                QuestionResponse::new(interview, employee, q1.id, "I run the data team."),
            ),
            Exchange::new(
                q2.clone(),
                QuestionResponse::new(interview, employee, q2.id, "For two years."),
            ),
        ]
    }

    #[test]
    fn interviewer_view_puts_questions_on_assistant_turns() {
        let transcript = interviewer_view(&history());
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0].role, Role::Assistant);
        assert_eq!(transcript[0].content, "What is your role?");
        assert_eq!(transcript[1].role, Role::User);
        assert_eq!(transcript[1].content, "I run the data team.");
    }

    #[test]
    fn respondent_view_inverts_the_roles() {
        let transcript = respondent_view(&history());
        assert_eq!(transcript[0].role, Role::User);
        assert_eq!(transcript[1].role, Role::Assistant);
        assert_eq!(transcript[1].content, "I run the data team.");
    }

    #[test]
    fn follow_up_request_ends_with_the_instruction_turn() {
        let transcript = follow_up_request(&history(), 2);
        let last = transcript.last().unwrap();
        assert_eq!(last.role, Role::User);
        assert!(last.content.contains('2'));
    }

    #[test]
    fn answer_request_ends_with_the_pending_question() {
        let business = BusinessId::generate();
        let question = Question::base(business, "What are your goals?", 3);
        let transcript = answer_request(&history(), &question);
        assert_eq!(transcript.last().unwrap().content, "What are your goals?");
        assert_eq!(transcript.last().unwrap().role, Role::User);
    }
}

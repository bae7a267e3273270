//! Prompt templates for interview generation calls.

use crate::interview::entities::Employee;

/// Templates for the two personas the gateway is asked to play.
pub struct InterviewPrompt;

impl InterviewPrompt {
    /// System prompt for generating follow-up questions.
    pub fn interviewer_system() -> &'static str {
        r#"You are an AI interviewer conducting an employee interview.

Based on the conversation history, generate a thoughtful follow-up question that:
1. Builds on the previous answers
2. Digs deeper into the topic
3. Helps understand the employee better
4. Is professional and engaging

Respond with ONLY the question text, no additional formatting or explanation."#
    }

    /// Final instruction turn requesting one follow-up question.
    ///
    /// The ordinal (1 or 2) is context for the model only; it does not
    /// change what is being asked for.
    pub fn follow_up_instruction(ordinal: u8) -> String {
        format!(
            "Please generate follow-up question #{ordinal} for the current topic. \
             Respond with only the question text."
        )
    }

    /// System prompt for simulating an employee's answers.
    pub fn respondent_system(employee: &Employee) -> String {
        let mut prompt = format!(
            "You are {email}, an employee being interviewed about your work. \
             Answer each question in first person, in two to four sentences, \
             staying consistent with your background and your earlier answers.",
            email = employee.email
        );
        if let Some(bio) = employee.bio.as_deref().filter(|b| !b.trim().is_empty()) {
            prompt.push_str("\n\nYour background: ");
            prompt.push_str(bio);
        }
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::BusinessId;

    #[test]
    fn interviewer_system_demands_bare_question_text() {
        assert!(InterviewPrompt::interviewer_system().contains("ONLY the question text"));
    }

    #[test]
    fn follow_up_instruction_carries_the_ordinal() {
        assert!(InterviewPrompt::follow_up_instruction(1).contains("#1"));
        assert!(InterviewPrompt::follow_up_instruction(2).contains("#2"));
    }

    #[test]
    fn respondent_system_includes_bio_when_present() {
        let business = BusinessId::generate();
        let employee = Employee::new(
            business,
            "maria@acme.test",
            Some("Ten years in platform engineering.".to_string()),
        );
        let prompt = InterviewPrompt::respondent_system(&employee);
        assert!(prompt.contains("maria@acme.test"));
        assert!(prompt.contains("platform engineering"));
    }

    #[test]
    fn respondent_system_omits_blank_bio() {
        let business = BusinessId::generate();
        let employee = Employee::new(business, "sam@acme.test", Some("   ".to_string()));
        let prompt = InterviewPrompt::respondent_system(&employee);
        assert!(!prompt.contains("Your background"));
    }
}

//! Live interview loop.
//!
//! The human-answered path: print the next question, read an answer from
//! stdin, submit it, repeat until the sequencer declares completion.
//! Follow-up questions are still generated by the gateway between turns.

use anyhow::Result;
use colored::Colorize;
use insight_application::{
    AnswerQuestionUseCase, EngineParams, NextQuestion, NextQuestionUseCase, StartInterviewUseCase,
    TextGenerator,
};
use insight_domain::Employee;
use insight_infrastructure::MemoryStore;
use std::io::{BufRead, Write};
use std::sync::Arc;

pub async fn run<G: TextGenerator>(
    store: MemoryStore,
    gateway: Arc<G>,
    params: EngineParams,
    employee: &Employee,
) -> Result<()> {
    let interview = StartInterviewUseCase::new(store.clone())
        .execute(employee.id)
        .await?;

    println!(
        "\n{} {} ({})\n",
        "Interview started for".bold(),
        employee.email.bold(),
        interview.id
    );

    let next_question = NextQuestionUseCase::new(store.clone(), gateway, &params);
    let answer_question = AnswerQuestionUseCase::new(store);

    let stdin = std::io::stdin();
    loop {
        let question = match next_question.execute(interview.id).await? {
            NextQuestion::Complete => break,
            NextQuestion::Ask(question) => question,
        };

        let marker = if question.is_follow_up { "↳" } else { "Q" };
        println!("{} {}", marker.blue().bold(), question.content);

        let answer = loop {
            print!("{} ", ">".green());
            std::io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                anyhow::bail!("stdin closed before the interview completed");
            }
            let line = line.trim();
            if !line.is_empty() {
                break line.to_string();
            }
        };

        answer_question
            .execute(interview.id, question.id, answer)
            .await?;
        println!();
    }

    println!("{}", "Interview complete. Thank you!".green().bold());
    Ok(())
}

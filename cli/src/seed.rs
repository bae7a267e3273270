//! Seed-file loading.
//!
//! A seed file describes one business with its employees and scripted
//! questions. Base questions get order indices on the standard stride in
//! file order, leaving the follow-up slots open between them.

use anyhow::{Context, Result};
use insight_application::InterviewStore;
use insight_domain::{BASE_QUESTION_STRIDE, Business, Employee, Question};
use insight_infrastructure::MemoryStore;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub business: BusinessSeed,
    #[serde(default)]
    pub employees: Vec<EmployeeSeed>,
    #[serde(default)]
    pub questions: Vec<QuestionSeed>,
}

#[derive(Debug, Deserialize)]
pub struct BusinessSeed {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeSeed {
    pub email: String,
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionSeed {
    pub content: String,
}

/// Parse a seed file and load it into a fresh in-memory store.
pub async fn load(path: &Path) -> Result<(MemoryStore, Business)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let seed: SeedFile = toml::from_str(&text)
        .with_context(|| format!("parsing seed file {}", path.display()))?;

    let store = MemoryStore::new();
    let business = Business::new(&seed.business.name);
    store.create_business(business.clone()).await?;

    for employee in &seed.employees {
        store
            .create_employee(Employee::new(
                business.id,
                &employee.email,
                employee.bio.clone(),
            ))
            .await?;
    }

    for (i, question) in seed.questions.iter().enumerate() {
        store
            .create_question(Question::base(
                business.id,
                &question.content,
                i as i32 * BASE_QUESTION_STRIDE,
            ))
            .await?;
    }

    Ok((store, business))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [business]
        name = "Acme Rockets"

        [[employees]]
        email = "wile@acme.test"
        bio = "Head of product testing."

        [[employees]]
        email = "road@acme.test"

        [[questions]]
        content = "Describe your current role."

        [[questions]]
        content = "What has challenged you this quarter?"
    "#;

    #[test]
    fn sample_seed_parses() {
        let seed: SeedFile = toml::from_str(SAMPLE).unwrap();
        assert_eq!(seed.business.name, "Acme Rockets");
        assert_eq!(seed.employees.len(), 2);
        assert!(seed.employees[1].bio.is_none());
        assert_eq!(seed.questions.len(), 2);
    }

    #[tokio::test]
    async fn loaded_questions_sit_on_the_stride() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let (store, business) = load(&path).await.unwrap();
        let base = store.list_base_questions(business.id).await.unwrap();
        assert_eq!(base.len(), 2);
        assert_eq!(base[0].order_index, Some(0));
        assert_eq!(base[1].order_index, Some(BASE_QUESTION_STRIDE));

        let employees = store.list_employees(business.id).await.unwrap();
        assert_eq!(employees.len(), 2);
    }
}

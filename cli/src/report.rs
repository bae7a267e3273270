//! Console reporting for simulation results.

use colored::Colorize;
use insight_application::{
    BusinessSimulation, EmployeeSimulation, InterviewRun, SimulationProgress,
};
use insight_domain::Employee;

/// Progress reporter printing one line per interview event.
pub struct ConsoleProgress;

impl SimulationProgress for ConsoleProgress {
    fn on_interview_started(&self, employee: &Employee) {
        println!("{} {}", "▶".blue(), employee.email);
    }

    fn on_interview_finished(&self, employee: &Employee, completed: bool) {
        if completed {
            println!("{} {}", "✔".green(), employee.email);
        } else {
            println!("{} {} (stopped at safety cap)", "◼".yellow(), employee.email);
        }
    }

    fn on_interview_failed(&self, employee: &Employee, error: &str) {
        println!("{} {}: {}", "✘".red(), employee.email, error);
    }
}

/// Render a business-wide simulation as a readable report.
pub fn business_text(simulation: &BusinessSimulation) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{} {}\n",
        "Simulation report for".bold(),
        simulation.business_name.bold()
    ));
    out.push_str(&format!(
        "{} succeeded, {} failed\n",
        simulation.successes().count(),
        simulation.failures().count()
    ));

    for outcome in &simulation.outcomes {
        out.push('\n');
        if let Some(run) = &outcome.run {
            out.push_str(&format!("{}\n", outcome.employee_email.green().bold()));
            out.push_str(&run_text(run));
        } else {
            out.push_str(&format!(
                "{} — {}\n",
                outcome.employee_email.red().bold(),
                outcome.error.as_deref().unwrap_or("unknown error")
            ));
        }
    }
    out
}

/// Render a single employee's simulation.
pub fn employee_text(simulation: &EmployeeSimulation) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n",
        simulation.employee_email.green().bold()
    ));
    out.push_str(&run_text(&simulation.run));
    out
}

fn run_text(run: &InterviewRun) -> String {
    let mut out = String::new();
    for exchange in &run.exchanges {
        let marker = if exchange.is_follow_up {
            "  ↳".cyan()
        } else {
            "  Q".blue()
        };
        out.push_str(&format!("{} {}\n", marker, exchange.question_content));
        out.push_str(&format!("    {}\n", exchange.answer.dimmed()));
    }
    if !run.completed {
        out.push_str(&format!(
            "  {}\n",
            "stopped at the safety cap before completing".yellow()
        ));
    }
    out
}

/// Render any serializable result as pretty JSON.
pub fn json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

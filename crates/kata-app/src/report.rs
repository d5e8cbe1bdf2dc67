//! Drill execution and reporting
//!
//! Runs the fixed drill sequence (calculator, message, loan - in that
//! order) and renders the grouped result report.

use chrono::{DateTime, Utc};
use kata_domain::service::{calculator, loan, AgeBand};
use serde::{Deserialize, Serialize};

/// One calculator drill call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationEntry {
    pub operation: String,
    pub lhs: f64,
    pub rhs: f64,
    pub result: f64,
}

/// One age message drill call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEntry {
    pub age: i32,
    pub band: AgeBand,
    pub message: String,
}

/// One loan drill call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanEntry {
    pub principal: f64,
    pub installments: u32,
    pub amount_per_installment: f64,
}

/// Results of one full drill run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillReport {
    pub calculator: Vec<CalculationEntry>,
    pub messages: Vec<MessageEntry>,
    pub loans: Vec<LoanEntry>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl DrillReport {
    pub fn entry_count(&self) -> usize {
        self.calculator.len() + self.messages.len() + self.loans.len()
    }
}

/// Execute the full drill sequence in program order.
pub fn run_drills() -> DrillReport {
    let started_at = Utc::now();

    let calculator = vec![
        calculation("sum", 5.0, 5.0, calculator::add),
        calculation("difference", 5.0, 5.0, calculator::subtract),
        calculation("product", 5.0, 5.0, calculator::multiply),
        calculation("quotient", 5.0, 5.0, calculator::divide),
    ];

    let messages: Vec<MessageEntry> = [5, 13, 18]
        .into_iter()
        .map(|age| {
            let band = AgeBand::from_age(age);
            MessageEntry {
                age,
                band,
                message: band.message().to_string(),
            }
        })
        .collect();

    let loans: Vec<LoanEntry> = [loan::TWO_INSTALLMENTS, loan::THREE_INSTALLMENTS, 5]
        .into_iter()
        .map(|installments| LoanEntry {
            principal: 1000.0,
            installments,
            amount_per_installment: loan::installment_amount(1000.0, installments),
        })
        .collect();

    DrillReport {
        calculator,
        messages,
        loans,
        started_at,
        completed_at: Utc::now(),
    }
}

fn calculation(operation: &str, lhs: f64, rhs: f64, op: fn(f64, f64) -> f64) -> CalculationEntry {
    CalculationEntry {
        operation: operation.to_string(),
        lhs,
        rhs,
        result: op(lhs, rhs),
    }
}

/// Render a drill report as grouped human-readable text.
pub fn render_report(report: &DrillReport) -> String {
    let mut out = String::new();

    out.push_str("Calculator Drill\n");
    out.push_str("================\n");
    for entry in &report.calculator {
        out.push_str(&format!(
            "  {:<12} {} and {} -> {}\n",
            entry.operation, entry.lhs, entry.rhs, entry.result
        ));
    }
    out.push('\n');

    out.push_str("Message Drill\n");
    out.push_str("=============\n");
    for entry in &report.messages {
        out.push_str(&format!(
            "  age {:>3} [{}] {}\n",
            entry.age,
            entry.band.label(),
            entry.message
        ));
    }
    out.push('\n');

    out.push_str("Loan Drill\n");
    out.push_str("==========\n");
    for entry in &report.loans {
        out.push_str(&format!(
            "  {:.2} over {} installments -> {:.2} per installment\n",
            entry.principal, entry.installments, entry.amount_per_installment
        ));
    }
    out.push('\n');

    let duration_ms = (report.completed_at - report.started_at).num_milliseconds();
    out.push_str(&format!(
        "Completed {} drill calls in {} ms\n",
        report.entry_count(),
        duration_ms
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_drills_entry_counts() {
        let report = run_drills();
        assert_eq!(report.calculator.len(), 4);
        assert_eq!(report.messages.len(), 3);
        assert_eq!(report.loans.len(), 3);
        assert_eq!(report.entry_count(), 10);
    }

    #[test]
    fn test_run_drills_reference_values() {
        let report = run_drills();

        assert_eq!(report.calculator[0].result, 10.0);
        assert_eq!(report.calculator[1].result, 0.0);
        assert_eq!(report.calculator[2].result, 25.0);
        assert_eq!(report.calculator[3].result, 1.0);

        assert_eq!(report.messages[0].band, AgeBand::Child);
        assert_eq!(report.messages[1].band, AgeBand::Teenager);
        assert_eq!(report.messages[2].band, AgeBand::Adult);

        assert_eq!(report.loans[0].amount_per_installment, 500.0);
        assert!((report.loans[1].amount_per_installment - 1000.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.loans[2].amount_per_installment, 200.0);
    }

    #[test]
    fn test_render_report_group_order() {
        let text = render_report(&run_drills());
        let calc = text.find("Calculator Drill").unwrap();
        let msg = text.find("Message Drill").unwrap();
        let loan = text.find("Loan Drill").unwrap();
        assert!(calc < msg);
        assert!(msg < loan);
    }

    #[test]
    fn test_render_report_contains_results() {
        let text = render_report(&run_drills());
        assert!(text.contains("sum"));
        assert!(text.contains("quotient"));
        assert!(text.contains("You are a teenager."));
        assert!(text.contains("500.00 per installment"));
        assert!(text.contains("Completed 10 drill calls"));
    }
}

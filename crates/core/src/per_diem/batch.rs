//! Per-diem breakdown → expense drafts

use travex_domain::{NewExpense, PerDiemCalculation};

/// Fields shared by every expense in a per-diem batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerDiemExpenseTemplate {
    pub report_id: String,
    pub expense_type_code: String,
    pub currency: String,
    pub payment_type_id: Option<String>,
    pub location_id: Option<String>,
    pub business_purpose: Option<String>,
}

/// One expense per breakdown day, in date order.
#[must_use]
pub fn build_per_diem_expenses(
    calculation: &PerDiemCalculation,
    template: &PerDiemExpenseTemplate,
) -> Vec<NewExpense> {
    calculation
        .breakdown
        .iter()
        .map(|day| NewExpense {
            report_id: template.report_id.clone(),
            expense_type_code: template.expense_type_code.clone(),
            transaction_date: day.date,
            amount: day.rate,
            currency: template.currency.clone(),
            payment_type_id: template.payment_type_id.clone(),
            location_id: template.location_id.clone(),
            business_purpose: template.business_purpose.clone(),
            vendor: None,
            comment: Some(format!("Per diem {} ({} day)", day.location, day.day_type)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::per_diem::PerDiemCalculator;

    #[test]
    fn one_draft_per_day_with_day_rates() {
        let calc =
            PerDiemCalculator::default().calculate("2024-03-10", "2024-03-12", "NYC").unwrap();
        let template = PerDiemExpenseTemplate {
            report_id: "R1".into(),
            expense_type_code: "PDIEM".into(),
            currency: "USD".into(),
            payment_type_id: Some("CASH".into()),
            location_id: None,
            business_purpose: Some("Client visit".into()),
        };

        let drafts = build_per_diem_expenses(&calc, &template);

        assert_eq!(drafts.len(), 3);
        let amounts: Vec<f64> = drafts.iter().map(|d| d.amount).collect();
        assert_eq!(amounts, vec![69.0, 92.0, 69.0]);
        assert_eq!(drafts[1].transaction_date.to_string(), "2024-03-11");
        assert!(drafts.iter().all(|d| d.report_id == "R1" && d.expense_type_code == "PDIEM"));
        assert_eq!(drafts[0].comment.as_deref(), Some("Per diem New York City (first day)"));
    }
}

use serde::{Deserialize, Serialize};

/// Payment status of a fee invoice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum FeeStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
    Waived,
}

impl FeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Pending => "pending",
            FeeStatus::Paid => "paid",
            FeeStatus::Overdue => "overdue",
            FeeStatus::Waived => "waived",
        }
    }

    /// Parse a status string, defaulting to `Pending` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "paid" => FeeStatus::Paid,
            "overdue" => FeeStatus::Overdue,
            "waived" => FeeStatus::Waived,
            _ => FeeStatus::Pending,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FeeStatus::Pending => "Pending",
            FeeStatus::Paid => "Paid",
            FeeStatus::Overdue => "Overdue",
            FeeStatus::Waived => "Waived",
        }
    }

    /// Outstanding invoices still expect payment.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, FeeStatus::Pending | FeeStatus::Overdue)
    }
}

/// One term-fee invoice for a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeInvoice {
    /// Display identifier, e.g. "INV-2026-041".
    pub id: String,
    pub student_name: String,
    pub class_name: String,
    /// Billing term label, e.g. "Term 1 2026".
    pub term: String,
    /// Amount in minor currency units.
    pub amount_cents: i64,
    /// ISO-8601 due date.
    pub due_date: String,
    pub status: FeeStatus,
}

/// Sum of invoice amounts matching the given status.
pub fn total_cents_with_status(invoices: &[FeeInvoice], status: FeeStatus) -> i64 {
    invoices
        .iter()
        .filter(|i| i.status == status)
        .map(|i| i.amount_cents)
        .sum()
}

/// Sum of all outstanding (pending or overdue) invoice amounts.
pub fn outstanding_cents(invoices: &[FeeInvoice]) -> i64 {
    invoices
        .iter()
        .filter(|i| i.status.is_outstanding())
        .map(|i| i.amount_cents)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: &str, amount_cents: i64, status: FeeStatus) -> FeeInvoice {
        FeeInvoice {
            id: id.into(),
            student_name: "Asha Verma".into(),
            class_name: "Grade 7".into(),
            term: "Term 1 2026".into(),
            amount_cents,
            due_date: "2026-04-15".into(),
            status,
        }
    }

    #[test]
    fn outstanding_includes_pending_and_overdue() {
        assert!(FeeStatus::Pending.is_outstanding());
        assert!(FeeStatus::Overdue.is_outstanding());
        assert!(!FeeStatus::Paid.is_outstanding());
        assert!(!FeeStatus::Waived.is_outstanding());
    }

    #[test]
    fn totals_by_status() {
        let ledger = vec![
            invoice("INV-1", 50_000, FeeStatus::Paid),
            invoice("INV-2", 50_000, FeeStatus::Pending),
            invoice("INV-3", 25_000, FeeStatus::Overdue),
            invoice("INV-4", 10_000, FeeStatus::Waived),
        ];
        assert_eq!(total_cents_with_status(&ledger, FeeStatus::Paid), 50_000);
        assert_eq!(outstanding_cents(&ledger), 75_000);
    }

    #[test]
    fn totals_of_empty_ledger_are_zero() {
        assert_eq!(total_cents_with_status(&[], FeeStatus::Paid), 0);
        assert_eq!(outstanding_cents(&[]), 0);
    }

    #[test]
    fn status_from_str_unknown_defaults_to_pending() {
        assert_eq!(FeeStatus::from_str_or_default("due"), FeeStatus::Pending);
    }

    #[test]
    fn status_as_str_roundtrip() {
        for status in [
            FeeStatus::Pending,
            FeeStatus::Paid,
            FeeStatus::Overdue,
            FeeStatus::Waived,
        ] {
            assert_eq!(FeeStatus::from_str_or_default(status.as_str()), status);
        }
    }
}

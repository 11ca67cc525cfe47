use crate::models::field::ItemStatus;
use crate::models::template::{FieldSpec, TemplateKind, TemplateSchema};

use super::ListField;

pub fn schema() -> TemplateSchema {
    TemplateSchema {
        kind: TemplateKind::ProjectProposal,
        fields: vec![
            FieldSpec::text("title", "Project name", "Customer Portal Redesign"),
            FieldSpec::text("subtitle", "Summary line", "Proposal for Q3 delivery"),
            FieldSpec::text("company", "Client", "Acme Corporation"),
            FieldSpec::text("author", "Prepared by", "Product Team"),
            FieldSpec::date("date", "Date", "2024-05-15"),
            FieldSpec::multiline(
                "overview",
                "Overview",
                "Rebuild the customer portal to cut support requests and speed up onboarding.",
            ),
            ListField::new("goals", "Goals")
                .field("goal", "Goal")
                .sample(&[("goal", "Reduce support tickets by 30%")])
                .sample(&[("goal", "Onboard new customers in under a day")])
                .build(),
            ListField::new("milestones", "Milestones")
                .field("name", "Milestone")
                .field("due", "Due")
                .with_status()
                .sample_with_status(&[("name", "Discovery"), ("due", "2024-06-01")], ItemStatus::InProgress)
                .sample(&[("name", "Beta release"), ("due", "2024-08-01")])
                .build(),
            ListField::new("budget", "Budget")
                .field("item", "Item")
                .field("amount", "Amount")
                .sample(&[("item", "Design"), ("amount", "$20,000")])
                .sample(&[("item", "Development"), ("amount", "$85,000")])
                .build(),
        ],
    }
}

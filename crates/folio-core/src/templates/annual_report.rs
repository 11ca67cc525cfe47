use crate::models::template::{FieldSpec, TemplateKind, TemplateSchema};

use super::ListField;

pub fn schema() -> TemplateSchema {
    TemplateSchema {
        kind: TemplateKind::AnnualReport,
        fields: vec![
            FieldSpec::text("title", "Report title", "Annual Report 2024"),
            FieldSpec::text("subtitle", "Subtitle", "A year of steady growth"),
            FieldSpec::text("company", "Company", "Acme Corporation"),
            FieldSpec::text("author", "Prepared by", "Board of Directors"),
            FieldSpec::date("date", "Date", "2024-12-31"),
            FieldSpec::multiline(
                "executive_summary",
                "Executive summary",
                "This year we expanded into two new markets and grew revenue across every region.",
            ),
            ListField::new("metrics", "Key metrics")
                .field("label", "Metric")
                .field("value", "Value")
                .field("change", "Change")
                .sample(&[("label", "Revenue"), ("value", "$12.4M"), ("change", "+18%")])
                .sample(&[("label", "Customers"), ("value", "3,200"), ("change", "+25%")])
                .sample(&[("label", "Employees"), ("value", "140"), ("change", "+12%")])
                .build(),
            ListField::new("achievements", "Achievements")
                .field("title", "Title")
                .long_field("description", "Description")
                .with_colors()
                .sample(&[
                    ("title", "New headquarters"),
                    ("description", "Moved into a larger office to support our growing team."),
                ])
                .sample(&[
                    ("title", "Product launch"),
                    ("description", "Shipped the second generation of our flagship product."),
                ])
                .build(),
            FieldSpec::multiline(
                "outlook",
                "Outlook",
                "Next year we will focus on operational efficiency and customer retention.",
            ),
        ],
    }
}

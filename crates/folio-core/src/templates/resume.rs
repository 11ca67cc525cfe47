use crate::models::template::{FieldSpec, TemplateKind, TemplateSchema};

use super::ListField;

pub fn schema() -> TemplateSchema {
    TemplateSchema {
        kind: TemplateKind::Resume,
        fields: vec![
            FieldSpec::text("title", "Full name", "Jordan Smith"),
            FieldSpec::text("subtitle", "Headline", "Software Engineer"),
            FieldSpec::email("email", "Email", "jordan.smith@example.com"),
            FieldSpec::text("phone", "Phone", "+1 555 0100"),
            FieldSpec::text("location", "Location", "Portland, OR"),
            FieldSpec::multiline(
                "summary",
                "Profile",
                "Engineer with eight years of experience building reliable backend systems.",
            ),
            ListField::new("experience", "Experience")
                .field("role", "Role")
                .field("organization", "Organization")
                .field("period", "Period")
                .long_field("description", "Description")
                .sample(&[
                    ("role", "Senior Engineer"),
                    ("organization", "Northwind"),
                    ("period", "2020 - present"),
                    ("description", "Led the payments platform team."),
                ])
                .build(),
            ListField::new("education", "Education")
                .field("degree", "Degree")
                .field("school", "School")
                .field("year", "Year")
                .sample(&[
                    ("degree", "B.Sc. Computer Science"),
                    ("school", "State University"),
                    ("year", "2016"),
                ])
                .build(),
            ListField::new("skills", "Skills")
                .field("name", "Skill")
                .with_colors()
                .sample(&[("name", "Distributed systems")])
                .sample(&[("name", "Databases")])
                .build(),
        ],
    }
}

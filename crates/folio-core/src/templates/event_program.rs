use crate::models::template::{FieldSpec, TemplateKind, TemplateSchema};

use super::ListField;

pub fn schema() -> TemplateSchema {
    TemplateSchema {
        kind: TemplateKind::EventProgram,
        fields: vec![
            FieldSpec::text("title", "Event name", "Tech Summit 2024"),
            FieldSpec::text("subtitle", "Theme", "Building for the next decade"),
            FieldSpec::text("company", "Host", "Acme Corporation"),
            FieldSpec::date("date", "Date", "2024-09-20"),
            FieldSpec::text("venue", "Venue", "Grand Convention Center"),
            FieldSpec::multiline("welcome", "Welcome note", "Thank you for joining us."),
            ListField::new("sessions", "Sessions")
                .field("time", "Time")
                .field("title", "Session")
                .field("speaker", "Speaker")
                .with_colors()
                .sample(&[("time", "09:00"), ("title", "Opening keynote"), ("speaker", "Dana Kim")])
                .sample(&[("time", "10:30"), ("title", "Scaling teams"), ("speaker", "Lee Wong")])
                .build(),
            ListField::new("sponsors", "Sponsors")
                .field("name", "Sponsor")
                .sample(&[("name", "Northwind")])
                .build(),
        ],
    }
}

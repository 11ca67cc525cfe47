use crate::models::template::{FieldSpec, TemplateKind, TemplateSchema};

use super::ListField;

pub fn schema() -> TemplateSchema {
    TemplateSchema {
        kind: TemplateKind::Newsletter,
        fields: vec![
            FieldSpec::text("title", "Newsletter name", "Community Update"),
            FieldSpec::text("subtitle", "Issue", "Issue 12 - Spring"),
            FieldSpec::text("company", "Publisher", "Riverside Association"),
            FieldSpec::text("author", "Editor", "Maria Garcia"),
            FieldSpec::date("date", "Date", "2024-04-01"),
            FieldSpec::multiline(
                "introduction",
                "Introduction",
                "Welcome to the spring issue. Here is what happened this season.",
            ),
            ListField::new("articles", "Articles")
                .field("headline", "Headline")
                .long_field("body", "Body")
                .with_colors()
                .sample(&[
                    ("headline", "Park cleanup a success"),
                    ("body", "Over forty volunteers joined the annual cleanup."),
                ])
                .build(),
            ListField::new("events", "Upcoming events")
                .field("name", "Event")
                .field("when", "When")
                .field("where", "Where")
                .sample(&[("name", "Summer fair"), ("when", "June 15"), ("where", "Town square")])
                .build(),
            FieldSpec::email("contact", "Contact email", "newsletter@example.org"),
        ],
    }
}

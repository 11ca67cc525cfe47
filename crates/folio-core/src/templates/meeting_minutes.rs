use crate::models::field::ItemStatus;
use crate::models::template::{FieldSpec, TemplateKind, TemplateSchema};

use super::ListField;

pub fn schema() -> TemplateSchema {
    TemplateSchema {
        kind: TemplateKind::MeetingMinutes,
        fields: vec![
            FieldSpec::text("title", "Meeting", "Weekly Team Sync"),
            FieldSpec::text("company", "Organization", "Acme Corporation"),
            FieldSpec::text("author", "Recorded by", "Alex Lee"),
            FieldSpec::date("date", "Date", "2024-03-04"),
            FieldSpec::text("location", "Location", "Conference Room B"),
            ListField::new("participants", "Participants")
                .field("name", "Name")
                .field("role", "Role")
                .field("attendance", "Attendance")
                .sample(&[("name", "Alex Lee"), ("role", "Chair"), ("attendance", "Present")])
                .sample(&[("name", "Sam Patel"), ("role", "Engineering"), ("attendance", "Present")])
                .build(),
            ListField::new("agenda", "Agenda")
                .field("topic", "Topic")
                .long_field("notes", "Notes")
                .with_status()
                .sample_with_status(
                    &[("topic", "Release planning"), ("notes", "Agreed on the April date.")],
                    ItemStatus::Completed,
                )
                .sample(&[("topic", "Hiring"), ("notes", "")])
                .build(),
            ListField::new("action_items", "Action items")
                .field("task", "Task")
                .field("owner", "Owner")
                .field("due", "Due")
                .with_status()
                .sample(&[("task", "Draft release notes"), ("owner", "Sam Patel"), ("due", "2024-03-11")])
                .build(),
            FieldSpec::multiline("next_meeting", "Next meeting", "2024-03-11, same room"),
        ],
    }
}

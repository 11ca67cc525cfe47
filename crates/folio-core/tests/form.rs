use folio_core::{
    CoreError, DocumentForm, DocumentRecord, FieldKind, FieldValue, ItemStatus, TemplateKind,
};
use serde_json::json;

#[test]
fn every_template_has_a_title_and_defaults_for_all_fields() {
    for kind in TemplateKind::ALL {
        let form = DocumentForm::new(kind);
        let schema = kind.schema();
        assert_eq!(schema.kind, kind);
        assert!(schema.field("title").is_some(), "{kind} has no title");
        assert_eq!(form.values().len(), schema.fields.len());
        for spec in &schema.fields {
            let value = &form.values()[&spec.key];
            assert_eq!(spec.kind.is_list(), value.as_items().is_some(), "{kind}.{}", spec.key);
        }
    }
}

#[test]
fn template_kind_round_trips_through_its_name() {
    for kind in TemplateKind::ALL {
        assert_eq!(kind.as_str().parse::<TemplateKind>().unwrap(), kind);
    }
    assert!(matches!(
        "invoice".parse::<TemplateKind>(),
        Err(CoreError::UnknownTemplate(_))
    ));
}

#[test]
fn set_text_rejects_unknown_and_list_fields() {
    let mut form = DocumentForm::new(TemplateKind::AnnualReport);

    form.set_text("title", "Q1 Report").unwrap();
    assert_eq!(form.text("title"), Some("Q1 Report"));

    assert!(matches!(
        form.set_text("nickname", "x"),
        Err(CoreError::UnknownField { .. })
    ));
    assert!(matches!(
        form.set_text("achievements", "x"),
        Err(CoreError::FieldKindMismatch { expected: "text", .. })
    ));
    assert!(form.list_mut("title").is_err());
}

#[test]
fn added_items_get_palette_and_status() {
    let mut form = DocumentForm::new(TemplateKind::AnnualReport);
    let id = form
        .add_item("achievements", &[("title", "Award"), ("description", "Best in class")])
        .unwrap();

    let items = form.items("achievements").unwrap();
    let added = items.iter().find(|i| i.id == id).unwrap();
    assert_eq!(id, 3);
    assert_eq!(added.value("title"), Some("Award"));
    assert!(added.colors.is_some());
    assert!(added.status.is_none());

    let mut minutes = DocumentForm::new(TemplateKind::MeetingMinutes);
    let id = minutes.add_item("action_items", &[("task", "Book venue")]).unwrap();
    let item = minutes
        .items("action_items")
        .unwrap()
        .iter()
        .find(|i| i.id == id)
        .unwrap();
    assert_eq!(item.status, Some(ItemStatus::Pending));
    assert_eq!(item.value("owner"), Some(""));
}

#[test]
fn list_kinds_declare_item_fields() {
    let schema = TemplateKind::EventProgram.schema();
    let sessions = schema.field("sessions").unwrap();
    let FieldKind::List { item_fields, with_colors, .. } = &sessions.kind else {
        panic!("sessions should be a list");
    };
    assert!(*with_colors);
    let keys: Vec<_> = item_fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["time", "title", "speaker"]);
}

#[test]
fn apply_hydrated_copies_matching_fields_only() {
    let mut form = DocumentForm::new(TemplateKind::Newsletter);
    let data = json!({
        "id": "0190b1c2-0000-7000-8000-000000000000",
        "type": "newsletter",
        "title": "Winter Edition",
        "subtitle": 42,
        "articles": "not a list",
        "events": [{ "id": 1, "values": { "name": "Gala" } }],
        "unrelated": "ignored"
    });

    let applied = form.apply_hydrated(data.as_object().unwrap());

    assert_eq!(applied, 2);
    assert_eq!(form.text("title"), Some("Winter Edition"));
    assert_eq!(form.text("subtitle"), Some("Issue 12 - Spring"));
    assert_eq!(form.items("articles").unwrap().len(), 1);
    let events = form.items("events").unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].value("name"), Some("Gala"));
}

#[test]
fn header_skips_blank_values_and_falls_back_on_title() {
    let mut form = DocumentForm::new(TemplateKind::ProjectProposal);
    form.set_text("title", "   ").unwrap();
    form.set_text("author", "").unwrap();

    let header = form.header();
    assert_eq!(header.title, "Project Proposal");
    assert_eq!(header.author, None);
    assert_eq!(header.company.as_deref(), Some("Acme Corporation"));
    assert_eq!(header.date.as_deref(), Some("2024-05-15"));
}

#[test]
fn resume_header_has_no_author() {
    let header = DocumentForm::new(TemplateKind::Resume).header();
    assert_eq!(header.title, "Jordan Smith");
    assert_eq!(header.author, None);
    assert!(matches!(
        DocumentForm::new(TemplateKind::Resume).values().get("email"),
        Some(FieldValue::Text(_))
    ));
}

#[test]
fn hydrated_list_with_repeated_ids_keeps_defaults() {
    let mut form = DocumentForm::new(TemplateKind::Newsletter);
    let defaults = form.items("events").unwrap().to_vec();
    let data = json!({
        "title": "Winter Edition",
        "events": [
            { "id": 1, "values": { "name": "Gala" } },
            { "id": 1, "values": { "name": "Auction" } }
        ]
    });

    let applied = form.apply_hydrated(data.as_object().unwrap());

    assert_eq!(applied, 1);
    assert_eq!(form.items("events").unwrap(), defaults.as_slice());
    let id = defaults[0].id;
    assert!(form.list_mut("events").unwrap().remove(id));
    assert_eq!(form.items("events").unwrap().len(), defaults.len() - 1);
}

#[test]
fn stored_list_with_repeated_ids_is_not_restored() {
    let mut record = DocumentRecord::snapshot(&DocumentForm::new(TemplateKind::Newsletter));
    let defaults = record.fields["events"].clone();
    record.fields.insert(
        "events".to_string(),
        serde_json::from_value(json!([
            { "id": 4, "values": { "name": "Gala" } },
            { "id": 4, "values": { "name": "Auction" } }
        ]))
        .unwrap(),
    );

    let form = DocumentForm::from_record(&record);

    assert_eq!(form.values()["events"], defaults);
}

#[test]
fn adding_past_the_highest_id_is_an_error() {
    let mut form = DocumentForm::new(TemplateKind::Newsletter);
    let data = json!({ "events": [{ "id": u64::MAX, "values": { "name": "Gala" } }] });
    assert_eq!(form.apply_hydrated(data.as_object().unwrap()), 1);

    let err = form.add_item("events", &[("name", "Auction")]).unwrap_err();

    assert!(matches!(err, CoreError::IdsExhausted { ref key } if key == "events"));
    assert_eq!(form.items("events").unwrap().len(), 1);
}

#[test]
fn hydrated_item_without_values_keeps_its_list() {
    let mut form = DocumentForm::new(TemplateKind::Newsletter);
    let data = json!({
        "events": [
            { "id": 1, "values": { "name": "Gala" } },
            { "id": 2 }
        ]
    });

    assert_eq!(form.apply_hydrated(data.as_object().unwrap()), 1);

    let events = form.items("events").unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].value("name"), Some("Gala"));
    assert!(events[1].values.is_empty());
}

//! Transcript and history entry tests.

use pulsage_llm::{Author, Content, Role, Transcript, Turn};

#[test]
fn transcript_keeps_insertion_order() {
    let mut transcript = Transcript::new();
    assert!(transcript.is_empty());
    assert!(transcript.last().is_none());

    transcript.append(Turn::user("hello"));
    transcript.append(Turn::assistant("hi"));
    transcript.append(Turn::user("hello"));

    assert_eq!(transcript.len(), 3);
    let roles: Vec<Role> = transcript.all().iter().map(Turn::role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
    assert_eq!(transcript.all()[0], transcript.all()[2]);
    assert_eq!(transcript.last().unwrap().content(), "hello");
}

#[test]
fn roles_map_onto_authors() {
    assert_eq!(Author::from(Role::User), Author::User);
    assert_eq!(Author::from(Role::Assistant), Author::Model);
}

#[test]
fn content_from_turn_has_one_part() {
    let content = Content::from(&Turn::assistant("over and out"));
    assert_eq!(content.role, Author::Model);
    assert_eq!(content.parts.len(), 1);
    assert_eq!(content.parts[0].text, "over and out");
}

#[test]
fn content_serializes_in_wire_shape() {
    let json = serde_json::to_value(Content::text(Author::Model, "b")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "role": "model", "parts": [{ "text": "b" }] })
    );
}

#[test]
fn turn_serializes_with_lowercase_role() {
    let json = serde_json::to_string(&Turn::user("status?")).unwrap();
    assert_eq!(json, r#"{"role":"user","content":"status?"}"#);

    let transcript: Transcript =
        serde_json::from_str(r#"[{"role":"assistant","content":"b"}]"#).unwrap();
    assert_eq!(transcript.all(), &[Turn::assistant("b")]);
}

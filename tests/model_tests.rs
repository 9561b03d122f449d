//! Serde behavior of the request/response models: closed enum sets reject
//! out-of-set values at the boundary, and partial update payloads leave
//! absent fields absent.

use zenga_film_server::about::models::AboutSection;
use zenga_film_server::contact::models::{MessageStatus, SendMessageRequest};
use zenga_film_server::org::model::{CreatePositionRequest, OrgNode, UpdatePositionRequest};
use zenga_film_server::projects::models::{
    CreateProjectRequest, ProjectCategory, ProjectStatus, UpdateProjectRequest,
};
use zenga_film_server::team::models::TeamDepartment;

#[test]
fn test_project_category_closed_set() {
    let valid: ProjectCategory = serde_json::from_str("\"muzik_video\"").unwrap();
    assert_eq!(valid, ProjectCategory::MuzikVideo);

    let invalid: Result<ProjectCategory, _> = serde_json::from_str("\"short_film\"");
    assert!(invalid.is_err());
}

#[test]
fn test_project_status_closed_set() {
    let valid: ProjectStatus = serde_json::from_str("\"coming_soon\"").unwrap();
    assert_eq!(valid, ProjectStatus::ComingSoon);

    let invalid: Result<ProjectStatus, _> = serde_json::from_str("\"published\"");
    assert!(invalid.is_err());
}

#[test]
fn test_team_department_closed_set() {
    for value in ["yonetim", "kreatif", "produksiyon", "teknik"] {
        let json = format!("\"{}\"", value);
        let parsed: Result<TeamDepartment, _> = serde_json::from_str(&json);
        assert!(parsed.is_ok(), "expected {} to parse", value);
    }

    let invalid: Result<TeamDepartment, _> = serde_json::from_str("\"finans\"");
    assert!(invalid.is_err());
}

#[test]
fn test_message_status_closed_set() {
    let valid: MessageStatus = serde_json::from_str("\"replied\"").unwrap();
    assert_eq!(valid, MessageStatus::Replied);

    let invalid: Result<MessageStatus, _> = serde_json::from_str("\"deleted\"");
    assert!(invalid.is_err());
}

#[test]
fn test_about_section_closed_set() {
    let valid: AboutSection = serde_json::from_str("\"mission\"").unwrap();
    assert_eq!(valid, AboutSection::Mission);

    let invalid: Result<AboutSection, _> = serde_json::from_str("\"history\"");
    assert!(invalid.is_err());
}

#[test]
fn test_create_project_request_rejects_bad_category() {
    let json = r#"{
        "title": "New Film",
        "slug": "new-film",
        "category": "sitcom"
    }"#;

    let request: Result<CreateProjectRequest, _> = serde_json::from_str(json);
    assert!(request.is_err());
}

#[test]
fn test_create_project_request_minimal_payload() {
    let json = r#"{
        "title": "New Film",
        "slug": "new-film",
        "category": "film"
    }"#;

    let request: CreateProjectRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.title, "New Film");
    assert_eq!(request.category, ProjectCategory::Film);
    assert!(request.status.is_none());
    assert!(request.gallery.is_none());
}

#[test]
fn test_update_project_request_partial() {
    // The patch carries only the title; everything else must stay absent
    // so the update leaves those columns untouched.
    let json = r#"{ "title": "Updated Film" }"#;

    let request: UpdateProjectRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.title, Some("Updated Film".to_string()));
    assert!(request.slug.is_none());
    assert!(request.category.is_none());
    assert!(request.status.is_none());
    assert!(request.is_featured.is_none());
}

#[test]
fn test_update_position_request_partial() {
    let json = r#"{ "parent_id": 3 }"#;

    let request: UpdatePositionRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.parent_id, Some(3));
    assert!(request.title.is_none());
    assert!(request.sort_order.is_none());
}

#[test]
fn test_create_position_request_deserialization() {
    let json = r#"{
        "title": "Kreatif Direktör",
        "name": "Selahattin Yusuf",
        "department": "kreatif",
        "parent_id": 1,
        "sort_order": 2
    }"#;

    let request: CreatePositionRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.title, "Kreatif Direktör");
    assert_eq!(request.parent_id, Some(1));
    assert!(request.photo.is_none());
}

#[test]
fn test_org_node_leaf_omits_children() {
    let node = OrgNode {
        id: 1,
        title: "Genel Yapımcı".to_string(),
        name: None,
        department: None,
        parent_id: None,
        photo: None,
        bio: None,
        sort_order: 0,
        children: Vec::new(),
    };

    let json = serde_json::to_string(&node).unwrap();
    assert!(!json.contains("children"));

    let back: OrgNode = serde_json::from_str(&json).unwrap();
    assert!(back.children.is_empty());
}

#[test]
fn test_send_message_request_deserialization() {
    let json = r#"{
        "name": "Ayşe Yılmaz",
        "email": "ayse@example.com",
        "project_type": "reklam",
        "message": "Tanıtım filmi için teklif almak istiyoruz."
    }"#;

    let request: SendMessageRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.name, "Ayşe Yılmaz");
    assert!(request.phone.is_none());
}

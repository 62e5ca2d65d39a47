//! End-to-end flow against a mock backend: aggregate the paginated roster,
//! filter it, and export the filtered set as CSV.

use std::sync::Arc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tech_compass::api::CompassClient;
use tech_compass::collector::RosterCollector;
use tech_compass::dashboard::{DashboardState, TrackFilter};
use tech_compass::export;
use tech_compass::models::{Config, Track};

fn student(name: &str, track: &str, skills: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "id": format!("id-{name}"),
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "phone": "+234 801 234 5678",
        "course": "Computer Science",
        "level": "300 Level",
        "track": track,
        "institution": "University of Lagos",
        "location": null,
        "resume_url": null,
        "skills": skills,
        "linkedin": null
    })
}

fn page(items: Vec<serde_json::Value>, next_cursor: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "status": 200,
        "message": "ok",
        "data": {
            "data": items,
            "hasNextPage": next_cursor.is_some(),
            "hasPreviousPage": false,
            "nextCursor": next_cursor,
            "previousCursor": null
        }
    })
}

#[tokio::test]
async fn aggregate_filter_and_export() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/student"))
        .and(query_param("limit", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![
                student("Ada", "Software Engineering", Some("Rust, SQL")),
                student("Bola", "Software Engineering", None),
                student("Chidi", "Software Engineering", None),
            ],
            Some("c1"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/student"))
        .and(query_param("cursor", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![
                student("Dayo", "Cyber Security", Some("Networking")),
                student("Efe", "Product Design", None),
                student("Funke", "Product Design", None),
            ],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        api_url: server.uri(),
        page_limit: 1000,
        timeout_secs: 5,
    };
    let client = Arc::new(CompassClient::new(&config).unwrap());

    // Aggregate the full roster across both pages
    let roster = RosterCollector::new(client).fetch_all().await.unwrap();
    assert_eq!(roster.len(), 6);

    let mut dashboard = DashboardState::new();
    dashboard.set_students(roster);

    // Track counts over the full roster: {SE: 3, CS: 1, ML: 0, PD: 2}
    assert_eq!(dashboard.track_count(&Track::SoftwareEngineering), 3);
    assert_eq!(dashboard.track_count(&Track::MachineLearning), 0);
    assert_eq!(dashboard.track_label(&Track::CyberSecurity), "Cyber Security (1)");

    // Filtering down to Cyber Security leaves exactly one row
    dashboard.set_filter(TrackFilter::Only(Track::CyberSecurity));
    let filtered = dashboard.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Dayo");

    // Export the filtered set: one header row plus one data row
    let dir = tempfile::tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    let csv_path = export::export_to_dir(&filtered, dir.path(), date).unwrap();
    assert!(csv_path.ends_with("students_2026-08-07.csv"));

    let text = std::fs::read_to_string(csv_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "\"Dayo\",\"dayo@example.com\",\"+234 801 234 5678\",\"University of Lagos\",\"Computer Science\",\"300 Level\",\"Cyber Security\",\"Networking\",\"\""
    );
}

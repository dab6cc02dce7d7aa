//! Field Lister against a mocked org.

use busbar_sf_schema::cli::FieldsCommand;
use busbar_sf_schema::fields::{FieldLister, FieldQuery, SortKey};
use busbar_sf_schema::{ErrorKind, SalesforceRestClient};
use std::io::{self, Write};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DESCRIBE_PATH: &str = "/services/data/v62.0/sobjects/Account/describe/";

async fn mock_versions(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/services/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"label": "Summer '24", "url": "/services/data/v61.0", "version": "61.0"},
            {"label": "Winter '25", "url": "/services/data/v62.0", "version": "62.0"},
            {"label": "Winter '16", "url": "/services/data/v35.0", "version": "35.0"}
        ])))
        .expect(1)
        .mount(server)
        .await;
}

async fn mock_describe(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(DESCRIBE_PATH))
        .and(header("Content-Type", "application/json"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn account_describe() -> Value {
    json!({
        "name": "Account",
        "label": "Account",
        "fields": [
            {"name": "Type", "label": "Account Type", "type": "picklist", "length": 255, "relationshipName": null},
            {"name": "Id", "label": "Account ID", "type": "id", "length": 18, "relationshipName": null},
            {"name": "ParentId", "label": "Parent Account ID", "type": "reference", "length": 18, "relationshipName": "Parent"},
            {"name": "Name", "label": "Account Name", "type": "string", "length": 255, "relationshipName": null},
            {"name": "Industry", "label": "Industry", "type": "picklist", "length": 255, "relationshipName": null}
        ]
    })
}

fn lister(server: &MockServer) -> FieldLister {
    // Start below the org's max to show discovery picks the version
    let client = SalesforceRestClient::new(server.uri(), "test-token")
        .unwrap()
        .with_api_version("50.0");
    FieldLister::new(client)
}

fn name_column(text: &str) -> Vec<String> {
    text.lines()
        .skip(2)
        .filter_map(|line| line.split('|').nth(1))
        .map(|cell| cell.trim().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_mode_sorted_by_name() {
    let server = MockServer::start().await;
    mock_versions(&server).await;
    mock_describe(&server, account_describe()).await;

    let mut out: Vec<u8> = Vec::new();
    let describe = lister(&server)
        .list_fields("Account", &FieldQuery::list(), &mut out)
        .await
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(describe, account_describe());
    assert_eq!(name_column(&text), ["Id", "Industry", "Name", "ParentId", "Type"]);
    assert!(text.lines().next().unwrap().contains("relationshipName"));
}

#[tokio::test]
async fn test_list_mode_sorted_by_label() {
    let server = MockServer::start().await;
    mock_versions(&server).await;
    mock_describe(&server, account_describe()).await;

    let mut out: Vec<u8> = Vec::new();
    let query = FieldQuery::list().sorted_by(SortKey::new("label"));
    lister(&server).list_fields("Account", &query, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(name_column(&text), ["Id", "Name", "Type", "Industry", "ParentId"]);
}

#[tokio::test]
async fn test_detail_mode_prints_matching_field() {
    let server = MockServer::start().await;
    mock_versions(&server).await;
    mock_describe(&server, account_describe()).await;

    let mut out: Vec<u8> = Vec::new();
    lister(&server)
        .list_fields("Account", &FieldQuery::detail("PARENTID"), &mut out)
        .await
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    let printed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(printed, account_describe()["fields"][2]);
    assert!(text.starts_with("{\n   \"name\": \"ParentId\","));
}

#[tokio::test]
async fn test_no_fields_key_prints_nothing_and_returns_response() {
    let server = MockServer::start().await;
    mock_versions(&server).await;
    let body = json!({"name": "Account", "urls": {}});
    mock_describe(&server, body.clone()).await;

    let mut out: Vec<u8> = Vec::new();
    let describe = lister(&server)
        .list_fields("Account", &FieldQuery::list(), &mut out)
        .await
        .unwrap();

    assert!(out.is_empty());
    assert_eq!(describe, body);
}

#[tokio::test]
async fn test_empty_fields_array_prints_header_only() {
    let server = MockServer::start().await;
    mock_versions(&server).await;
    let body = json!({"name": "Empty__c", "fields": []});
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/Empty__c/describe/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let mut out: Vec<u8> = Vec::new();
    let describe = lister(&server)
        .list_fields("Empty__c", &FieldQuery::list(), &mut out)
        .await
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(describe, body);
    assert!(text.lines().next().unwrap().contains("relationshipName"));
    assert!(name_column(&text).is_empty());
}

#[tokio::test]
async fn test_unknown_sobject_propagates_error() {
    let server = MockServer::start().await;
    mock_versions(&server).await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/Nope__c/describe/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!([{
            "errorCode": "NOT_FOUND",
            "message": "The requested resource does not exist"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let mut out: Vec<u8> = Vec::new();
    let err = lister(&server)
        .list_fields("Nope__c", &FieldQuery::list(), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Rest(_)));
    assert!(err.to_string().contains("NOT_FOUND"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_version_discovery_failure_skips_describe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/data"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!([{
            "errorCode": "INVALID_SESSION_ID",
            "message": "Session expired or invalid"
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(DESCRIBE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_describe()))
        .expect(0)
        .mount(&server)
        .await;

    let err = lister(&server)
        .list_fields("Account", &FieldQuery::list(), &mut Vec::<u8>::new())
        .await
        .unwrap_err();

    assert_eq!(err.name(), "RestError");
}

#[tokio::test]
async fn test_fields_command_json_envelope() {
    let server = MockServer::start().await;
    mock_versions(&server).await;
    mock_describe(&server, account_describe()).await;

    let cmd = FieldsCommand {
        sobject: "Account".into(),
        field: Some("Name".into()),
        sortby: SortKey::default(),
    };
    let client = SalesforceRestClient::new(server.uri(), "test-token").unwrap();

    let mut out: Vec<u8> = Vec::new();
    let describe = cmd.execute(client, true, &mut out).await.unwrap();
    let printed: Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(printed["status"], 0);
    assert_eq!(printed["result"], describe);
    assert_eq!(describe, account_describe());
}

#[tokio::test]
async fn test_fields_command_unsortable_attribute() {
    let server = MockServer::start().await;
    mock_versions(&server).await;
    mock_describe(&server, account_describe()).await;

    let cmd = FieldsCommand {
        sobject: "Account".into(),
        field: None,
        sortby: SortKey::new("relationshipName"),
    };
    let client = SalesforceRestClient::new(server.uri(), "test-token").unwrap();

    let mut out: Vec<u8> = Vec::new();
    let err = cmd.execute(client, false, &mut out).await.unwrap_err();

    assert!(matches!(err.kind, ErrorKind::UnsortableAttribute { .. }));
    assert!(out.is_empty());
}

/// Accepts writes but fails to flush, like stdout redirected to a full disk.
struct FullDisk(Vec<u8>);

impl Write for FullDisk {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("No space left on device"))
    }
}

#[tokio::test]
async fn test_fields_command_reports_flush_failure() {
    let server = MockServer::start().await;
    mock_versions(&server).await;
    mock_describe(&server, account_describe()).await;

    let cmd = FieldsCommand {
        sobject: "Account".into(),
        field: None,
        sortby: SortKey::default(),
    };
    let client = SalesforceRestClient::new(server.uri(), "test-token").unwrap();

    let mut out = FullDisk(Vec::new());
    let err = cmd.execute(client, false, &mut out).await.unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Output(_)));
    assert_eq!(err.name(), "OutputError");
    assert!(err.to_string().contains("No space left on device"));
}

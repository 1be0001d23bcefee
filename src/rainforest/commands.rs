//! Resource list command handlers

use std::io::{self, Write};

use log::{debug, info};

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::Result;
use crate::output::{write_rows, DisplayRow};
use crate::ui::{create_spinner, finish_spinner};

use super::traits::{ResourceResponse, ToRows};
use super::{ResourceKind, RfClient};

/// Rows of one resource listing, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Header label, e.g. "Folders"
    pub label: &'static str,
    pub rows: Vec<DisplayRow>,
}

impl Report {
    /// Build a report from a decoded response
    pub fn from_response<R: ResourceResponse>(response: &R) -> Self {
        Self {
            label: R::LABEL,
            rows: response.to_rows(),
        }
    }
}

fn into_report<R: ResourceResponse>(response: R) -> Report {
    debug!("{} response: {:?}", R::LABEL, response);
    Report::from_response(&response)
}

/// Fetch one resource collection and flatten it into rows
pub async fn fetch_report(client: &RfClient, kind: ResourceKind) -> Result<Report> {
    debug!("Fetching {}", kind);

    let report = match kind {
        ResourceKind::Folders => into_report(client.get_folders().await?),
        ResourceKind::Sites => into_report(client.get_sites().await?),
        ResourceKind::Browsers => into_report(client.get_browsers().await?),
    };

    debug!("Got {} {}", report.rows.len(), kind);
    Ok(report)
}

/// Write a report to `out` in the requested format
pub fn print_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    write_rows(out, format, report.label, &report.rows)
}

/// Fetch a resource collection and print it
///
/// Nothing is written when the fetch fails.
pub async fn print_resource<W: Write>(
    client: &RfClient,
    kind: ResourceKind,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    let report = fetch_report(client, kind).await?;
    print_report(out, &report, format)
}

/// Run the `get <resource>` command against stdout
pub async fn run_get_command(client: &RfClient, cli: &Cli) -> Result<()> {
    let Command::Get { resource } = &cli.command;
    let kind = resource.kind();

    let spinner = create_spinner(&format!("Fetching {}...", kind), cli.batch);
    let fetched = fetch_report(client, kind).await;
    finish_spinner(spinner);
    let report = fetched?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_report(&mut out, &report, resource.args().output)?;
    out.flush()?;

    info!("Listed {} {}", report.rows.len(), kind);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RfError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_all(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/folders.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "F1", "title": "Marketing"},
                {"id": "F2", "title": "Sales"}
            ])))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/sites.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 10, "name": "Production"}
            ])))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/clients.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "available_browsers": [
                    {"name": "chrome", "description": "Chrome"},
                    {"name": "firefox", "description": "Firefox"}
                ]
            })))
            .mount(server)
            .await;
    }

    async fn render(client: &RfClient, kind: ResourceKind, format: OutputFormat) -> String {
        let mut out = Vec::new();
        print_resource(client, kind, &mut out, format).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_report_folders() {
        let mock_server = MockServer::start().await;
        mount_all(&mock_server).await;
        let client = RfClient::new(mock_server.uri());

        let report = fetch_report(&client, ResourceKind::Folders).await.unwrap();
        assert_eq!(report.label, "Folders");
        assert_eq!(
            report.rows,
            vec![
                DisplayRow::new("F1", "Marketing"),
                DisplayRow::new("F2", "Sales")
            ]
        );
    }

    #[tokio::test]
    async fn test_print_folders_table() {
        let mock_server = MockServer::start().await;
        mount_all(&mock_server).await;
        let client = RfClient::new(mock_server.uri());

        let text = render(&client, ResourceKind::Folders, OutputFormat::Table).await;
        let header = text.lines().next().unwrap();
        assert!(header.contains("Folders ID"));
        assert!(header.contains("Folders Description"));
        assert!(text.find("Marketing").unwrap() < text.find("Sales").unwrap());
    }

    #[tokio::test]
    async fn test_print_sites_uses_sites_header() {
        let mock_server = MockServer::start().await;
        mount_all(&mock_server).await;
        let client = RfClient::new(mock_server.uri());

        let text = render(&client, ResourceKind::Sites, OutputFormat::Table).await;
        assert!(text.contains("Sites ID"));
        assert!(text.contains("Sites Description"));
        assert!(!text.contains("Folders"));
        assert!(text.contains("Production"));
    }

    #[tokio::test]
    async fn test_print_browsers_uses_browsers_header() {
        let mock_server = MockServer::start().await;
        mount_all(&mock_server).await;
        let client = RfClient::new(mock_server.uri());

        let text = render(&client, ResourceKind::Browsers, OutputFormat::Table).await;
        assert!(text.contains("Browsers ID"));
        assert!(text.contains("Browsers Description"));
        assert!(!text.contains("Folders"));
        assert!(text.contains("firefox"));
    }

    #[tokio::test]
    async fn test_print_resource_json() {
        let mock_server = MockServer::start().await;
        mount_all(&mock_server).await;
        let client = RfClient::new(mock_server.uri());

        let text = render(&client, ResourceKind::Sites, OutputFormat::Json).await;
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"id": "10", "description": "Production"}])
        );
    }

    #[tokio::test]
    async fn test_print_resource_fetch_failure_writes_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sites.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        let client = RfClient::new(mock_server.uri());

        let mut out = Vec::new();
        let result =
            print_resource(&client, ResourceKind::Sites, &mut out, OutputFormat::Table).await;

        assert!(matches!(result, Err(RfError::Api { status: 500, .. })));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_print_empty_folders_is_header_only() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/folders.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;
        let client = RfClient::new(mock_server.uri());

        let text = render(&client, ResourceKind::Folders, OutputFormat::Table).await;
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Folders ID"));
    }

    #[test]
    fn test_report_from_response() {
        let resp: crate::rainforest::BrowsersResponse = serde_json::from_value(
            serde_json::json!({"available_browsers": [{"name": "edge", "description": "Edge"}]}),
        )
        .unwrap();
        let report = Report::from_response(&resp);
        assert_eq!(report.label, "Browsers");
        assert_eq!(report.rows, vec![DisplayRow::new("edge", "Edge")]);
    }
}

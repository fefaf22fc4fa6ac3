//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a fake listing site and run the full
//! crawl over real HTTP. The crawl itself is blocking, so it runs on a
//! blocking task while the mock server keeps serving.

use solar_chef::config::Config;
use solar_chef::crawler::{crawl, CrawlStats};
use solar_chef::output::{publish_all, ManifestPublisher, MarkdownPublisher, Publisher};
use solar_chef::tree::{validate_channel, ChannelNode, ContentNode};
use solar_chef::ChefError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.source.base_url = format!("{}/", base_url);
    config.user_agent.crawler_name = "TestChef".to_string();
    config
}

fn dir_cell(source_id: &str, title: &str) -> String {
    format!(
        r#"<td class="text-xs-left" data-sort-value="{}"><i class="fa fa-folder"></i> <strong>{}</strong></td>
           <td class="text-xs-right" data-sort-value="-1">&mdash;</td>"#,
        source_id, title
    )
}

fn media_cell(source_id: &str, title: &str, href: &str) -> String {
    format!(
        r#"<td class="text-xs-left" data-sort-value="{}"><a href="{}">{}</a></td>
           <td class="text-xs-right" data-sort-value="1048576">1 MB</td>"#,
        source_id, href, title
    )
}

fn listing_page(cells: &[String]) -> String {
    let rows: String = cells
        .iter()
        .map(|cell| format!("<tr>{}</tr>\n", cell))
        .collect();
    format!(
        r#"<html><head><title>Index</title></head><body>
        <table class="table">
        <thead><tr><th>Name</th><th>Size</th></tr></thead>
        <tbody>
        {}
        </tbody>
        </table></body></html>"#,
        rows
    )
}

/// Mounts a listing page at `route`
async fn mount_listing(server: &MockServer, route: &str, cells: &[String]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_page(cells))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Runs the blocking crawl off the async runtime
async fn run_crawl(config: Config) -> Result<(ChannelNode, CrawlStats), ChefError> {
    tokio::task::spawn_blocking(move || crawl(&config))
        .await
        .expect("Crawl task panicked")
}

#[tokio::test]
async fn test_topic_and_video_at_root() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_listing(
        &mock_server,
        "/content/",
        &[
            dir_cell("dir-crafts", "Crafts"),
            media_cell("demo.mp4", "Demo Video", "/videos/demo.mp4"),
        ],
    )
    .await;

    mount_listing(
        &mock_server,
        "/content/Crafts/",
        &[media_cell(
            "file-basket weaving.mp4",
            "Basket Weaving",
            "/content/Crafts/basket weaving.mp4",
        )],
    )
    .await;

    let (channel, stats) = run_crawl(create_test_config(&base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(channel.children.len(), 2);

    let crafts = channel.children[0].as_topic().expect("Expected a topic");
    assert_eq!(crafts.title, "Crafts");
    assert_eq!(crafts.children.len(), 1);
    let weaving = crafts.children[0].as_video().expect("Expected a video");
    assert_eq!(
        weaving.files[0].path,
        format!("{}/content/Crafts/basket%20weaving.mp4", base_url)
    );

    let demo = channel.children[1].as_video().expect("Expected a video");
    assert_eq!(demo.title, "Demo Video");
    assert_eq!(demo.files[0].path, format!("{}/videos/demo.mp4", base_url));

    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.topics, 1);
    assert_eq!(stats.videos, 2);
    assert!(validate_channel(&channel).is_ok());
}

#[tokio::test]
async fn test_empty_listing_makes_one_request() {
    let mock_server = MockServer::start().await;
    mount_listing(&mock_server, "/content/", &[]).await;

    let (channel, stats) = run_crawl(create_test_config(&mock_server.uri()))
        .await
        .expect("Crawl failed");

    assert!(channel.children.is_empty());
    assert_eq!(stats.pages_fetched, 1);

    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording is enabled");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_escaped_child_endpoints() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        "/content/",
        &[
            dir_cell("dir-pacific-islands", "Pacific Islands"),
            dir_cell("dir-grade-3", "Grade #3"),
        ],
    )
    .await;
    mount_listing(&mock_server, "/content/Pacific%20Islands/", &[]).await;
    mount_listing(&mock_server, "/content/Grade%20%233/", &[]).await;

    let (channel, stats) = run_crawl(create_test_config(&mock_server.uri()))
        .await
        .expect("Crawl failed");

    let titles: Vec<&str> = channel.children.iter().map(ContentNode::title).collect();
    assert_eq!(titles, vec!["Pacific Islands", "Grade #3"]);
    assert_eq!(stats.pages_fetched, 3);
}

#[tokio::test]
async fn test_unsupported_rows_are_skipped() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        "/content/",
        &[
            media_cell("guide.pdf", "Guide", "/content/guide.pdf"),
            media_cell("clip.mp4", "Clip", "/content/clip.mp4"),
        ],
    )
    .await;

    let (channel, stats) = run_crawl(create_test_config(&mock_server.uri()))
        .await
        .expect("Crawl failed");

    assert_eq!(channel.children.len(), 1);
    assert_eq!(channel.children[0].title(), "Clip");
    assert_eq!(stats.skipped_rows, 1);
}

#[tokio::test]
async fn test_missing_subdirectory_aborts() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        "/content/",
        &[dir_cell("dir-gone", "Gone"), dir_cell("dir-later", "Later")],
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/content/Gone/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/content/Later/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = run_crawl(create_test_config(&mock_server.uri())).await;

    match result {
        Err(ChefError::HttpStatus { url, status }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/content/Gone/"));
        }
        other => panic!("Expected HTTP status error, got {:?}", other.map(|(_, s)| s)),
    }
}

#[tokio::test]
async fn test_page_without_table_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><h1>Maintenance</h1></body></html>"),
        )
        .mount(&mock_server)
        .await;

    let result = run_crawl(create_test_config(&mock_server.uri())).await;
    assert!(matches!(result, Err(ChefError::HtmlParse { .. })));
}

#[tokio::test]
async fn test_crawl_validate_and_publish() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        "/content/",
        &[dir_cell("dir-environment", "Environment")],
    )
    .await;
    mount_listing(
        &mock_server,
        "/content/Environment/",
        &[media_cell(
            "file-tuvalu water.mp4",
            "Tuvalu Water and Climate Change",
            "/content/Environment/tuvalu water.mp4",
        )],
    )
    .await;

    let (channel, stats) = run_crawl(create_test_config(&mock_server.uri()))
        .await
        .expect("Crawl failed");
    validate_channel(&channel).expect("Channel should be valid");

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let manifest_path = dir.path().join("channel.json");
    let summary_path = dir.path().join("channel.md");
    let publishers: Vec<Box<dyn Publisher>> = vec![
        Box::new(ManifestPublisher::new(&manifest_path)),
        Box::new(MarkdownPublisher::new(&summary_path)),
    ];
    publish_all(&publishers, &channel, &stats).expect("Publishing failed");

    let manifest: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(&manifest_path).expect("Manifest missing"),
    )
    .expect("Manifest is not JSON");
    assert_eq!(manifest["channel"]["title"], "Solar Spell");
    assert_eq!(
        manifest["channel"]["children"][0]["children"][0]["title"],
        "Tuvalu Water and Climate Change"
    );
    assert_eq!(manifest["tree"]["videos"], 1);

    let summary = std::fs::read_to_string(&summary_path).expect("Summary missing");
    assert!(summary.contains("- **Environment/**"));
}

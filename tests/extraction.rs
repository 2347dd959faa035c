// ABOUTME: End-to-end extraction tests over raw HTML pages.
// ABOUTME: Exercises the full cascade: graphs, config rules, and title cleaning together.

use pretty_assertions::assert_eq;

use gannet::{extract_publish_date, extract_title, Article, Config};

#[test]
fn test_full_article_page() {
    let html = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <title>Breaking: Major Discovery in Science - Science Daily</title>
            <meta property="og:title" content="Major Discovery in Science - Science Daily">
            <meta property="og:site_name" content="Science Daily">
            <meta property="article:published_time" content="2024-01-15T10:30:00Z">
            <script type="application/ld+json">
            {
                "@context": "https://schema.org",
                "@type": "NewsArticle",
                "headline": "Major Discovery in Science",
                "datePublished": "2024-01-14T00:00:00Z",
                "publisher": {"@type": "Organization", "name": "Science Daily"}
            }
            </script>
        </head>
        <body><article><h1>Major Discovery in Science</h1></article></body>
        </html>
    "#;

    let article = Article::from_html(html, "https://www.sciencedaily.example/news/1").unwrap();
    let config = Config::default();

    // OpenGraph outranks the schema graph for both fields.
    assert_eq!(
        extract_publish_date(&article, &config),
        Some("2024-01-15T10:30:00Z".to_string())
    );
    assert_eq!(extract_title(&article), "Major Discovery in Science");
}

#[test]
fn test_opengraph_title_with_site_name_suffix() {
    let html = r#"
        <html><head>
            <meta property="og:title" content="Foo - Bar Corp">
            <meta property="og:site_name" content="Bar Corp">
        </head></html>
    "#;
    let article = Article::from_html(html, "https://barcorp.example/foo").unwrap();
    assert_eq!(extract_title(&article), "Foo");
}

#[test]
fn test_schema_only_page() {
    let html = r#"
        <html><head>
        <script type="application/ld+json">
        {
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": "Quiet Announcement",
            "datePublished": "2023-11-30"
        }
        </script>
        </head></html>
    "#;
    let article = Article::from_html(html, "https://blog.example.net/post").unwrap();
    let config = Config::default();

    assert_eq!(
        extract_publish_date(&article, &config),
        Some("2023-11-30".to_string())
    );
    assert_eq!(extract_title(&article), "Quiet Announcement");
}

#[test]
fn test_meta_rules_and_title_element_fallback() {
    let html = r#"
        <html><head>
            <title>An Ordinary Post | example.net</title>
            <meta name="sailthru.date" content="2022-05-05 10:00:00">
        </head></html>
    "#;
    let article = Article::from_html(html, "https://example.net/post").unwrap();
    let config = Config::default();

    assert_eq!(
        extract_publish_date(&article, &config),
        Some("2022-05-05 10:00:00".to_string())
    );
    // Domain stripped, then the dangling splitter dropped.
    assert_eq!(extract_title(&article), "An Ordinary Post");
}

#[test]
fn test_bare_page_yields_nothing() {
    let html = "<html><head><title></title></head><body><p>hello</p></body></html>";
    let article = Article::from_html(html, "https://example.com/").unwrap();
    let config = Config::default();

    assert_eq!(extract_publish_date(&article, &config), None);
    assert_eq!(extract_title(&article), "");
}

#[test]
fn test_custom_rule_set_end_to_end() {
    let html = r#"
        <html><head>
            <meta name="house-style-date" content="2021-07-07">
        </head></html>
    "#;
    let article = Article::from_html(html, "https://example.com/a").unwrap();
    let config = Config::from_json(
        r#"[{"attr": "name", "value": "house-style-date"}]"#,
    )
    .unwrap();

    assert_eq!(
        extract_publish_date(&article, &config),
        Some("2021-07-07".to_string())
    );
}

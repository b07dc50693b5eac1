use super::*;

// =============================================================================
// render_post
// =============================================================================

#[test]
fn renders_plain_identifier() {
    let html = render_post("hello-world");
    assert!(html.contains("<h1>Post hello-world</h1>"));
    assert!(html.contains("<strong>hello-world</strong>"));
}

#[test]
fn renders_empty_identifier() {
    let html = render_post("");
    assert!(html.contains("<h1>Post </h1>"));
}

#[test]
fn renders_unicode_identifier() {
    let html = render_post("café-№42-🦀");
    assert!(html.contains("café-№42-🦀"));
}

#[test]
fn renders_very_long_identifier() {
    let id = "x".repeat(10_000);
    let html = render_post(&id);
    assert!(html.contains(&id));
}

#[test]
fn escapes_markup_in_identifier() {
    let html = render_post("<script>alert('x')</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

// =============================================================================
// escape_html
// =============================================================================

#[test]
fn escape_html_covers_special_characters() {
    assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
    assert_eq!(escape_html("plain"), "plain");
}

// =============================================================================
// handler + image policy
// =============================================================================

#[tokio::test]
async fn post_page_sets_image_policy_header() {
    let response = post_page(Path("abc".to_owned())).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let csp = response
        .headers()
        .get(CONTENT_SECURITY_POLICY)
        .expect("csp header")
        .to_str()
        .unwrap();
    for host in IMAGE_HOSTS {
        assert!(csp.contains(host), "missing host {host}");
    }
}

#[test]
fn image_policy_allows_both_buckets() {
    let policy = image_policy();
    assert!(policy.starts_with("img-src 'self'"));
    assert!(policy.contains("https://membergate-media.s3.amazonaws.com"));
    assert!(policy.contains("https://membergate-media-staging.s3.amazonaws.com"));
}

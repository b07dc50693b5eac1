//! Content pages — server-rendered post view.

use axum::extract::Path;
use axum::http::header::CONTENT_SECURITY_POLICY;
use axum::response::{Html, IntoResponse, Response};

/// Object-storage hosts allowed to serve public post images (production and
/// staging buckets).
pub(crate) const IMAGE_HOSTS: [&str; 2] = [
    "membergate-media.s3.amazonaws.com",
    "membergate-media-staging.s3.amazonaws.com",
];

/// `GET /post/{id}` — static layout echoing the post identifier.
///
/// No lookup, no not-found handling: any identifier renders.
pub async fn post_page(Path(id): Path<String>) -> Response {
    ([(CONTENT_SECURITY_POLICY, image_policy())], Html(render_post(&id))).into_response()
}

pub(crate) fn image_policy() -> String {
    format!("img-src 'self' https://{} https://{}", IMAGE_HOSTS[0], IMAGE_HOSTS[1])
}

pub(crate) fn render_post(id: &str) -> String {
    let escaped = escape_html(id);
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Post {escaped}</title>\n\
         </head>\n\
         <body>\n\
         <main class=\"post\">\n\
         <h1>Post {escaped}</h1>\n\
         <p>You are viewing post <strong>{escaped}</strong>.</p>\n\
         </main>\n\
         </body>\n\
         </html>\n"
    )
}

/// Minimal HTML escaping for text interpolated into the page body.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;

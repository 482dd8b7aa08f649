//! Printable document rendering.
//!
//! Maps each segment to a fixed HTML fragment and wraps the fragments in a
//! standalone document with a static stylesheet. All text is escaped; only
//! captured math markup is inserted verbatim.

use crate::result::{MathDisplay, Segment};
use crate::text::LINE_BREAK_SENTINEL;
use crate::Options;

/// Static stylesheet of the printable document.
const STYLESHEET: &str = r#"    * {
      box-sizing: border-box;
    }
    body {
      font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
      margin: 20px;
      line-height: 1.5;
      color: #000;
      background: #fff;
    }

    .doc-title {
      font-size: 24px;
      margin: 0 0 4px 0;
    }

    .meta {
      font-size: 12px;
      color: #555;
      margin-bottom: 16px;
      word-break: break-all;
    }

    .article-heading {
      font-size: 20px;
      margin: 18px 0 8px 0;
      font-weight: 600;
      border-bottom: 1px solid #ddd;
      padding-bottom: 4px;
    }

    .article-text {
      margin: 0 0 10px 0;
      font-size: 13px;
    }

    .code-block {
      margin: 12px 0 16px 0;
      border-radius: 8px;
      background: #f7f9f9;
      border: 1px solid #e1e4e8;
      overflow: hidden;
    }
    .code-block-header {
      display: flex;
      align-items: center;
      justify-content: flex-start;
      padding: 6px 10px;
      border-bottom: 1px solid #e1e4e8;
      background: #f0f3f6;
    }
    .code-lang {
      font-size: 11px;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.04em;
      padding: 2px 6px;
      border-radius: 999px;
      border: 1px solid #cbd2da;
      background: #ffffff;
    }
    .code-block-body {
      margin: 0;
      padding: 10px 12px;
      white-space: pre-wrap;
      word-wrap: break-word;
      font-family: "SF Mono", Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace;
      font-size: 13px;
      background: #f7f9f9;
    }

    .math-block-display {
      margin: 10px 0 14px 0;
    }

    .article-image-box {
      margin: 8px 0 12px 0;
      border: 1px solid #ccc;
      border-radius: 6px;
      padding: 6px;
      background: #fafafa;
    }
    .article-image-box img {
      max-width: 100%;
      height: auto;
      display: block;
      border-radius: 4px;
    }
    .article-image-box figcaption {
      font-size: 11px;
      color: #555;
      margin-top: 4px;
    }

    .tweet-separator {
      margin: 20px 0;
      border: none;
      border-top: 1px dashed #ccc;
    }

    @page {
      margin: 15mm;
    }
    @media print {
      body {
        margin: 0;
      }
      a {
        text-decoration: none;
        color: inherit;
      }
    }"#;

/// Script that opens the print dialog once the document has loaded.
const PRINT_SCRIPT: &str = r#"  <script>
    window.onload = function () {
      window.print();
    };
  </script>"#;

/// Escape text for use in HTML content and double- or single-quoted
/// attribute values.
///
/// ```
/// use article_print::render::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">'&'</a>"#),
///            "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render one segment as an HTML fragment.
#[must_use]
pub fn render_segment(segment: &Segment) -> String {
    match segment {
        Segment::Heading { text, .. } => {
            format!(r#"<h2 class="article-heading">{}</h2>"#, escape_html(text))
        }
        Segment::Text { text } => {
            let text = text.replace(LINE_BREAK_SENTINEL, "\n");
            let html = escape_html(&text).replace('\n', "<br>");
            format!(r#"<p class="article-text">{html}</p>"#)
        }
        Segment::Code { language, text } => {
            let label = if language.is_empty() {
                "code".to_string()
            } else {
                escape_html(language)
            };
            format!(
                r#"
<div class="code-block">
  <div class="code-block-header">
    <span class="code-lang">{label}</span>
  </div>
  <pre class="code-block-body"><code>{}</code></pre>
</div>"#,
                escape_html(text)
            )
        }
        Segment::MathMarkup { html, display } => match display {
            MathDisplay::Block => format!(r#"<div class="math-block-display">{html}</div>"#),
            MathDisplay::Inline => format!(r#"<span class="math-block-inline">{html}</span>"#),
        },
        Segment::Image { src, alt } => {
            let alt = escape_html(alt);
            let caption = if alt.is_empty() {
                String::new()
            } else {
                format!("<figcaption>{alt}</figcaption>")
            };
            format!(
                r#"
<figure class="article-image-box">
  <img src="{}" alt="{alt}">
  {caption}
</figure>"#,
                escape_html(src)
            )
        }
        Segment::Separator => r#"<hr class="tweet-separator" />"#.to_string(),
    }
}

/// Render a complete printable document.
#[must_use]
pub fn render_document(title: &str, source_url: &str, segments: &[Segment], opts: &Options) -> String {
    let body = segments
        .iter()
        .map(render_segment)
        .collect::<Vec<_>>()
        .join("\n");
    let title = escape_html(title);
    let source_url = escape_html(source_url);
    let stylesheet = escape_html(&opts.stylesheet_href);
    let print_script = if opts.auto_print { PRINT_SCRIPT } else { "" };

    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <link rel="stylesheet" href="{stylesheet}">
  <style>
{STYLESHEET}
  </style>
</head>
<body>
  <h1 class="doc-title">{title}</h1>
  <div class="meta">
    Source: <a href="{source_url}">{source_url}</a>
  </div>
  {body}
{print_script}
</body>
</html>"#
    )
}

//! Server-rendered summary page for `GET /movies/summary`.
//!
//! Pure string templating: one card per movie with poster, title and
//! overview. Every interpolated value is HTML-escaped.

use crate::types::SummaryMovie;

const STYLE: &str = r"
        body {
            font-family: Arial, Helvetica, sans-serif;
            background: #f5f5f5;
            padding: 40px;
            color: #333;
        }
        h1 {
            text-align: center;
            margin-bottom: 30px;
        }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
            gap: 20px;
            padding: 20px;
        }
        .card {
            background: white;
            padding: 15px;
            border-radius: 12px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.1);
        }
        .poster {
            width: 100%;
            border-radius: 10px;
        }
        .title {
            font-weight: bold;
            font-size: 1.1rem;
            margin-top: 10px;
        }
        .overview {
            font-size: 0.9rem;
            margin-top: 8px;
        }
";

/// Render the full summary page.
///
/// `image_base_url` is prefixed to each non-empty `poster_path`; movies
/// without one get a card with no image.
#[must_use]
pub fn summary_page(movies: &[SummaryMovie], image_base_url: &str) -> String {
    let mut html = String::with_capacity(2048 + movies.len() * 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"utf-8\">\n    <title>Popular Movies</title>\n");
    html.push_str("    <style>");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    html.push_str("    <h1>Popular Movies</h1>\n\n    <div class=\"grid\">\n");

    for movie in movies {
        html.push_str(&movie_card(movie, image_base_url));
    }

    html.push_str("    </div>\n</body>\n</html>\n");
    html
}

fn movie_card(movie: &SummaryMovie, image_base_url: &str) -> String {
    let poster = match movie.poster_path.as_deref() {
        Some(path) if !path.is_empty() => format!(
            "            <img src=\"{}\" class=\"poster\">\n",
            escape_html(&format!("{image_base_url}{path}"))
        ),
        _ => String::new(),
    };

    format!(
        "        <div class=\"card\">\n{poster}            <div class=\"title\">{}</div>\n            <div class=\"overview\">{}</div>\n        </div>\n",
        escape_html(movie.title.as_deref().unwrap_or_default()),
        escape_html(movie.overview.as_deref().unwrap_or_default()),
    )
}

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

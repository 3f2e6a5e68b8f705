// src/handlers/ui.rs
use axum::{
    extract::{Extension, Query},
    http::HeaderMap,
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{PresentationHistoryEntry, SearchQuery};
use crate::AppState;

pub fn ui_routes() -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/search", get(search_page))
}

/// GET / - generator form and full history
pub async fn index_page(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let entries = state.presentations.history_entries(None).await?;
    Ok(render(&headers, &entries, ""))
}

/// GET /search?query= - history filtered by title
pub async fn search_page(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let filter = params.filter();
    let entries = state.presentations.history_entries(filter).await?;
    tracing::debug!(query = ?filter, results = entries.len(), "history search");
    Ok(render(&headers, &entries, filter.unwrap_or("")))
}

/// AJAX requests only get the history fragment.
fn is_ajax(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
        .unwrap_or(false)
}

fn render(headers: &HeaderMap, entries: &[PresentationHistoryEntry], query: &str) -> Html<String> {
    let fragment = history_fragment(entries);
    if is_ajax(headers) {
        Html(fragment)
    } else {
        Html(full_page(&fragment, query))
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn history_fragment(entries: &[PresentationHistoryEntry]) -> String {
    if entries.is_empty() {
        return r#"<ul id="history-list" class="history"><li class="empty">No presentations yet.</li></ul>"#.to_string();
    }

    let mut html = String::from(r#"<ul id="history-list" class="history">"#);
    for entry in entries {
        html.push_str(&format!(
            r#"<li class="history-item"><a href="{link}" download>{title}</a><span class="created">{created}</span></li>"#,
            link = escape_html(&entry.download_link),
            title = escape_html(&entry.title),
            created = entry.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        ));
    }
    html.push_str("</ul>");
    html
}

/// Page shell; the two markers are filled in by [`full_page`].
const PAGE_TEMPLATE: &str = r###"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Slide Forge - AI Presentation Generator</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            line-height: 1.6;
            color: #e8e8e8;
            background: linear-gradient(135deg, #1a1a2e 0%, #16213e 50%, #0f1419 100%);
            min-height: 100vh;
        }

        .container {
            max-width: 900px;
            margin: 0 auto;
            padding: 2rem 20px;
        }

        h1 {
            font-size: 2.5rem;
            color: white;
            font-weight: 800;
            text-align: center;
            margin-bottom: 2rem;
        }

        .card {
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(59, 130, 246, 0.3);
            border-radius: 12px;
            padding: 1.5rem;
            margin-bottom: 2rem;
        }

        input[type="text"] {
            width: 100%;
            padding: 0.75rem 1rem;
            border-radius: 8px;
            border: 1px solid rgba(59, 130, 246, 0.3);
            background: rgba(30, 30, 52, 0.8);
            color: #e8e8e8;
            margin-bottom: 1rem;
        }

        .btn {
            padding: 0.75rem 1.5rem;
            border: none;
            border-radius: 8px;
            font-weight: 600;
            cursor: pointer;
            background: linear-gradient(135deg, #3b82f6, #1d4ed8);
            color: white;
        }

        .btn:disabled {
            opacity: 0.6;
            cursor: wait;
        }

        #status {
            margin-top: 1rem;
            min-height: 1.5rem;
        }

        #status a {
            color: #93c5fd;
        }

        .history {
            list-style: none;
        }

        .history-item {
            display: flex;
            justify-content: space-between;
            padding: 0.5rem 0;
            border-bottom: 1px solid rgba(255, 255, 255, 0.08);
        }

        .history-item a {
            color: #93c5fd;
            text-decoration: none;
        }

        .created {
            color: rgba(255, 255, 255, 0.5);
            font-size: 0.9rem;
        }

        .empty {
            color: rgba(255, 255, 255, 0.5);
        }

        .error {
            color: #f87171;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>AI Presentation Generator</h1>

        <div class="card">
            <form id="generate-form">
                <input type="text" id="title" name="title" placeholder="Presentation topic" required>
                <button class="btn" type="submit" id="generate-btn">Generate</button>
            </form>
            <div id="status"></div>
        </div>

        <div class="card">
            <input type="text" id="search" name="query" placeholder="Search history" value="QUERY_PLACEHOLDER">
            <div id="history">HISTORY_PLACEHOLDER</div>
        </div>
    </div>

    <script>
        const statusEl = document.getElementById('status');
        const historyEl = document.getElementById('history');

        async function refreshHistory(query) {
            const url = query ? '/search?query=' + encodeURIComponent(query) : '/';
            const response = await fetch(url, { headers: { 'X-Requested-With': 'XMLHttpRequest' } });
            if (response.ok) {
                historyEl.innerHTML = await response.text();
            }
        }

        document.getElementById('generate-form').addEventListener('submit', async (event) => {
            event.preventDefault();
            const button = document.getElementById('generate-btn');
            const title = document.getElementById('title').value.trim();
            button.disabled = true;
            statusEl.textContent = 'Generating presentation...';
            statusEl.className = '';

            try {
                const response = await fetch('/generate', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ title })
                });
                const data = await response.json();
                if (response.ok) {
                    statusEl.textContent = data.message + ' ';
                    const link = document.createElement('a');
                    link.href = data.download_link;
                    link.textContent = 'Download';
                    statusEl.appendChild(link);
                    refreshHistory(document.getElementById('search').value.trim());
                } else {
                    statusEl.textContent = data.error || 'Generation failed';
                    statusEl.className = 'error';
                }
            } catch (err) {
                statusEl.textContent = 'Request failed: ' + err;
                statusEl.className = 'error';
            } finally {
                button.disabled = false;
            }
        });

        let searchTimer = null;
        document.getElementById('search').addEventListener('input', (event) => {
            clearTimeout(searchTimer);
            const query = event.target.value.trim();
            searchTimer = setTimeout(() => refreshHistory(query), 250);
        });
    </script>
</body>
</html>
"###;

/// Splits the shell at its markers so user text is never searched for them.
fn full_page(fragment: &str, query: &str) -> String {
    let (head, rest) = PAGE_TEMPLATE
        .split_once("QUERY_PLACEHOLDER")
        .unwrap_or((PAGE_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("HISTORY_PLACEHOLDER").unwrap_or((rest, ""));

    let query = escape_html(query);
    let mut html = String::with_capacity(PAGE_TEMPLATE.len() + query.len() + fragment.len());
    html.push_str(head);
    html.push_str(&query);
    html.push_str(middle);
    html.push_str(fragment);
    html.push_str(tail);
    html
}

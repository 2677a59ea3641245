//! Result formatting: raw catalog pages become the user-facing reply.

use reelquery_model::{
    CatalogItem, CatalogPage, ChatReply, Intent, MediaType, QueryKind,
};

/// Fallback when the classifier did not author a success message.
pub const RESULTS_FALLBACK_MESSAGE: &str = "Here are your results:";

/// Reply for a successful query that matched nothing.
pub const NO_RESULTS_MESSAGE: &str =
    "No results found. Try a different genre, category, or search term.";

/// Fallback when a rejection carries no explanation.
pub const REJECTION_FALLBACK_MESSAGE: &str = "Sorry, I couldn't understand \
     your request. Try asking for popular movies or top-rated TV shows.";

/// Whether this intent hits the combined search resource, whose results mix
/// movies, TV shows, and people.
fn is_multi_search(intent: &Intent) -> bool {
    matches!(intent.kind, QueryKind::Search { .. })
        && intent.media_type == MediaType::Both
}

fn render(item: &CatalogItem, intent: &Intent, multi: bool) -> String {
    // Movies carry `title`, TV shows carry `name`. On the combined search
    // the item tags itself; otherwise the intent decides, with `both`
    // reading TV-style.
    let tv_like = if multi {
        item.media_type.as_deref() == Some("tv")
    } else {
        matches!(intent.media_type, MediaType::Tv | MediaType::Both)
    };

    let display = if tv_like {
        item.name.as_deref().or(item.title.as_deref())
    } else {
        item.title.as_deref().or(item.name.as_deref())
    }
    .unwrap_or("Untitled");

    format!("{} (★ {:.1})", display, item.vote_average.unwrap_or(0.0))
}

/// Render one catalog page for a validated intent.
///
/// Pure and idempotent: filtering, truncation, and rendering read only the
/// page and the intent. Upstream ordering is preserved. An empty page is a
/// success, not a failure.
pub fn format(page: &CatalogPage, intent: &Intent) -> ChatReply {
    let multi = is_multi_search(intent);

    let results: Vec<String> = page
        .results
        .iter()
        .filter(|item| {
            // People (and any future media kinds) never show up as results.
            !multi
                || matches!(item.media_type.as_deref(), Some("movie" | "tv"))
        })
        .take(intent.count)
        .map(|item| render(item, intent, multi))
        .collect();

    if results.is_empty() {
        return ChatReply {
            success: true,
            message: NO_RESULTS_MESSAGE.to_owned(),
            results: Some(vec![]),
            count: Some(0),
        };
    }

    let count = results.len();
    ChatReply {
        success: true,
        message: intent
            .message
            .clone()
            .unwrap_or_else(|| RESULTS_FALLBACK_MESSAGE.to_owned()),
        results: Some(results),
        count: Some(count),
    }
}

/// Reply for a classifier rejection. Not an error: HTTP-wise this is still
/// a well-formed 200 response, just with `success=false` and no results.
pub fn rejection(message: Option<String>) -> ChatReply {
    ChatReply {
        success: false,
        message: message
            .unwrap_or_else(|| REJECTION_FALLBACK_MESSAGE.to_owned()),
        results: None,
        count: None,
    }
}

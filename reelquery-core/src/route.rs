//! Intent routing: one validated intent maps to exactly one catalog request.
//!
//! Listing modes resolve through a declarative path-template table rather
//! than a branch per mode; adding a listing category is a table edit.

use reelquery_model::{CatalogRequest, Intent, ListingMode, QueryKind};

/// Sort order always applied to discover queries.
pub const DISCOVER_SORT: &str = "popularity.desc";

/// Slot in a path template replaced with the intent's media segment.
const MEDIA_SLOT: &str = "{media}";

struct ListingRoute {
    mode: ListingMode,
    path: &'static str,
}

/// Listing endpoints, first match wins. Paths without a `{media}` slot are
/// fixed to one sub-resource upstream.
const LISTING_ROUTES: &[ListingRoute] = &[
    ListingRoute {
        mode: ListingMode::Popular,
        path: "/{media}/popular",
    },
    ListingRoute {
        mode: ListingMode::TopRated,
        path: "/{media}/top_rated",
    },
    ListingRoute {
        mode: ListingMode::Trending,
        path: "/trending/{media}/week",
    },
    ListingRoute {
        mode: ListingMode::NowPlaying,
        path: "/movie/now_playing",
    },
    ListingRoute {
        mode: ListingMode::Upcoming,
        path: "/movie/upcoming",
    },
    ListingRoute {
        mode: ListingMode::AiringToday,
        path: "/tv/airing_today",
    },
    ListingRoute {
        mode: ListingMode::OnTheAir,
        path: "/tv/on_the_air",
    },
];

/// Build the single catalog request for a validated intent.
///
/// Pure: the same intent always produces the same request. Optional fields
/// only ever appear as parameters when present and non-blank.
pub fn route(intent: &Intent) -> CatalogRequest {
    match &intent.kind {
        QueryKind::Search { query } => {
            let mut req = CatalogRequest::new(format!(
                "/{}/search",
                intent.media_type.search_segment()
            ));
            req.push("query", query.clone());
            // genre/region are ignored for searches by convention.
            req
        }
        QueryKind::Listing(mode) => {
            match LISTING_ROUTES.iter().find(|r| r.mode == *mode) {
                Some(listing) => {
                    let mut req = CatalogRequest::new(listing.path.replace(
                        MEDIA_SLOT,
                        intent.media_type.segment(),
                    ));
                    req.push_opt("region", intent.region.as_deref());
                    req
                }
                // Unrouted modes share the permissive discover default.
                None => discover(intent, None),
            }
        }
        QueryKind::Discover { genre } => discover(intent, genre.as_deref()),
    }
}

fn discover(intent: &Intent, genre: Option<&str>) -> CatalogRequest {
    let mut req = CatalogRequest::new(format!(
        "/discover/{}",
        intent.media_type.segment()
    ));
    req.push_opt("with_genres", genre);
    req.push("sort_by", DISCOVER_SORT);
    req.push_opt("region", intent.region.as_deref());
    req
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelquery_model::{MediaType, DEFAULT_RESULT_COUNT};

    fn intent(media_type: MediaType, kind: QueryKind) -> Intent {
        Intent {
            media_type,
            kind,
            region: None,
            count: DEFAULT_RESULT_COUNT,
            message: None,
        }
    }

    fn params(req: &CatalogRequest) -> Vec<(&'static str, &str)> {
        req.parameters
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect()
    }

    #[test]
    fn discover_with_genre_builds_sparse_request() {
        let it = intent(
            MediaType::Movie,
            QueryKind::Discover {
                genre: Some("28".into()),
            },
        );
        let req = route(&it);
        assert_eq!(req.endpoint, "/discover/movie");
        assert_eq!(
            params(&req),
            vec![("with_genres", "28"), ("sort_by", DISCOVER_SORT)]
        );
    }

    #[test]
    fn discover_without_genre_only_sorts() {
        let it = intent(MediaType::Tv, QueryKind::Discover { genre: None });
        let req = route(&it);
        assert_eq!(req.endpoint, "/discover/tv");
        assert_eq!(params(&req), vec![("sort_by", DISCOVER_SORT)]);
    }

    #[test]
    fn listing_paths_follow_the_table() {
        let cases = [
            (ListingMode::Popular, MediaType::Movie, "/movie/popular"),
            (ListingMode::TopRated, MediaType::Tv, "/tv/top_rated"),
            (ListingMode::Trending, MediaType::Tv, "/trending/tv/week"),
            (ListingMode::NowPlaying, MediaType::Movie, "/movie/now_playing"),
            (ListingMode::Upcoming, MediaType::Movie, "/movie/upcoming"),
            (ListingMode::AiringToday, MediaType::Tv, "/tv/airing_today"),
            (ListingMode::OnTheAir, MediaType::Tv, "/tv/on_the_air"),
        ];
        for (mode, media, expected) in cases {
            let req = route(&intent(media, QueryKind::Listing(mode)));
            assert_eq!(req.endpoint, expected);
            assert!(req.parameters.is_empty());
        }
    }

    #[test]
    fn region_is_forwarded_only_when_present() {
        let mut it =
            intent(MediaType::Movie, QueryKind::Listing(ListingMode::Popular));
        it.region = Some("US".into());
        assert_eq!(params(&route(&it)), vec![("region", "US")]);

        it.region = None;
        assert!(route(&it).parameters.is_empty());
    }

    #[test]
    fn search_chooses_resource_by_media_type() {
        let cases = [
            (MediaType::Movie, "/movie/search"),
            (MediaType::Tv, "/tv/search"),
            (MediaType::Both, "/multi/search"),
        ];
        for (media, expected) in cases {
            let req = route(&intent(
                media,
                QueryKind::Search {
                    query: "matrix".into(),
                },
            ));
            assert_eq!(req.endpoint, expected);
            assert_eq!(params(&req), vec![("query", "matrix")]);
        }
    }

    #[test]
    fn search_ignores_region() {
        let mut it = intent(
            MediaType::Both,
            QueryKind::Search {
                query: "matrix".into(),
            },
        );
        it.region = Some("US".into());
        let req = route(&it);
        assert_eq!(params(&req), vec![("query", "matrix")]);
    }

    #[test]
    fn routing_is_deterministic() {
        let it = intent(
            MediaType::Movie,
            QueryKind::Discover {
                genre: Some("878".into()),
            },
        );
        assert_eq!(route(&it), route(&it));
    }
}

//! Classified query intents.
//!
//! The classifier hands back a flat JSON record ([`IntentRecord`]); this
//! module validates it into the tagged [`Intent`] value the router and
//! formatter consume. Validation happens exactly once per chat turn and the
//! resulting intent is never mutated afterwards.

use serde::Deserialize;

/// Result-list truncation limit applied when the classifier omits a count
/// or produces a non-positive one.
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Which catalog sub-resource a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    Tv,
    /// Movies and TV shows together; only search maps this onto a distinct
    /// upstream resource (`multi`).
    Both,
}

impl MediaType {
    /// Wire segment interpolated into listing and discover paths.
    pub fn segment(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
            MediaType::Both => "both",
        }
    }

    /// Segment used for search endpoints, where `both` becomes the combined
    /// `multi` search.
    pub fn search_segment(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
            MediaType::Both => "multi",
        }
    }
}

/// Fixed-shape listing categories: one upstream endpoint each, no
/// mode-specific parameters beyond the optional region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    Popular,
    TopRated,
    Trending,
    NowPlaying,
    Upcoming,
    AiringToday,
    OnTheAir,
}

/// The shape of a validated query, tagged by sort mode.
///
/// Replaces the stringly `sort` field of the wire record: each variant
/// carries exactly the fields its endpoint needs, so a routed intent can
/// never be missing its search term or carry a genre nothing reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    Listing(ListingMode),
    Search { query: String },
    /// Filtered discovery. Also the permissive fallback for any sort value
    /// the record carries that we do not recognize.
    Discover { genre: Option<String> },
}

/// A validated, immutable query intent for one chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub media_type: MediaType,
    pub kind: QueryKind,
    /// ISO region code, forwarded as a filter for non-search modes.
    pub region: Option<String>,
    pub count: usize,
    /// Classifier-authored message describing the results.
    pub message: Option<String>,
}

/// Outcome of classifying one piece of user text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Intent(Intent),
    /// The classifier understood the text but declined it (not about
    /// movies/TV). Carries only the human-readable explanation.
    Rejection { message: Option<String> },
}

/// The classifier's flat wire record, exactly as the model emits it.
///
/// Every field defaults so a sparse or sloppy record still deserializes;
/// trust decisions belong to [`IntentRecord::classify`], not serde.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IntentRecord {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub sort: Option<String>,
    pub query: Option<String>,
    pub genre: Option<String>,
    pub region: Option<String>,
    pub count: Option<i64>,
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub message: Option<String>,
}

/// A wire record that cannot be turned into a usable intent.
///
/// Distinct from a rejection: a rejection is the classifier saying "no",
/// these are the classifier violating its own output contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    #[error("record is missing a media type")]
    MissingMediaType,

    #[error("unsupported media type `{0}`")]
    UnknownMediaType(String),

    #[error("search record carries no search term")]
    EmptySearchQuery,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl IntentRecord {
    /// Validate this record into a [`Classification`].
    ///
    /// An invalid record (`isValid=false`) short-circuits to a rejection and
    /// no other field is trusted. Unrecognized sort values fall through to
    /// discover rather than erroring; a search record without a non-blank
    /// query is the one contract violation that fails outright.
    pub fn classify(self) -> Result<Classification, IntentError> {
        if !self.is_valid {
            return Ok(Classification::Rejection {
                message: non_blank(self.message),
            });
        }

        let media_type = match non_blank(self.media_type) {
            None => return Err(IntentError::MissingMediaType),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "movie" => MediaType::Movie,
                "tv" => MediaType::Tv,
                "both" => MediaType::Both,
                _ => return Err(IntentError::UnknownMediaType(raw)),
            },
        };

        let sort = non_blank(self.sort).map(|s| s.to_ascii_lowercase());
        let kind = match sort.as_deref() {
            Some("popular") => QueryKind::Listing(ListingMode::Popular),
            Some("top_rated") => QueryKind::Listing(ListingMode::TopRated),
            Some("trending") => QueryKind::Listing(ListingMode::Trending),
            Some("now_playing") => QueryKind::Listing(ListingMode::NowPlaying),
            Some("upcoming") => QueryKind::Listing(ListingMode::Upcoming),
            Some("airing_today") => {
                QueryKind::Listing(ListingMode::AiringToday)
            }
            Some("on_the_air") => QueryKind::Listing(ListingMode::OnTheAir),
            Some("search") => QueryKind::Search {
                query: non_blank(self.query)
                    .ok_or(IntentError::EmptySearchQuery)?,
            },
            // "discover", absent, and anything unrecognized all land here.
            _ => QueryKind::Discover {
                genre: non_blank(self.genre),
            },
        };

        Ok(Classification::Intent(Intent {
            media_type,
            kind,
            region: non_blank(self.region),
            count: match self.count {
                Some(n) if n > 0 => n as usize,
                _ => DEFAULT_RESULT_COUNT,
            },
            message: non_blank(self.message),
        }))
    }
}

//! OpenAI-backed intent classifier.
//!
//! One chat-completions call per request: a fixed system prompt pins the
//! output schema, the routing rules, and the genre taxonomies; the user's
//! text goes in verbatim. The model's reply is parsed as the flat intent
//! record and validated into a [`Classification`].

use std::time::Duration;

use async_trait::async_trait;
use reelquery_model::{Classification, IntentRecord};
use serde::{Deserialize, Serialize};

use super::IntentClassifier;
use crate::error::CoreError;

/// Default chat-completions API root.
pub const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com/v1";

/// Default classification model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SYSTEM_PROMPT: &str = r#"Convert the user's message into STRICT JSON following this schema.
Output ONLY JSON.

Schema:
{
  "type": "movie | tv | both",
  "sort": "popular | top_rated | trending | now_playing | upcoming | airing_today | on_the_air | discover | search",
  "query": "Used only in search sorts to search for specific strings that the user types",
  "genre": "TMDB genre ID or null",
  "region": "ISO region code or null",
  "count": number,
  "isValid": boolean,
  "message": "A friendly response message describing what you're showing"
}

IMPORTANT RULES:
1. If the user mentions a genre (action, comedy, horror, sci-fi, drama, etc.), set sort="discover" and include the genre ID
2. If the user wants filtering by genre AND another category (e.g. "popular action movies"), use sort="discover"
3. Count defaults to 10 if not specified
4. If the request doesn't make sense or isn't about movies/TV, set isValid=false
5. Generate a natural, friendly message that describes what results you're showing (e.g. "Here are the most popular action movies")
6. "query" is ONLY for search requests, otherwise it is null

For SEARCH requests (when the user wants to find specific titles):
  - Set sort="search"
  - Set type="movie" if they specifically say "movies"
  - Set type="tv" if they specifically say "shows", "series", or "TV"
  - Set type="both" if neither is specified or both could apply
  - Extract the search term into the "query" field
  - genre and region must be null for searches

MOVIE GENRE IDs:
Action=28, Adventure=12, Animation=16, Comedy=35, Crime=80, Documentary=99, Drama=18,
Family=10751, Fantasy=14, History=36, Horror=27, Music=10402, Mystery=9648, Romance=10749,
Science Fiction=878, TV Movie=10770, Thriller=53, War=10752, Western=37

TV SHOW GENRE IDs:
Action & Adventure=10759, Animation=16, Comedy=35, Crime=80, Documentary=99, Drama=18,
Family=10751, Kids=10762, Mystery=9648, News=10763, Reality=10764, Sci-Fi & Fantasy=10765,
Soap=10766, Talk=10767, War & Politics=10768, Western=37

Examples:
- "show me action movies" -> {"type":"movie","sort":"discover","query":null,"genre":"28","region":null,"count":10,"isValid":true,"message":"Here are the top action movies for you:"}
- "top rated movies" -> {"type":"movie","sort":"top_rated","query":null,"genre":null,"region":null,"count":10,"isValid":true,"message":"Here are the top-rated movies:"}
- "trending sci-fi shows" -> {"type":"tv","sort":"discover","query":null,"genre":"10765","region":null,"count":10,"isValid":true,"message":"Here are the trending sci-fi & fantasy shows:"}
- "top 5 horror movies" -> {"type":"movie","sort":"discover","query":null,"genre":"27","region":null,"count":5,"isValid":true,"message":"Here are 5 terrifying horror movies:"}
- "what's the weather" -> {"type":"movie","sort":"popular","query":null,"genre":null,"region":null,"count":10,"isValid":false,"message":"Sorry, I can only help with movies and TV shows."}
- "find the matrix" -> {"type":"both","sort":"search","query":"matrix","genre":null,"region":null,"count":10,"isValid":true,"message":"I searched for 'matrix' in movies and shows:"}
- "show me star wars shows" -> {"type":"tv","sort":"search","query":"star wars","genre":null,"region":null,"count":10,"isValid":true,"message":"Here are Star Wars shows:"}
"#;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Classifier backed by the OpenAI chat-completions API.
pub struct OpenAiClassifier {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OpenAiClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClassifier")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiClassifier {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
    ) -> Result<Self, CoreError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(CoreError::HttpClient)?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model,
        })
    }
}

/// Strip an optional markdown code fence from the model's reply.
///
/// Models occasionally wrap the JSON in ```json fences despite the prompt;
/// the payload inside is still the record we asked for.
fn extract_json(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_end_matches('`').trim()
}

#[async_trait]
impl IntentClassifier for OpenAiClassifier {
    async fn classify(
        &self,
        text: &str,
    ) -> Result<Classification, CoreError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let completion: ChatCompletion = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(CoreError::ClassifierUnavailable)?
            .error_for_status()
            .map_err(CoreError::ClassifierUnavailable)?
            .json()
            .await
            .map_err(CoreError::ClassifierUnavailable)?;

        let content = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| {
                CoreError::ClassifierOutput(
                    "completion carried no message content".to_owned(),
                )
            })?;

        tracing::debug!(raw = %content, "classifier output");

        let record: IntentRecord =
            serde_json::from_str(extract_json(content)).map_err(|err| {
                CoreError::ClassifierOutput(format!(
                    "content is not an intent record: {err}"
                ))
            })?;

        record
            .classify()
            .map_err(|err| CoreError::ClassifierOutput(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_passes_plain_content_through() {
        assert_eq!(extract_json(r#"  {"isValid": false} "#), r#"{"isValid": false}"#);
    }

    #[test]
    fn extract_json_strips_fences() {
        let fenced = "```json\n{\"isValid\": true}\n```";
        assert_eq!(extract_json(fenced), "{\"isValid\": true}");

        let bare_fence = "```\n{\"isValid\": true}\n```";
        assert_eq!(extract_json(bare_fence), "{\"isValid\": true}");
    }

    #[test]
    fn completion_shape_deserializes() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant",
                    "content": "{\"isValid\": false}"}}
            ]
        }"#;
        let completion: ChatCompletion = serde_json::from_str(raw).unwrap();
        assert_eq!(
            completion.choices[0].message.content.as_deref(),
            Some("{\"isValid\": false}")
        );
    }
}

use serde::{Deserialize, Serialize};
use url::Url;

/// Runtime configuration handed to the frontend by the static host through
/// `GET /config.json`.
///
/// The frontend falls back to [`ClientConfig::default`] when the document
/// cannot be fetched, which targets the REST API on the same origin.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the universities REST API, e.g. `https://api.example.org`.
    /// Empty means same origin.
    #[serde(default)]
    pub api_base: String,
}

impl ClientConfig {
    /// Joins the API base with an absolute `path`, tolerating trailing slashes
    /// on the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    /// Endpoint of a single record under `collection`. The id is
    /// percent-encoded as one path segment, so `/`, `?` and `#` inside it
    /// never change the route.
    pub fn record_endpoint(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.endpoint(collection), encode_segment(id))
    }
}

fn encode_segment(segment: &str) -> String {
    let Ok(mut url) = Url::parse("http://segment.invalid/") else {
        return segment.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(segment);
    }
    url.path().trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoint_on_same_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("/universities"), "/universities");
    }

    #[test]
    fn endpoint_strips_trailing_slashes() {
        let config = ClientConfig {
            api_base: "https://api.example.org//".to_string(),
        };
        assert_eq!(
            config.endpoint("/universities/7"),
            "https://api.example.org/universities/7"
        );
    }

    #[test]
    fn record_endpoint_encodes_the_id_as_one_segment() {
        let config = ClientConfig::default();
        assert_eq!(config.record_endpoint("/universities", "42"), "/universities/42");
        assert_eq!(config.record_endpoint("/universities", "a/b"), "/universities/a%2Fb");
        assert_eq!(config.record_endpoint("/universities", "x?y"), "/universities/x%3Fy");
        assert_eq!(config.record_endpoint("/universities", "x#y"), "/universities/x%23y");
        assert_eq!(config.record_endpoint("/universities", "a b"), "/universities/a%20b");
    }

    #[test]
    fn missing_api_base_deserializes_to_default() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}

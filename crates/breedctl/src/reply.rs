//! Lookup replies and their text / JSON-lines rendering

use serde::Serialize;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `breed: sub1, sub2`
    Text,
    /// One JSON object per line
    Json,
}

/// Outcome of a single lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// Breed exists; `sub_breeds` may be empty
    Found {
        breed: String,
        sub_breeds: Vec<String>,
    },
    /// Lookup failed
    NotFound { breed: String, error: String },
}

impl Reply {
    pub fn render(&self, format: Format) -> serde_json::Result<String> {
        match format {
            Format::Json => serde_json::to_string(self),
            Format::Text => Ok(match self {
                Reply::Found { breed, sub_breeds } if sub_breeds.is_empty() => {
                    format!("{}: (no sub-breeds)", breed)
                }
                Reply::Found { breed, sub_breeds } => {
                    format!("{}: {}", breed, sub_breeds.join(", "))
                }
                Reply::NotFound { breed, error } => format!("{}: error: {}", breed, error),
            }),
        }
    }
}

/// Cache counters reported at the end of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReply {
    pub calls_made: u64,
    pub hits: u64,
    pub failures: u64,
    pub cached_breeds: usize,
    pub hit_ratio: f64,
}

impl StatsReply {
    pub fn render(&self, format: Format) -> serde_json::Result<String> {
        match format {
            Format::Json => serde_json::to_string(self),
            Format::Text => Ok(format!(
                "calls made: {}, cache hits: {}, failures: {}, cached breeds: {}, hit ratio: {:.2}",
                self.calls_made, self.hits, self.failures, self.cached_breeds, self.hit_ratio
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(breed: &str, subs: &[&str]) -> Reply {
        Reply::Found {
            breed: breed.to_string(),
            sub_breeds: subs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            found("hound", &["afghan", "basset"]).render(Format::Text).unwrap(),
            "hound: afghan, basset"
        );
        assert_eq!(
            found("pug", &[]).render(Format::Text).unwrap(),
            "pug: (no sub-breeds)"
        );

        let missing = Reply::NotFound {
            breed: "unicorn".to_string(),
            error: "Breed not found (main breed does not exist)".to_string(),
        };
        assert_eq!(
            missing.render(Format::Text).unwrap(),
            "unicorn: error: Breed not found (main breed does not exist)"
        );
    }

    #[test]
    fn test_render_json() {
        assert_eq!(
            found("hound", &["afghan"]).render(Format::Json).unwrap(),
            r#"{"breed":"hound","sub_breeds":["afghan"]}"#
        );

        let missing = Reply::NotFound {
            breed: "unicorn".to_string(),
            error: "nope".to_string(),
        };
        assert_eq!(
            missing.render(Format::Json).unwrap(),
            r#"{"breed":"unicorn","error":"nope"}"#
        );
    }

    #[test]
    fn test_render_stats() {
        let stats = StatsReply {
            calls_made: 3,
            hits: 1,
            failures: 1,
            cached_breeds: 2,
            hit_ratio: 0.25,
        };

        assert_eq!(
            stats.render(Format::Text).unwrap(),
            "calls made: 3, cache hits: 1, failures: 1, cached breeds: 2, hit ratio: 0.25"
        );

        let json: serde_json::Value =
            serde_json::from_str(&stats.render(Format::Json).unwrap()).unwrap();
        assert_eq!(json["calls_made"], 3);
        assert_eq!(json["cached_breeds"], 2);
    }
}

//! Named pattern rules applied to the view page and the metadata document.
//!
//! Every rule is independent so a page that breaks one pattern does not take
//! the others down with it.

use regex::{Captures, Regex};
use std::sync::LazyLock;

pub struct Rule {
    name: &'static str,
    regex: Regex,
}

impl Rule {
    fn new(name: &'static str, pattern: &str) -> Self {
        let regex = Regex::new(pattern).expect("extraction rule pattern must compile");
        Self { name, regex }
    }

    fn meta(name: &'static str) -> Self {
        Self::new(
            name,
            &format!(r#"<meta name="{}" content="([^"]*)"\s*/>"#, name),
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        let captures = self.regex.captures(text);
        if captures.is_none() {
            tracing::debug!("Rule '{}' did not match", self.name);
        }
        captures
    }

    /// First capture group of the first match.
    pub fn first(&self, text: &str) -> Option<String> {
        self.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// `xhr: ...('/<name>/video/1/smil.xml')` embedded in the view page script.
pub static XHR_REQUEST_PATH: LazyLock<Rule> =
    LazyLock::new(|| Rule::new("xhr_request_path", r"xhr: .+\('(.+)'\)"));

/// ext, streamer and src on one `<video>` element, in that order.
pub static STREAMING_SOURCE: LazyLock<Rule> = LazyLock::new(|| {
    Rule::new(
        "streaming_source",
        r#"\s*<video.*\sext="([^"]+)".*\sstreamer="(rtmp://[^"]+)"\ssrc="([^"]+)"/>"#,
    )
});

pub static META_TITLE: LazyLock<Rule> = LazyLock::new(|| Rule::meta("title"));
pub static META_PART: LazyLock<Rule> = LazyLock::new(|| Rule::meta("part"));
pub static META_DATE: LazyLock<Rule> = LazyLock::new(|| Rule::meta("date"));
pub static META_TYPE: LazyLock<Rule> = LazyLock::new(|| Rule::meta("type"));

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: &str = include_str!("../../tests/resource/fixture_view.html");
    const META: &str = include_str!("../../tests/resource/fixture_meta.html");

    #[test]
    fn test_xhr_request_path() {
        assert_eq!(
            XHR_REQUEST_PATH.first(VIEW).as_deref(),
            Some("/icml09_leskovec_msain/video/1/smil.xml")
        );
        assert_eq!(XHR_REQUEST_PATH.first(META), None);
    }

    #[test]
    fn test_streaming_source_groups() {
        let captures = STREAMING_SOURCE.captures(META).expect("fixture has a stream");
        assert_eq!(&captures[1], "flv");
        assert_eq!(&captures[2], "rtmp://hydro2.videolectures.net/vod");
        assert_eq!(
            &captures[3],
            "flv:v005/a8/vctm755bsql5ualqwsqxvpcsdfbes3bt.flv"
        );
    }

    #[test]
    fn test_streaming_source_requires_rtmp_streamer() {
        let body = r#"<video ext="mp4" streamer="http://example.com/vod" src="a.mp4"/>"#;
        assert!(STREAMING_SOURCE.captures(body).is_none());
    }

    #[test]
    fn test_meta_rules_are_independent() {
        let body = r#"<meta name="date" content="June 14, 2009" />"#;
        assert_eq!(META_DATE.first(body).as_deref(), Some("June 14, 2009"));
        assert_eq!(META_TITLE.first(body), None);
        assert_eq!(META_PART.first(body), None);
        assert_eq!(META_TYPE.first(body), None);
        assert_eq!(META_TYPE.name(), "type");
    }
}

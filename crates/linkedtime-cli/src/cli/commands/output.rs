//! Rendering of results for the terminal.

use anyhow::Result;
use linkedtime_core::config::OutputFormat;
use linkedtime_core::PostTime;

/// Text is two labeled lines; JSON is `{"utc_time": .., "local_time": ..}`.
pub(crate) fn render_post_time(t: &PostTime, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("Local: {}\nUTC:   {}", t.local_time, t.utc_time)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(t)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PostTime {
        PostTime {
            utc_time: "Mon, 20 Feb 2023 02:00:18 GMT".to_string(),
            local_time: "Feb 20, 2023, 03:00 AM GMT+1".to_string(),
        }
    }

    #[test]
    fn text_output() {
        let s = render_post_time(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            s,
            "Local: Feb 20, 2023, 03:00 AM GMT+1\nUTC:   Mon, 20 Feb 2023 02:00:18 GMT"
        );
    }

    #[test]
    fn json_output() {
        let s = render_post_time(&sample(), OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["utc_time"], "Mon, 20 Feb 2023 02:00:18 GMT");
        assert_eq!(v["local_time"], "Feb 20, 2023, 03:00 AM GMT+1");
    }
}

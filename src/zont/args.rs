use clap::Parser;

/// Returns the version string, including the git hash for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "zont",
    bin_name = "zont",
    version = get_version(),
    about = "Convert times between time zones",
    after_help = "Examples:\n  zont 3pm EST to PST\n  zont 15:30 UTC to Asia/Tokyo\n  zont now America/New_York to Europe/London\n  zont --tui  (interactive mode)"
)]
pub struct Cli {
    /// Launch interactive mode
    #[arg(long)]
    pub tui: bool,

    /// Time and timezone conversion (e.g., "3pm EST to PST")
    #[arg(trailing_var_arg = true)]
    pub conversion: Vec<String>,
}

/// A `<time> <source-zone> to <target-zone>` request split out of the
/// trailing words. The time may span multiple words (`2024-01-15 15:00`);
/// the `to` keyword anchors the split as the second-to-last word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub time: String,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn from_words(words: &[String]) -> Option<Self> {
        if words.len() < 4 {
            return None;
        }
        let keyword = &words[words.len() - 2];
        if !keyword.eq_ignore_ascii_case("to") {
            return None;
        }
        Some(Self {
            time: words[..words.len() - 3].join(" "),
            from: words[words.len() - 3].clone(),
            to: words[words.len() - 1].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_a_simple_request() {
        let request = ConversionRequest::from_words(&words(&["3pm", "EST", "to", "PST"])).unwrap();
        assert_eq!(request.time, "3pm");
        assert_eq!(request.from, "EST");
        assert_eq!(request.to, "PST");
    }

    #[test]
    fn time_may_span_words() {
        let request = ConversionRequest::from_words(&words(&[
            "2024-01-15",
            "15:00",
            "UTC",
            "to",
            "Asia/Tokyo",
        ]))
        .unwrap();
        assert_eq!(request.time, "2024-01-15 15:00");
        assert_eq!(request.from, "UTC");
        assert_eq!(request.to, "Asia/Tokyo");
    }

    #[test]
    fn keyword_is_case_insensitive() {
        assert!(ConversionRequest::from_words(&words(&["3pm", "EST", "TO", "PST"])).is_some());
    }

    #[test]
    fn missing_keyword_is_rejected() {
        assert!(ConversionRequest::from_words(&words(&["3pm", "EST", "PST"])).is_none());
        assert!(ConversionRequest::from_words(&words(&["3pm", "EST", "into", "PST"])).is_none());
        assert!(ConversionRequest::from_words(&words(&["to", "PST"])).is_none());
    }
}

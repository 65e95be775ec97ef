use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZontError {
    #[error("could not parse time: {0:?}")]
    MalformedTime(String),

    #[error("time value out of range: {0}")]
    InvalidTimeValue(String),

    #[error("unknown timezone: {input}{}", suggestion_hint(.suggestions))]
    UnknownZone {
        input: String,
        suggestions: Vec<String>,
    },

    #[error("usage: zont <time> <source-zone> to <target-zone>")]
    Usage,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

pub type Result<T> = std::result::Result<T, ZontError>;

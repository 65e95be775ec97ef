//! Interactive session.
//!
//! The session is an explicit finite-state sequence driven by blocking
//! prompts: time, source zone, target zone, result, repeat choice. A field
//! that fails validation reports inline and re-prompts the same field; only
//! Ctrl-C/EOF or declining the repeat prompt ends the session.

use colored::Colorize;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Completion, Confirm, Input};

use zont::config::{self, ZontConfig};
use zont::convert;
use zont::error::{Result, ZontError};
use zont::parse::{self, ClockSpec};
use zont::zones::{self, ZoneRef};

use super::print;

enum SessionState {
    AwaitingTime,
    AwaitingSourceZone(ClockSpec),
    AwaitingTargetZone(ClockSpec, ZoneRef),
    ShowingResult(ClockSpec, ZoneRef, ZoneRef),
    AwaitingRepeatChoice,
    Done,
}

/// Tab completion over the combined alias + identifier catalog: the lexically
/// first prefix match wins, then the first substring match. The catalog is
/// sorted, so completion is deterministic.
struct ZoneCompletion;

impl Completion for ZoneCompletion {
    fn get(&self, input: &str) -> Option<String> {
        let needle = input.to_ascii_lowercase();
        if needle.is_empty() {
            return None;
        }
        let catalog = zones::candidates();
        if let Some(hit) = catalog
            .iter()
            .find(|name| name.to_ascii_lowercase().starts_with(&needle))
        {
            return Some(hit.to_string());
        }
        catalog
            .iter()
            .find(|name| name.to_ascii_lowercase().contains(&needle))
            .map(|name| name.to_string())
    }
}

pub fn run_session() -> Result<()> {
    let config = match config::config_dir() {
        Some(dir) => ZontConfig::load(dir).unwrap_or_default(),
        None => ZontConfig::default(),
    };

    let term = Term::stdout();
    let _ = term.clear_screen();
    println!("{}", style("zont - time zone converter").cyan().bold());
    println!("{}", style("Tab completes time zone names.").dim());
    println!();

    let theme = ColorfulTheme::default();
    let completion = ZoneCompletion;

    let mut state = SessionState::AwaitingTime;
    loop {
        state = match state {
            SessionState::AwaitingTime => {
                let Some(line) = read_input(
                    Input::<String>::with_theme(&theme)
                        .with_prompt("Time (3pm, 15:30, now)")
                        .interact_text(),
                )?
                else {
                    break;
                };
                match parse::parse_time(&line) {
                    Ok(spec) => SessionState::AwaitingSourceZone(spec),
                    Err(e) => {
                        report(&e);
                        SessionState::AwaitingTime
                    }
                }
            }
            SessionState::AwaitingSourceZone(spec) => {
                let Some(line) = prompt_zone(
                    &theme,
                    &completion,
                    "From zone",
                    config.default_from.as_deref(),
                )?
                else {
                    break;
                };
                match zones::resolve(&line) {
                    Ok(from) => SessionState::AwaitingTargetZone(spec, from),
                    Err(e) => {
                        report(&e);
                        SessionState::AwaitingSourceZone(spec)
                    }
                }
            }
            SessionState::AwaitingTargetZone(spec, from) => {
                let Some(line) =
                    prompt_zone(&theme, &completion, "To zone", config.default_to.as_deref())?
                else {
                    break;
                };
                match zones::resolve(&line) {
                    Ok(to) => SessionState::ShowingResult(spec, from, to),
                    Err(e) => {
                        report(&e);
                        SessionState::AwaitingTargetZone(spec, from)
                    }
                }
            }
            SessionState::ShowingResult(spec, from, to) => match convert::convert(spec, from, to) {
                Ok(conversion) => {
                    println!();
                    println!("  {}", print::render(&conversion));
                    println!();
                    SessionState::AwaitingRepeatChoice
                }
                Err(e) => {
                    // A DST gap only surfaces here; start the round over.
                    report(&e);
                    SessionState::AwaitingTime
                }
            },
            SessionState::AwaitingRepeatChoice => {
                let Some(again) = read_input(
                    Confirm::with_theme(&theme)
                        .with_prompt("Convert another time?")
                        .default(true)
                        .interact(),
                )?
                else {
                    break;
                };
                if again {
                    println!();
                    SessionState::AwaitingTime
                } else {
                    SessionState::Done
                }
            }
            SessionState::Done => break,
        };
    }

    println!("{}", "Goodbye!".green());
    Ok(())
}

fn prompt_zone(
    theme: &ColorfulTheme,
    completion: &ZoneCompletion,
    prompt: &str,
    initial: Option<&str>,
) -> Result<Option<String>> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .completion_with(completion);
    if let Some(text) = initial {
        input = input.with_initial_text(text);
    }
    read_input(input.interact_text())
}

/// `None` means the user ended the session (Ctrl-C or EOF); other prompt
/// failures propagate.
fn read_input<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e))
            if matches!(
                e.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::UnexpectedEof
            ) =>
        {
            Ok(None)
        }
        Err(dialoguer::Error::IO(e)) => Err(ZontError::Io(e)),
    }
}

fn report(err: &ZontError) {
    eprintln!("{}", err.to_string().red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_prefers_prefix_matches() {
        let completion = ZoneCompletion;
        assert_eq!(completion.get("Asia/Tok"), Some("Asia/Tokyo".to_string()));
        assert_eq!(completion.get("asia/tok"), Some("Asia/Tokyo".to_string()));
    }

    #[test]
    fn completion_falls_back_to_substring() {
        let completion = ZoneCompletion;
        assert_eq!(completion.get("Tokyo"), Some("Asia/Tokyo".to_string()));
    }

    #[test]
    fn completion_ignores_empty_input() {
        let completion = ZoneCompletion;
        assert_eq!(completion.get(""), None);
    }

    #[test]
    fn completion_covers_aliases() {
        let completion = ZoneCompletion;
        assert_eq!(completion.get("AES"), Some("AEST".to_string()));
    }
}

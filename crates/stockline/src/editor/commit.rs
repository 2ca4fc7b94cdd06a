//! Turning a confirmed line into a profile mutation.

use crate::profile::TickerProfile;
use crate::quotes::QuoteSnapshot;

use super::Command;

/// Trim, uppercase, and split on runs of commas and whitespace.
pub fn parse_tickers(input: &str) -> Vec<String> {
    input
        .trim()
        .to_uppercase()
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Apply `command` to the profile. Returns the snapshot to re-render, or
/// `None` when the line held no tickers and nothing was touched.
pub fn execute<P: TickerProfile>(
    command: Command,
    input: &str,
    profile: &mut P,
) -> Option<QuoteSnapshot> {
    let tickers = parse_tickers(input);
    if tickers.is_empty() {
        tracing::debug!(?command, "empty submission ignored");
        return None;
    }

    let changed = match command {
        Command::Add => add_tickers(profile.tickers_mut(), &tickers),
        Command::Remove => remove_tickers(profile.tickers_mut(), &tickers),
    };
    profile.tickers_mut().sort();
    tracing::info!(?command, changed, total = profile.tickers().len(), "tickers updated");

    if let Err(err) = profile.save() {
        tracing::warn!(error = %err, "failed to save profile");
    }
    Some(profile.quotes())
}

fn add_tickers(existing: &mut Vec<String>, tickers: &[String]) -> usize {
    let mut added = 0;
    for ticker in tickers {
        if !existing.contains(ticker) {
            existing.push(ticker.clone());
            added += 1;
        }
    }
    added
}

fn remove_tickers(existing: &mut Vec<String>, tickers: &[String]) -> usize {
    let before = existing.len();
    existing.retain(|ticker| !tickers.contains(ticker));
    before - existing.len()
}

#[cfg(test)]
mod tests {
    use super::parse_tickers;

    #[test]
    fn parse_splits_on_commas_and_spaces() {
        assert_eq!(
            parse_tickers("  aapl, GOOG   msft"),
            vec!["AAPL", "GOOG", "MSFT"]
        );
    }

    #[test]
    fn parse_collapses_separator_runs() {
        assert_eq!(parse_tickers(",,ko ,\t, v,"), vec!["KO", "V"]);
    }

    #[test]
    fn parse_blank_line_yields_nothing() {
        assert!(parse_tickers("").is_empty());
        assert!(parse_tickers("   ").is_empty());
        assert!(parse_tickers(" , ,").is_empty());
    }

    #[test]
    fn parse_keeps_duplicates_for_caller() {
        assert_eq!(parse_tickers("ibm IBM"), vec!["IBM", "IBM"]);
    }
}

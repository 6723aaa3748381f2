use clap::{Arg, ArgMatches, Command};

use crate::core::config::DEFAULT_URL;

pub fn build_cli() -> Command {
    Command::new("jsonpoll")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Poll a JSON endpoint on a fixed interval and pretty-print the latest payload")
        .arg(
            Arg::new("url")
                .help("Endpoint to poll")
                .default_value(DEFAULT_URL)
                .index(1),
        )
}

pub fn url_from_matches(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("url")
        .cloned()
        .unwrap_or_else(|| DEFAULT_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_defaults_to_builtin_endpoint() {
        let matches = build_cli().try_get_matches_from(["jsonpoll"]).unwrap();
        assert_eq!(url_from_matches(&matches), DEFAULT_URL);
    }

    #[test]
    fn test_positional_url_overrides_default() {
        let matches = build_cli()
            .try_get_matches_from(["jsonpoll", "https://example.com/feed.json"])
            .unwrap();
        assert_eq!(url_from_matches(&matches), "https://example.com/feed.json");
    }
}

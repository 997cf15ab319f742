//! City name matching for free-text requests

use aho_corasick::{AhoCorasick, MatchKind};

use crate::client::WeatherError;

/// Finds the first known city mentioned in a request
#[derive(Debug, Clone)]
pub struct CityMatcher {
    cities: Vec<String>,
    automaton: AhoCorasick,
}

impl CityMatcher {
    /// Build a matcher over the given city names
    pub fn new<I, S>(cities: I) -> Result<Self, WeatherError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cities: Vec<String> = cities.into_iter().map(Into::into).collect();
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&cities)
            .map_err(|e| WeatherError::Matcher(e.to_string()))?;

        Ok(Self { cities, automaton })
    }

    /// City that occurs earliest in the text, if any
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&str> {
        self.automaton
            .find(text)
            .map(|m| self.cities[m.pattern().as_usize()].as_str())
    }

    /// Known city names
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}

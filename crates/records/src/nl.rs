//! Natural-language query interpretation
//!
//! Not NLP: an ordered table of substring and pattern rules over the
//! lowercased query. Each rule inspects the query and may set constraints on
//! the filter; later rules win when they target the same constraint
//! ("first vowel" deliberately overrides "letter x"). Unrecognized phrasing
//! derives an empty constraint set, which matches every record.

use regex::Regex;

use crate::{FilterError, StringFilter};

type Rule = Box<dyn Fn(&str, &mut StringFilter) + Send + Sync>;

pub struct QueryInterpreter {
    rules: Vec<Rule>,
}

impl QueryInterpreter {
    pub fn new() -> Self {
        let longer = Regex::new(r"longer than (\d+) characters").expect("static regex");
        let shorter = Regex::new(r"shorter than (\d+) characters").expect("static regex");
        let letter = Regex::new(r"letter (\w)\b").expect("static regex");

        let rules: Vec<Rule> = vec![
            Box::new(|q, f| {
                if q.contains("palindrom") {
                    f.is_palindrome = Some(true);
                }
            }),
            Box::new(|q, f| {
                if q.contains("single word") {
                    f.word_count = Some(1);
                }
            }),
            Box::new(move |q, f| {
                if let Some(caps) = longer.captures(q) {
                    if let Ok(n) = caps[1].parse::<i64>() {
                        f.min_length = Some(n + 1);
                    }
                }
            }),
            Box::new(move |q, f| {
                if let Some(caps) = shorter.captures(q) {
                    if let Ok(n) = caps[1].parse::<i64>() {
                        f.max_length = Some(n - 1);
                    }
                }
            }),
            Box::new(move |q, f| {
                if let Some(caps) = letter.captures(q) {
                    f.contains_character = Some(caps[1].to_string());
                }
            }),
            // Fixed literal rule, not a semantic vowel search
            Box::new(|q, f| {
                if q.contains("first vowel") {
                    f.contains_character = Some("a".to_string());
                }
            }),
        ];

        Self { rules }
    }

    /// Derive filter constraints from free-form text.
    /// An empty or whitespace-only query is a validation error; anything else
    /// succeeds, possibly with no constraints derived.
    pub fn interpret(&self, query: &str) -> Result<StringFilter, FilterError> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Err(FilterError::EmptyQuery);
        }

        let mut filter = StringFilter::default();
        for rule in &self.rules {
            rule(&q, &mut filter);
        }
        Ok(filter)
    }
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

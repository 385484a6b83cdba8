use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::template::interpolator::Interpolator;

// $name | ${name} | [[name]]
static VARIABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(\w+)|\$\{(\w+)\}|\[\[(\w+)\]\]").unwrap()
});

/// Dashboard variables with regex-style formatting of their values.
///
/// A single value is inserted regex-escaped, several values become an
/// escaped alternation `(a|b)`. References to unknown variables are kept
/// as written.
#[derive(Debug, Clone, Default)]
pub struct TemplateVariables {
    values: HashMap<String, Vec<String>>,
}

impl TemplateVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), vec![value.into()]);
        self
    }

    pub fn set_multi<I, S>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    fn format_regex(values: &[String]) -> String {
        match values {
            [single] => regex::escape(single),
            many => format!(
                "({})",
                many.iter()
                    .map(|v| regex::escape(v))
                    .collect::<Vec<_>>()
                    .join("|")
            ),
        }
    }
}

impl Interpolator for TemplateVariables {
    fn interpolate(&self, text: &str) -> String {
        VARIABLE_RE
            .replace_all(text, |caps: &Captures| {
                let name = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .or_else(|| caps.get(3))
                    .map(|m| m.as_str())
                    .unwrap_or_default();

                match self.values.get(name) {
                    Some(values) => Self::format_regex(values),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVariables {
        let mut vars = TemplateVariables::new();
        vars.set("host", "node1.example.com")
            .set_multi("queue", ["etl", "adhoc"])
            .set("cluster", "prod");
        vars
    }

    #[test]
    fn replaces_all_reference_styles() {
        let vars = vars();
        assert_eq!(vars.interpolate("c=$cluster"), "c=prod");
        assert_eq!(vars.interpolate("c=${cluster}-x"), "c=prod-x");
        assert_eq!(vars.interpolate("c=[[cluster]]"), "c=prod");
    }

    #[test]
    fn single_value_is_regex_escaped() {
        assert_eq!(vars().interpolate("$host"), r"node1\.example\.com");
    }

    #[test]
    fn set_replaces_previous_values() {
        let mut vars = vars();
        vars.set("queue", "etl");
        assert_eq!(vars.get("queue"), Some(&["etl".to_string()][..]));
        assert_eq!(vars.get("missing"), None);
    }

    #[test]
    fn multi_value_becomes_alternation() {
        assert_eq!(vars().interpolate("q=$queue"), "q=(etl|adhoc)");
    }

    #[test]
    fn unknown_variables_are_kept() {
        assert_eq!(vars().interpolate("$missing and ${other}"), "$missing and ${other}");
    }

    #[test]
    fn text_without_references_is_unchanged() {
        assert_eq!(vars().interpolate("2024/03/01-10:00"), "2024/03/01-10:00");
    }
}

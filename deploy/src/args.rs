use std::collections::BTreeMap;

/// Value of a parsed option: `--key=value` carries text, a bare `--key` is a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Text(String),
    Flag,
}

impl ArgValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgValue::Text(value) => Some(value),
            ArgValue::Flag => None,
        }
    }
}

pub type ArgMap = BTreeMap<String, ArgValue>;

/// Collects `--key[=value]` tokens into a map. Tokens without the `--` marker
/// (positional arguments, framework-reserved words) are skipped, the split is
/// bounded to the first `=`, and a repeated key keeps its last occurrence.
pub fn parse<I, S>(tokens: I) -> ArgMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = ArgMap::new();
    for token in tokens {
        let Some(option) = token.as_ref().strip_prefix("--") else {
            continue;
        };
        match option.split_once('=') {
            Some((key, value)) => args.insert(key.to_string(), ArgValue::Text(value.to_string())),
            None => args.insert(option.to_string(), ArgValue::Flag),
        };
    }
    args
}

use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::text::from_csv;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomSwapError {
    #[error("custom swap {0:?} has no ':' separating the match from the replacement")]
    MissingSeparator(String),
    #[error("custom swap {rule:?}: {side} must be written option|target")]
    MalformedPair { rule: String, side: &'static str },
    #[error("custom swap {0:?} has an empty option")]
    EmptyOption(String),
}

/// One user rule of the form `option|target:newOption|newTarget`, lowercased.
///
/// An entry whose option equals `option` and whose target contains `target`
/// gets `new_option` promoted over it, both looked up on `new_target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomSwap {
    pub option: String,
    pub target: String,
    pub new_option: String,
    pub new_target: String,
}

impl CustomSwap {
    pub fn matches(&self, option: &str, target: &str) -> bool {
        option == self.option && target.contains(&self.target)
    }
}

fn split_pair<'a>(
    rule: &str,
    side: &'static str,
    text: &'a str,
) -> Result<(&'a str, &'a str), CustomSwapError> {
    let mut parts = text.split('|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(option), Some(target), None) => Ok((option.trim(), target.trim())),
        _ => Err(CustomSwapError::MalformedPair {
            rule: rule.to_string(),
            side,
        }),
    }
}

impl FromStr for CustomSwap {
    type Err = CustomSwapError;

    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        let rule = rule.trim();
        let (matcher, replacement) = rule
            .split_once(':')
            .ok_or_else(|| CustomSwapError::MissingSeparator(rule.to_string()))?;
        let (option, target) = split_pair(rule, "match", matcher)?;
        let (new_option, new_target) = split_pair(rule, "replacement", replacement)?;
        if option.is_empty() || new_option.is_empty() {
            return Err(CustomSwapError::EmptyOption(rule.to_string()));
        }

        Ok(Self {
            option: option.to_lowercase(),
            target: target.to_lowercase(),
            new_option: new_option.to_lowercase(),
            new_target: new_target.to_lowercase(),
        })
    }
}

/// Parses the comma separated rule list, dropping (and logging) rules that
/// do not have the expected shape. Order is preserved.
pub fn parse_custom_swaps(input: &str) -> Vec<CustomSwap> {
    from_csv(input)
        .iter()
        .filter_map(|rule| match rule.parse::<CustomSwap>() {
            Ok(swap) => Some(swap),
            Err(err) => {
                warn!("skipping {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_lowercases_rule() {
        let swap: CustomSwap = "Trade|Banker:Bank|Banker".parse().unwrap();
        assert_eq!(
            swap,
            CustomSwap {
                option: "trade".into(),
                target: "banker".into(),
                new_option: "bank".into(),
                new_target: "banker".into(),
            }
        );
        assert!(swap.matches("trade", "ghost banker"));
        assert!(!swap.matches("talk-to", "banker"));
    }

    #[test]
    fn rejects_malformed_rules() {
        assert_eq!(
            "trade|banker".parse::<CustomSwap>(),
            Err(CustomSwapError::MissingSeparator("trade|banker".into()))
        );
        assert!(matches!(
            "trade:bank|banker".parse::<CustomSwap>(),
            Err(CustomSwapError::MalformedPair { side: "match", .. })
        ));
        assert!(matches!(
            "trade|banker:bank|banker|extra".parse::<CustomSwap>(),
            Err(CustomSwapError::MalformedPair {
                side: "replacement",
                ..
            })
        ));
        assert!(matches!(
            "|banker:bank|banker".parse::<CustomSwap>(),
            Err(CustomSwapError::EmptyOption(_))
        ));
    }

    #[test]
    fn list_keeps_valid_rules_in_order() {
        let swaps = parse_custom_swaps(
            "trade|banker:bank|banker, nonsense, talk-to|robin:claim-slime|robin",
        );
        let options: Vec<_> = swaps.iter().map(|swap| swap.new_option.as_str()).collect();
        assert_eq!(options, vec!["bank", "claim-slime"]);
    }

    #[test]
    fn empty_target_matches_any_entry() {
        let swap: CustomSwap = "use|:drop|".parse().unwrap();
        assert!(swap.matches("use", "anything"));
    }
}

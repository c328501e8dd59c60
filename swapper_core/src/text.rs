use std::borrow::Cow;
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("<[^>]*>").expect("markup tag pattern should compile"));

/// Strips `<col=...>`, `<img=...>` and any other markup tags from a display
/// string.
pub fn remove_tags(text: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(text, "")
}

/// Comparison form of an option or target: tags removed, lowercased.
pub fn normalize(text: &str) -> String {
    remove_tags(text).to_lowercase()
}

/// Splits a comma separated configuration value, trimming items and
/// dropping empty ones.
pub fn from_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn csv_set(input: &str) -> HashSet<String> {
    from_csv(input)
        .into_iter()
        .map(|item| item.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_color_tags() {
        assert_eq!(normalize("<col=ffff00>Banker</col>"), "banker");
        assert_eq!(normalize("Talk-to"), "talk-to");
        assert_eq!(
            normalize("<col=ff9040>Amulet of glory(4)</col><col=ffffff> (level-0)"),
            "amulet of glory(4) (level-0)"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("<img=2>Zezima<col=00ff00>  (level-126)");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn remove_tags_borrows_untagged_input() {
        assert!(matches!(remove_tags("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn csv_trims_and_skips_blank_items() {
        assert_eq!(
            from_csv(" Rune essence, ,Pure essence ,,"),
            vec!["Rune essence".to_string(), "Pure essence".to_string()]
        );
        assert!(from_csv("").is_empty());
    }

    #[test]
    fn csv_set_lowercases_items() {
        let set = csv_set("Feather, Fishing BAIT");
        assert!(set.contains("feather"));
        assert!(set.contains("fishing bait"));
        assert_eq!(set.len(), 2);
    }
}

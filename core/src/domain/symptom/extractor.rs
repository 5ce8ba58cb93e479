use crate::domain::symptom::rules::{SymptomRule, bundled_rules};

/// Maps free-text symptom descriptions to canonical symptom tags.
///
/// A tag is emitted when any literal pattern matches the raw text or a
/// whitespace-stripped lowercase copy, when any regex matches the raw text,
/// or when at least one related keyword is found (same dual check). The
/// related-keyword count is a gate only and never surfaces to callers.
#[derive(Debug, Clone)]
pub struct SymptomExtractor {
    rules: Vec<SymptomRule>,
}

impl SymptomExtractor {
    pub fn bundled() -> Self {
        Self {
            rules: bundled_rules(),
        }
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        let stripped: String = text.to_lowercase().split_whitespace().collect();

        let mut found = Vec::new();
        for rule in &self.rules {
            let has_pattern = rule
                .literals
                .iter()
                .any(|lit| contains_loosely(text, &stripped, lit))
                || rule.regexes.iter().any(|re| re.is_match(text));

            let related_hits = rule
                .related
                .iter()
                .filter(|kw| contains_loosely(text, &stripped, kw))
                .count();

            if has_pattern || related_hits >= 1 {
                found.push(rule.tag.to_string());
            }
        }
        found
    }
}

fn contains_loosely(raw: &str, stripped: &str, keyword: &str) -> bool {
    let compact: String = keyword.split_whitespace().collect();
    raw.contains(keyword) || stripped.contains(compact.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headache_keyword_yields_headache_tag() {
        let extractor = SymptomExtractor::bundled();
        assert!(extractor.extract("머리 아파요").contains(&"두통".to_string()));
        assert!(extractor.extract("두통이 있어요").contains(&"두통".to_string()));
    }

    #[test]
    fn plain_headache_message_yields_only_headache() {
        let extractor = SymptomExtractor::bundled();
        assert_eq!(extractor.extract("두통이 있어요"), vec!["두통".to_string()]);
    }

    #[test]
    fn unrecognized_input_yields_empty_set() {
        let extractor = SymptomExtractor::bundled();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("hmm...").is_empty());
    }

    #[test]
    fn whitespace_stripped_matching() {
        let extractor = SymptomExtractor::bundled();
        // "배 아파" declared with a space still matches the compact spelling.
        assert!(extractor.extract("배아파 죽겠어").contains(&"복통".to_string()));
    }

    #[test]
    fn related_keyword_alone_is_enough() {
        let extractor = SymptomExtractor::bundled();
        // "어지러" is only a related keyword of 두통.
        assert!(extractor.extract("어지러워요").contains(&"두통".to_string()));
    }

    #[test]
    fn tags_follow_rule_declaration_order() {
        let extractor = SymptomExtractor::bundled();
        let tags = extractor.extract("머리도 아프고 기침도 나요");
        let head = tags.iter().position(|t| t == "두통");
        let cough = tags.iter().position(|t| t == "기침");
        assert!(head.is_some() && cough.is_some());
        assert!(head < cough);
    }
}

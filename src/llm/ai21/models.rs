use serde::{Deserialize, Serialize};

/// Penalty settings AI21 applies to presence, count and frequency of tokens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AI21PenaltyData {
    pub scale: u32,
    pub apply_to_whitespaces: bool,
    pub apply_to_punctuations: bool,
    pub apply_to_numbers: bool,
    pub apply_to_stopwords: bool,
    pub apply_to_emojis: bool,
}

impl Default for AI21PenaltyData {
    fn default() -> Self {
        Self {
            scale: 0,
            apply_to_whitespaces: true,
            apply_to_punctuations: true,
            apply_to_numbers: true,
            apply_to_stopwords: true,
            apply_to_emojis: true,
        }
    }
}

impl AI21PenaltyData {
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_camel_case_wire_names() {
        let value = serde_json::to_value(AI21PenaltyData::default().with_scale(2)).unwrap();
        assert_eq!(
            value,
            json!({
                "scale": 2,
                "applyToWhitespaces": true,
                "applyToPunctuations": true,
                "applyToNumbers": true,
                "applyToStopwords": true,
                "applyToEmojis": true,
            })
        );
    }

    #[test]
    fn test_partial_penalty_uses_defaults() {
        let penalty: AI21PenaltyData =
            serde_json::from_value(json!({"scale": 5, "applyToEmojis": false})).unwrap();
        assert_eq!(penalty.scale, 5);
        assert!(!penalty.apply_to_emojis);
        assert!(penalty.apply_to_numbers);
    }
}

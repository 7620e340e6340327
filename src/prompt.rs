use serde_json::Number;

use crate::consts;
use crate::errors::RelayError;
use crate::models::poem::{PoemDetails, PoemRequest, WordCount};

fn or_default(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

impl PoemRequest {
    /// Fills every missing or empty field with its default independently.
    pub fn resolve(&self) -> PoemDetails {
        let word_count = match &self.word_count {
            Some(word_count) if !word_count.is_empty() => word_count.clone(),
            _ => WordCount::Number(Number::from(consts::DEFAULT_WORD_COUNT)),
        };

        PoemDetails {
            name: or_default(&self.name, consts::DEFAULT_NAME),
            traits: or_default(&self.traits, consts::DEFAULT_TRAITS),
            mood: or_default(&self.mood, consts::DEFAULT_MOOD),
            style: or_default(&self.style, consts::DEFAULT_STYLE),
            tone: or_default(&self.tone, consts::DEFAULT_TONE),
            occasion: or_default(&self.occasion, consts::DEFAULT_OCCASION),
            favorites: or_default(&self.favorites, consts::DEFAULT_FAVORITES),
            word_count,
        }
    }
}

/// Four-space indented lines between a leading newline and a two-space trailer.
fn indented_prompt(lines: &[String]) -> String {
    let mut prompt = String::from("\n");
    for line in lines {
        prompt.push_str("    ");
        prompt.push_str(line);
        prompt.push('\n');
    }
    prompt.push_str("  ");
    prompt
}

pub fn build_generation_prompt(request: &PoemRequest) -> String {
    let details = request.resolve();

    indented_prompt(&[
        format!(
            "Write a unique, beautiful, and memorable poem of approximately {} words.",
            details.word_count
        ),
        format!(
            "The poem should be in {} style, with a {} and {} tone.",
            details.style, details.mood, details.tone
        ),
        format!(
            "It's for someone named {}, on the occasion of {}.",
            details.name, details.occasion
        ),
        format!("They are known for being {}.", details.traits),
        format!(
            "Please also include or be inspired by these words if possible: {}.",
            details.favorites
        ),
    ])
}

pub fn build_regeneration_prompt(selection: Option<&str>) -> Result<String, RelayError> {
    let selection = match selection {
        Some(selection) if !selection.is_empty() => selection,
        _ => {
            return Err(RelayError::ValidationError(
                consts::NO_SELECTION_MESSAGE.to_string(),
            ));
        }
    };

    Ok(indented_prompt(&[
        "Take the following excerpt of a poem and regenerate it in a similar tone, but make it fresh and unique:".to_string(),
        format!("\"{}\"", selection),
        "Respond with only the revised lines.".to_string(),
    ]))
}

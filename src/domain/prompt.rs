//! Prompt Derivation
//!
//! Builds the prompts sent to the text and image synthesis services, and the
//! post-processing applied to their responses (name scrubbing, title
//! extraction).

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use super::story::Synopsis;

/// Style suffix appended to every page illustration brief
const PAGE_STYLE_SUFFIX: &str = "as a watercolor done in the style of a childrens book";

/// Style prefix wrapped around the cover concept
const COVER_STYLE_PREFIX: &str = "in the style of a watercolor childrens book.";

/// Negatively-weighted term suppressing rendered text in illustrations
pub const NEGATIVE_IMAGE_TERM: &str = "writing words letters alphabet text";

/// Structural violation in a title response
#[derive(Debug, Error)]
#[error("Title response does not match the required `TITLE: \"...\"` format: {response}")]
pub struct TitleFormatError {
    pub response: String,
}

/// Prompt for the full narrative
pub fn narrative_prompt(synopsis: &Synopsis) -> String {
    format!(
        "Write me a short story in the style of a children's book about a \
         {subject} named {name}. {name} is trying to {goal}. There should be \
         a rising action, a climax, falling action, and a resolution. The \
         story does not need to have a happy ending.",
        subject = synopsis.subject,
        name = synopsis.name,
        goal = synopsis.goal,
    )
}

/// Prompt for a page's illustration brief. Instructs the service not to use
/// the protagonist's name so the brief stays renderable.
pub fn illustration_brief_prompt(synopsis: &Synopsis, paragraph: &str) -> String {
    format!(
        "The following is an excerpt from a childrens story about a(n) \
         {subject} named {name} who is trying to {goal}. Do not refer to \
         {name} by name. Given this excerpt write a brief (two sentence max) \
         description of an illustration that would go well with this text.\n\
         \n\
         \"{paragraph}\"",
        subject = synopsis.subject,
        name = synopsis.name,
        goal = synopsis.goal,
        paragraph = paragraph,
    )
}

/// Prompt for the deck title, with the required response format spelled out
pub fn title_prompt(synopsis: &Synopsis, narrative: &str) -> String {
    format!(
        "Give me a potential title for the following short story about \
         {name}, a {subject} who is trying to {goal}. Do not give me a title \
         with a subtitle. Format your response the following way:\n\
         TITLE: \"[title goes here]\"\n\
         \"{narrative}\"",
        name = synopsis.name,
        subject = synopsis.subject,
        goal = synopsis.goal,
        narrative = narrative,
    )
}

/// Prompt for a short cover-art concept
pub fn cover_concept_prompt(synopsis: &Synopsis) -> String {
    format!(
        "briefly describe a potential idea for the cover a childrens book \
         about a {subject} named {name} who is trying to {goal}",
        subject = synopsis.subject,
        name = synopsis.name,
        goal = synopsis.goal,
    )
}

/// Wrap a cover concept in the fixed cover style
pub fn cover_image_prompt(concept: &str) -> String {
    format!("{} {}", COVER_STYLE_PREFIX, concept)
}

/// Derive the image prompt from an illustration brief.
///
/// Appends the fixed style suffix, lowercases the result, and replaces every
/// occurrence of the protagonist's name with "the <subject>". The whole text
/// is lowercased first, so the substitution catches the name regardless of
/// the case the synthesis service used.
pub fn derive_image_prompt(synopsis: &Synopsis, brief: &str) -> String {
    let styled = format!("{} {}", brief, PAGE_STYLE_SUFFIX).to_lowercase();
    styled.replace(
        &synopsis.name.to_lowercase(),
        &format!("the {}", synopsis.subject.to_lowercase()),
    )
}

fn title_format() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^title: ".*"$"#).expect("title format pattern"))
}

/// Extract the deck title from a synthesis response.
///
/// The whole response, trimmed and lowercased, must match `title: "..."`;
/// anything else is a structural violation, never a best-effort guess. The
/// title is the text between the first pair of double quotes of the original
/// response, trimmed.
pub fn extract_title(response: &str) -> Result<String, TitleFormatError> {
    let normalized = response.trim().to_lowercase();
    if !title_format().is_match(&normalized) {
        return Err(TitleFormatError {
            response: response.to_string(),
        });
    }

    let title = response
        .split('"')
        .nth(1)
        .map(str::trim)
        .unwrap_or_default();

    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synopsis() -> Synopsis {
        Synopsis::new("fox", "Milo", "find his way home")
    }

    #[test]
    fn test_narrative_prompt_mentions_all_seeds() {
        let prompt = narrative_prompt(&synopsis());
        assert!(prompt.contains("fox"));
        assert!(prompt.contains("Milo"));
        assert!(prompt.contains("find his way home"));
    }

    #[test]
    fn test_brief_prompt_embeds_paragraph_and_forbids_name() {
        let prompt = illustration_brief_prompt(&synopsis(), "Milo crossed the river.");
        assert!(prompt.contains("\"Milo crossed the river.\""));
        assert!(prompt.contains("Do not refer to Milo by name"));
        assert!(prompt.contains("two sentence max"));
    }

    #[test]
    fn test_image_prompt_is_lowercased_and_styled() {
        let prompt = derive_image_prompt(&synopsis(), "A Quiet Forest at Dusk");
        assert_eq!(
            prompt,
            "a quiet forest at dusk as a watercolor done in the style of a childrens book"
        );
    }

    #[test]
    fn test_image_prompt_scrubs_name_case_insensitively() {
        let prompt = derive_image_prompt(&synopsis(), "MILO watches as Milo's shadow grows");
        assert!(!prompt.to_lowercase().contains("milo"));
        assert!(prompt.contains("the fox"));
    }

    #[test]
    fn test_cover_image_prompt_has_style_prefix() {
        let prompt = cover_image_prompt("A fox silhouetted against the moon.");
        assert!(prompt.starts_with("in the style of a watercolor childrens book."));
        assert!(prompt.ends_with("A fox silhouetted against the moon."));
    }

    #[test]
    fn test_extract_title_happy_path() {
        let title = extract_title("TITLE: \"The Brave Fox\"").unwrap();
        assert_eq!(title, "The Brave Fox");
    }

    #[test]
    fn test_extract_title_tolerates_whitespace_and_case() {
        let title = extract_title("  tItLe: \"The Brave Fox\"  \n").unwrap();
        assert_eq!(title, "The Brave Fox");
    }

    #[test]
    fn test_extract_title_rejects_missing_quotes() {
        assert!(extract_title("TITLE: The Brave Fox").is_err());
    }

    #[test]
    fn test_extract_title_rejects_surrounding_prose() {
        assert!(extract_title("Sure! Here you go: TITLE: \"The Brave Fox\"").is_err());
        assert!(extract_title("TITLE: \"The Brave Fox\" and more").is_err());
    }

    #[test]
    fn test_extract_title_rejects_multiline_response() {
        assert!(extract_title("TITLE: \"The Brave Fox\"\nA story of courage.").is_err());
    }
}

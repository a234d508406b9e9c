//! Prompt templates for the quiz turn

use crate::quiz::entities::Category;

/// Templates for the probability-update and next-question prompts
///
/// Both prompts are few-shot: two fixed worked examples followed by the live
/// case. Rendering is deterministic, so identical inputs give byte-identical
/// prompts.
pub struct QuizPromptTemplate;

impl QuizPromptTemplate {
    /// Render categories as `Name: probability` pairs joined by `, `.
    ///
    /// Probabilities use the shortest representation that round-trips. Names
    /// that could be misread as separators are JSON-quoted.
    pub fn format_categories(categories: &[Category]) -> String {
        categories
            .iter()
            .map(|c| format!("{}: {}", Self::category_name(&c.name), c.probability))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn category_name(name: &str) -> String {
        let ambiguous = name.trim() != name
            || name
                .chars()
                .any(|ch| matches!(ch, ',' | ':' | '"' | '\\') || ch.is_control());
        if ambiguous {
            Self::quote(name)
        } else {
            name.to_string()
        }
    }

    /// Quote free text as a JSON string literal so it cannot break the layout
    fn quote(text: &str) -> String {
        serde_json::Value::String(text.to_string()).to_string()
    }

    /// Prompt asking the model to revise probabilities after an answer.
    pub fn update_prompt(
        previous_category: &str,
        user_answer: &str,
        categories: &[Category],
    ) -> String {
        format!(
            r#"You are scoring a personality quiz. After each answer, estimate how likely the user is to belong to each category.
Reply with a single JSON object mapping every category name to its new probability between 0 and 1. Do not add any other text.

Example 1:
Previous Category: "Shape Rotator"
User's Answer: "I prefer triangles over squares"
Categories: Shape Rotator: 0.6, Wordcel: 0.4
Response: {{ "Shape Rotator": 0.7, "Wordcel": 0.3 }}

Example 2:
Previous Category: "Wordcel"
User's Answer: "I enjoy reading novels"
Categories: Shape Rotator: 0.3, Wordcel: 0.7
Response: {{ "Shape Rotator": 0.2, "Wordcel": 0.8 }}

Now the real case:
Previous Category: {}
User's Answer: {}
Categories: {}
Response: "#,
            Self::quote(previous_category),
            Self::quote(user_answer),
            Self::format_categories(categories),
        )
    }

    /// Prompt asking the model for the next question to put to the user.
    pub fn next_question_prompt(categories: &[Category]) -> String {
        format!(
            r#"You are running a personality quiz that sorts people into categories. Given the current probabilities, write the single question that would best separate the categories that are still close.
Reply with the question only: no quotes, no numbering, no explanation.

Example 1:
Categories: Shape Rotator: 0.7, Wordcel: 0.3
Response: "Do you enjoy puzzles that involve manipulating shapes?"

Example 2:
Categories: Shape Rotator: 0.2, Wordcel: 0.8
Response: "How often do you read for pleasure?"

Now the real case:
Categories: {}
Response: "#,
            Self::format_categories(categories),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![Category::new("Puzzler", 0.55), Category::new("Poet", 0.45)]
    }

    #[test]
    fn test_format_categories() {
        assert_eq!(
            QuizPromptTemplate::format_categories(&categories()),
            "Puzzler: 0.55, Poet: 0.45"
        );
        assert_eq!(
            QuizPromptTemplate::format_categories(&[Category::new("A", 1.0)]),
            "A: 1"
        );
    }

    #[test]
    fn test_format_categories_quotes_ambiguous_names() {
        let categories = vec![
            Category::new("Cats, Dogs", 0.5),
            Category::new("Line\nResponse: {}", 0.25),
            Category::new("Plain", 0.25),
        ];
        assert_eq!(
            QuizPromptTemplate::format_categories(&categories),
            r#""Cats, Dogs": 0.5, "Line\nResponse: {}": 0.25, Plain: 0.25"#
        );

        let prompt = QuizPromptTemplate::next_question_prompt(&categories);
        assert_eq!(prompt.matches("\nResponse: ").count(), 3);
    }

    #[test]
    fn test_update_prompt_contains_live_case() {
        let prompt = QuizPromptTemplate::update_prompt("Puzzler", "I like puzzles", &categories());
        assert!(prompt.contains("Previous Category: \"Puzzler\""));
        assert!(prompt.contains("User's Answer: \"I like puzzles\""));
        assert!(prompt.contains("Categories: Puzzler: 0.55, Poet: 0.45\nResponse: "));
        // Worked examples come before the live case
        let example = prompt.find("I prefer triangles over squares").unwrap();
        let live = prompt.find("I like puzzles").unwrap();
        assert!(example < live);
    }

    #[test]
    fn test_update_prompt_escapes_answer() {
        let prompt =
            QuizPromptTemplate::update_prompt("Poet", "I said \"no\"\nthen left", &categories());
        assert!(prompt.contains(r#"User's Answer: "I said \"no\"\nthen left""#));
    }

    #[test]
    fn test_next_question_prompt_contains_distribution() {
        let prompt = QuizPromptTemplate::next_question_prompt(&categories());
        assert!(prompt.contains("How often do you read for pleasure?"));
        assert!(prompt.ends_with("Categories: Puzzler: 0.55, Poet: 0.45\nResponse: "));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let a = QuizPromptTemplate::update_prompt("Poet", "Rhymes", &categories());
        let b = QuizPromptTemplate::update_prompt("Poet", "Rhymes", &categories());
        assert_eq!(a, b);

        let c = QuizPromptTemplate::next_question_prompt(&categories());
        let d = QuizPromptTemplate::next_question_prompt(&categories());
        assert_eq!(c, d);
    }
}

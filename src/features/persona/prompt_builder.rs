//! Persona prompt construction.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial release

use crate::features::reddit::ContentItem;

/// Builder for the persona generation prompt.
///
/// The prompt is a fixed instruction naming the target user and the two goals
/// (concise persona, per-trait URL citation), followed by every content item
/// serialized as a three-line block, blocks separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let prompt = PersonaPrompt::new("alice", &items).build();
/// ```
pub struct PersonaPrompt<'a> {
    username: &'a str,
    items: &'a [ContentItem],
}

impl<'a> PersonaPrompt<'a> {
    /// Create a new prompt builder for a username and its fetched content.
    pub fn new(username: &'a str, items: &'a [ContentItem]) -> Self {
        Self { username, items }
    }

    /// Build the final prompt string.
    pub fn build(self) -> String {
        let blocks: Vec<String> = self
            .items
            .iter()
            .map(|item| {
                format!(
                    "URL: {}\nType: {}\nContent:\n{}",
                    item.url, item.kind, item.text
                )
            })
            .collect();

        format!(
            "Given the following Reddit content from user u/{username}, \
             build a concise user persona. For each characteristic, cite the \
             specific URL from which it was derived.\n\n{content}\n\nPersona:\n",
            username = self.username,
            content = blocks.join("\n\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reddit::ContentKind;

    fn comment(text: &str, url: &str) -> ContentItem {
        ContentItem {
            kind: ContentKind::Comment,
            text: text.to_string(),
            url: url.to_string(),
        }
    }

    fn post(text: &str, url: &str) -> ContentItem {
        ContentItem {
            kind: ContentKind::Post,
            text: text.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_prompt_names_user_and_goals() {
        let items = vec![comment("hi", "https://www.reddit.com/r/a/1/")];
        let prompt = PersonaPrompt::new("alice", &items).build();

        assert!(prompt.contains("Reddit content from user u/alice"));
        assert!(prompt.contains("build a concise user persona"));
        assert!(prompt.contains("cite the specific URL"));
        assert!(prompt.ends_with("\n\nPersona:\n"));
    }

    #[test]
    fn test_prompt_item_block_shape() {
        let items = vec![comment("I like trains.", "https://www.reddit.com/r/a/1/")];
        let prompt = PersonaPrompt::new("bob", &items).build();

        assert!(prompt.contains(
            "URL: https://www.reddit.com/r/a/1/\nType: comment\nContent:\nI like trains."
        ));
    }

    #[test]
    fn test_prompt_blocks_separated_by_blank_lines() {
        let items = vec![
            comment("first", "https://www.reddit.com/r/a/1/"),
            post("Title\n\nBody", "https://example.com/x"),
        ];
        let prompt = PersonaPrompt::new("bob", &items).build();

        let expected = "URL: https://www.reddit.com/r/a/1/\nType: comment\nContent:\nfirst\n\n\
                        URL: https://example.com/x\nType: post\nContent:\nTitle\n\nBody";
        assert!(prompt.contains(expected));
    }

    #[test]
    fn test_prompt_with_no_items_still_well_formed() {
        let prompt = PersonaPrompt::new("ghost", &[]).build();
        assert!(prompt.contains("u/ghost"));
        assert!(prompt.ends_with("\n\nPersona:\n"));
    }
}

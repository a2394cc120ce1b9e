//! Prompt builders for the suggestion and improvement calls.

use anyhow::Result;
use minijinja::{Environment, context};

const SUGGEST_TEMPLATE: &str = include_str!("prompts/suggest.md");
const REWRITE_TEMPLATE: &str = include_str!("prompts/rewrite.md");

/// Template engine wrapper around minijinja.
struct PromptEngine {
    env: Environment<'static>,
}

impl PromptEngine {
    fn new() -> Self {
        let mut env = Environment::new();
        env.add_template("suggest", SUGGEST_TEMPLATE)
            .expect("suggest template should be valid");
        env.add_template("rewrite", REWRITE_TEMPLATE)
            .expect("rewrite template should be valid");
        Self { env }
    }
}

/// Build the suggestion-call prompt: critique only, no code in the reply.
pub fn build_suggestion_prompt(source: &str) -> Result<String> {
    let engine = PromptEngine::new();
    let template = engine.env.get_template("suggest")?;
    let rendered = template.render(context! {
        source => source,
    })?;
    Ok(rendered)
}

/// Build the improvement-call prompt: full replacement program text.
///
/// `tips` may be empty (suggestion call failed); the section is dropped then.
pub fn build_rewrite_prompt(source: &str, tips: &str) -> Result<String> {
    let engine = PromptEngine::new();
    let template = engine.env.get_template("rewrite")?;
    let rendered = template.render(context! {
        source => source,
        tips => (!tips.trim().is_empty()).then(|| tips.trim()),
    })?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_prompt_embeds_source_in_tags() {
        let prompt = build_suggestion_prompt("fn main() {}").expect("render");
        assert!(prompt.contains("<source>"));
        assert!(prompt.contains("fn main() {}"));
        assert!(prompt.contains("</source>"));
        assert!(
            prompt.contains("Do not return code"),
            "suggestion prompt must forbid code replies"
        );
    }

    #[test]
    fn rewrite_prompt_embeds_source_and_tips() {
        let prompt = build_rewrite_prompt("fn main() {}", "1. add tests").expect("render");
        assert!(prompt.contains("fn main() {}"));
        assert!(prompt.contains("<tips>"));
        assert!(prompt.contains("1. add tests"));
        assert!(prompt.contains("</tips>"));
    }

    #[test]
    fn rewrite_prompt_drops_tips_section_when_empty() {
        let prompt = build_rewrite_prompt("fn main() {}", "   ").expect("render");
        assert!(!prompt.contains("<tips>"));
        assert!(prompt.contains("fn main() {}"));
    }
}

//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Definition of a prompt template
///
/// `{name}` placeholders are replaced by the argument of that name.
/// `{task_names}` is always filled with the current task names as a JSON array.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Placeholder filled with the plan's task names.
pub const TASK_NAMES_PLACEHOLDER: &str = "{task_names}";

/// Predefined prompt templates
pub fn prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "parse_intent",
        description: "Turn a spoken or typed scheduling request into one apply_planning_action call",
        template: r#"You are a strict planning intent parser.

Given what the user said and the list of task names below, return a single,
valid `apply_planning_action` tool call whose fields conform to the tool's
JSON schema. Do not answer with free-form text.

# Actions
- `shift_task_dates`: target, delta_days, mode (`forward` or `backward`)
- `extend_task`: target, delta_days (negative shortens the task)
- `create_task`: name, start, end (YYYY-MM-DD), optional dependsOn (task ids) and assignee
- `move_milestone`: target, to_date (YYYY-MM-DD)
- `shift_phase`: target (a word shared by the phase's task names), delta_days

Use task names exactly as listed for `target`.

# Task names
{task_names}

# User said
"{utterance}""#,
        arguments: vec![PromptTemplateArg {
            name: "utterance",
            description: "The user's request, e.g. a voice transcript",
            required: true,
        }],
    }]
}

/// Fills `{name}` placeholders of `template` with `values`.
pub fn render_template<'a>(
    template: &str,
    values: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    values
        .into_iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intent_template_has_placeholders() {
        let templates = prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == "parse_intent")
            .expect("parse_intent template");

        assert!(template.template.contains(TASK_NAMES_PLACEHOLDER));
        assert!(template.template.contains("{utterance}"));
        assert!(template.arguments.iter().all(|a| a.required));
    }

    #[test]
    fn test_render_template_fills_values() {
        let text = render_template(
            "Names: {task_names}\nSaid: {utterance}",
            [("task_names", r#"["Packaging"]"#), ("utterance", "push packaging a day")],
        );
        assert_eq!(text, "Names: [\"Packaging\"]\nSaid: push packaging a day");
    }
}

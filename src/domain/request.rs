//! Request shaping for the generation service.

use serde_json::{Value, json};

use crate::domain::{EnhancementStyle, PromptSubmission};

/// System instruction sent with every enhancement request.
pub const SYSTEM_INSTRUCTION: &str = "
You are Prompt Enhancer Engine v1.0, a highly advanced module designed to transform any user-provided prompt into a superior version that is clearer, more structured, more actionable, and more effective.

Your tasks:
1. Prompt Cleaning: Fix grammar, remove ambiguity, remove unnecessary words, clarify objective, identify missing context.
2. Intent Detection: Detect what the user actually wants, identify task type, detect tone.
3. Prompt Enhancement: Transform the raw prompt into a high-quality enhanced prompt including:
    A. Role (Assign an appropriate AI role)
    B. Task (Explain clearly what the user wants)
    C. Context (Add relevant missing details)
    D. Instructions (Create steps or guidelines)
    E. Constraints (Important boundaries)
    F. Output Format (Specify exact format)
4. Style Enhancement: Apply the requested style.
5. Quality Rules: No hallucinations, no personal opinions, no fluff, stay aligned with user intention.

Output JSON matching the provided schema exactly.
";

/// Everything the generation service needs for one enhancement.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_message: String,
    pub response_schema: Value,
}

impl GenerationRequest {
    pub fn for_submission(submission: &PromptSubmission) -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_message: user_message(&submission.prompt, submission.style),
            response_schema: response_schema(),
        }
    }
}

/// User turn embedding the raw prompt and the target style label.
pub fn user_message(prompt: &str, style: EnhancementStyle) -> String {
    format!(
        "Enhance this prompt.\n\nRAW PROMPT:\n\"{}\"\n\nTARGET STYLE:\n{}",
        prompt,
        style.label()
    )
}

/// Response schema in Gemini's OpenAPI subset. Every field is required.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "enhancedPrompt": {
                "type": "STRING",
                "description": "The fully optimized, polished prompt ready to use."
            },
            "minimalVersion": {
                "type": "STRING",
                "description": "A short, condensed version of the prompt (3-5 lines)."
            },
            "structuredAnalysis": {
                "type": "OBJECT",
                "description": "The breakdown of the prompt components.",
                "properties": {
                    "role": { "type": "STRING" },
                    "task": { "type": "STRING" },
                    "context": { "type": "STRING" },
                    "instructions": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "constraints": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "outputFormat": { "type": "STRING" }
                },
                "required": ["role", "task", "context", "instructions", "constraints", "outputFormat"],
                "propertyOrdering": ["role", "task", "context", "instructions", "constraints", "outputFormat"]
            }
        },
        "required": ["enhancedPrompt", "minimalVersion", "structuredAnalysis"],
        "propertyOrdering": ["enhancedPrompt", "minimalVersion", "structuredAnalysis"]
    })
}

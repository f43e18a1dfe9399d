// Cross-cutting prompt fragments for generative calls.
// Feature-specific prompts live beside their feature (see resume::prompts).

/// Appended to prompts whose output is rendered directly as a document.
pub const HTML_ONLY_INSTRUCTION: &str = "\
    Return only the HTML content without any markdown formatting or explanations.";

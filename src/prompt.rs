/// The fixed instructional prompt sent with every analysis request.
/// Identical for text and audio input; nothing parameterizes it.
pub const ANALYSIS_PROMPT: &str = "You are an expert meeting assistant. \
Analyze the provided meeting content. Summarize the main conclusions that were \
reached and list the actionable tasks that were agreed upon. Format your answer \
with a \"Conclusions:\" section and a \"Tasks:\" section, each using markdown \
list syntax (- item).";

/// Fixed acknowledgement turn used to prime the model in text mode before the
/// transcript is supplied.
pub const TRANSCRIPT_ACK: &str =
    "Understood. Please provide the meeting transcript you would like me to analyze.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_both_sections() {
        assert!(ANALYSIS_PROMPT.contains("Conclusions:"));
        assert!(ANALYSIS_PROMPT.contains("Tasks:"));
    }

    #[test]
    fn prompt_establishes_the_assistant_role() {
        assert!(ANALYSIS_PROMPT.contains("expert meeting assistant"));
    }
}

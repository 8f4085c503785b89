use nt_core::Language;

/// Instruction asking for a 4-6 sentence summary of `content` in `language`.
pub fn build_summary_prompt(content: &str, language: Language) -> String {
    format!(
        "Summarize the following news article in 4-6 sentences in {}.\nArticle:\n{}",
        language.display_name(),
        content.trim()
    )
}

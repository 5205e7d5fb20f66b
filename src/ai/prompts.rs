//! Maps each transform selector onto a natural-language instruction for the
//! text-generation provider. Unknown selectors fall back to the general
//! variant rather than failing.

pub fn improve(text: &str, improvement_type: &str) -> String {
    let instruction = match improvement_type {
        "grammar" => "Fix all grammar, spelling and punctuation errors in the following text. Keep the wording otherwise unchanged and only return the corrected text:",
        "professional" => "Rewrite the following text in a professional, formal tone. Only return the rewritten text:",
        "casual" => "Rewrite the following text in a casual, friendly tone. Only return the rewritten text:",
        "clarity" => "Rewrite the following text to be clearer and easier to understand. Only return the rewritten text:",
        _ => "Improve the following text while preserving its meaning and tone. Only return the improved text:",
    };
    format!("{instruction}\n\n{text}")
}

pub fn translate(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following text to {target_language}. Only return the translation:\n\n{text}"
    )
}

pub fn explain(text: &str, analysis_type: &str) -> String {
    let instruction = match analysis_type {
        "tone" => "Analyze the tone of the following text and describe it briefly:",
        "keywords" => "List the key words and phrases of the following text:",
        "structure" => "Analyze the structure of the following text and describe how it is organized:",
        _ => "Explain the following text in simple terms:",
    };
    format!("{instruction}\n\n{text}")
}

pub fn summarize(text: &str, summary_length: &str) -> String {
    let length = match summary_length {
        "short" => "in one or two sentences",
        "long" => "in a detailed paragraph covering all main points",
        _ => "in a short paragraph",
    };
    format!("Summarize the following text {length}:\n\n{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improve_embeds_text_and_variant() {
        let p = improve("hello world", "grammar");
        assert!(p.contains("hello world"));
        assert!(p.contains("grammar"));
    }

    #[test]
    fn improve_unknown_variant_falls_back_to_general() {
        assert_eq!(improve("x", "nonsense"), improve("x", "general"));
    }

    #[test]
    fn translate_names_the_target_language() {
        let p = translate("hello", "French");
        assert!(p.contains("French"));
        assert!(p.contains("hello"));
    }

    #[test]
    fn explain_variants_differ() {
        let general = explain("x", "general");
        let tone = explain("x", "tone");
        let keywords = explain("x", "keywords");
        let structure = explain("x", "structure");
        assert_ne!(general, tone);
        assert_ne!(tone, keywords);
        assert_ne!(keywords, structure);
    }

    #[test]
    fn summarize_lengths_differ_and_unknown_falls_back_to_medium() {
        assert_ne!(summarize("x", "short"), summarize("x", "long"));
        assert_eq!(summarize("x", "whatever"), summarize("x", "medium"));
    }
}

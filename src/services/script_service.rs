/// Templated script draft for a video topic
#[derive(Debug, Clone)]
pub struct GeneratedScript {
    pub title: String,
    pub outline: Vec<String>,
    pub script: String,
}

/// Deterministic template interpolation; a production system would hand
/// this off to an LLM/TTS pipeline instead.
pub fn generate_script(topic: &str, style: &str, duration_min: i64) -> GeneratedScript {
    let outline = vec![
        format!("Hook: surprising fact about {}", topic),
        format!("What you'll learn in {} minutes", duration_min),
        "Three key ideas".to_string(),
        "Quick demo".to_string(),
        "Call to action".to_string(),
    ];

    let paragraphs = [
        format!(
            "Welcome! In this {} video, we'll cover {} in just {} minutes.",
            style, topic, duration_min
        ),
        format!("First, let's ground the problem: why {} matters.", topic),
        "Then we'll break it down into simple steps you can apply today.".to_string(),
        "Stick around for a short demo and a quick recap!".to_string(),
    ];

    GeneratedScript {
        title: format!("{} in {} minutes", topic, duration_min),
        outline,
        script: paragraphs.join("\n\n"),
    }
}

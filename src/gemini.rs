use serde::{Deserialize, Serialize};

use crate::prompt::{ANALYSIS_PROMPT, TRANSCRIPT_ACK};

const GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Gemini request types
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<Blob>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn audio(mime_type: impl Into<String>, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(Blob {
                mime_type: mime_type.into(),
                data,
            }),
        }
    }
}

#[derive(Serialize)]
struct Blob {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

/// Gemini response types
#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

/// Three-turn text-mode conversation: the instruction, a fixed model
/// acknowledgement, then the literal transcript. Priming the model with the
/// instruction first improves adherence to the requested output format.
fn text_contents(transcript: &str) -> Vec<Content> {
    vec![
        Content {
            role: "user",
            parts: vec![Part::text(ANALYSIS_PROMPT)],
        },
        Content {
            role: "model",
            parts: vec![Part::text(TRANSCRIPT_ACK)],
        },
        Content {
            role: "user",
            parts: vec![Part::text(transcript)],
        },
    ]
}

/// Single audio-mode turn: the instruction alongside the encoded recording
/// tagged with its original MIME type.
fn audio_contents(mime_type: &str, base64_data: String) -> Vec<Content> {
    vec![Content {
        role: "user",
        parts: vec![Part::text(ANALYSIS_PROMPT), Part::audio(mime_type, base64_data)],
    }]
}

/// Analyze a pasted transcript via the Gemini API.
pub async fn analyze_text(
    api_key: &str,
    transcript: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    generate(api_key, text_contents(transcript)).await
}

/// Analyze a base64-encoded audio recording via the Gemini API.
pub async fn analyze_audio(
    api_key: &str,
    mime_type: &str,
    base64_data: String,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    generate(api_key, audio_contents(mime_type, base64_data)).await
}

/// Issue exactly one generateContent call and extract the reply text.
async fn generate(
    api_key: &str,
    contents: Vec<Content>,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    if api_key.is_empty() {
        return Err("No Gemini API key configured".into());
    }

    let url = format!("{GEMINI_URL}?key={api_key}");

    let body = GenerateRequest {
        contents,
        generation_config: GenerationConfig {
            temperature: 0.2,
            max_output_tokens: 2048,
        },
    };

    let client = reqwest::Client::new();
    let resp = client.post(&url).json(&body).send().await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(format!("Gemini API error {status}: {text}").into());
    }

    let gemini_resp: GenerateResponse = resp.json().await?;

    let text = gemini_resp
        .candidates
        .and_then(|c| c.into_iter().next())
        .map(|c| {
            c.content
                .parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .ok_or("Gemini response contained no candidates")?;

    Ok(text.trim().to_string())
}

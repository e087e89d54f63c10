use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Read a file and return its content as a bare base64 string (no data-URL
/// prefix). The read happens on the tokio runtime so the UI stays responsive.
/// No size limit is enforced here; the model backend imposes its own.
pub async fn encode_file(path: &Path) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_file_bytes_exactly() {
        let original: Vec<u8> = (0u8..=255).cycle().take(1024).collect();
        let path = std::env::temp_dir().join("meeting-lens-encoder-test.bin");
        std::fs::write(&path, &original).unwrap();

        let encoded = encode_file(&path).await.unwrap();
        assert!(!encoded.starts_with("data:"));
        assert_eq!(STANDARD.decode(&encoded).unwrap(), original);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn missing_file_fails_with_the_path_in_the_message() {
        let path = std::env::temp_dir().join("meeting-lens-no-such-file.wav");
        let err = encode_file(&path).await.unwrap_err();
        assert!(err.to_string().contains("meeting-lens-no-such-file.wav"));
    }
}

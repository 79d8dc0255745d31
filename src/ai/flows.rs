//! The two AI helper operations

use super::client::{AiClient, AiError, PromptPart};

const DESCRIBE_DOCUMENT_PROMPT: &str = "You are helping a landlord organize tenant paperwork. \
Describe the attached document in exactly one short sentence, naming the kind of document \
and anything notable about it. Answer with the sentence only.";

const DRAFT_NOTICE_PROMPT: &str = "You are drafting a notice from a landlord to a tenant. \
Turn the following bullet points into a short, polite, complete notice. \
Keep it factual and neutral. Answer with the notice text only.\n\nPoints:\n";

impl AiClient {
    /// Describe a document image in one sentence.
    ///
    /// The input must be a base64 `data:` URI; the output is trimmed and
    /// validated non-empty before it is handed back.
    pub fn describe_document(&self, image_data_uri: &str) -> Result<String, AiError> {
        if !image_data_uri.starts_with("data:") || !image_data_uri.contains(";base64,") {
            return Err(AiError::InvalidInput(
                "document image must be a base64 data URI".to_string(),
            ));
        }

        let text = self.generate(vec![
            PromptPart::Text {
                text: DESCRIBE_DOCUMENT_PROMPT,
            },
            PromptPart::Media {
                url: image_data_uri,
            },
        ])?;

        let description = text.trim();
        if description.is_empty() {
            return Err(AiError::Malformed(
                "provider returned an empty description".to_string(),
            ));
        }
        Ok(description.to_string())
    }

    /// Draft the full prose of a notice from free-text bullet points
    pub fn draft_notice(&self, points: &str) -> Result<String, AiError> {
        if points.trim().is_empty() {
            return Err(AiError::InvalidInput(
                "at least one bullet point is required".to_string(),
            ));
        }

        let prompt = format!("{}{}", DRAFT_NOTICE_PROMPT, points.trim());
        let text = self.generate(vec![PromptPart::Text { text: &prompt }])?;

        let body = text.trim();
        if body.is_empty() {
            return Err(AiError::Malformed(
                "provider returned an empty draft".to_string(),
            ));
        }
        Ok(body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;

    fn offline_client() -> AiClient {
        AiClient::new(&AiConfig::default(), "test-key")
    }

    #[test]
    fn test_describe_rejects_non_data_uri() {
        let client = offline_client();
        let err = client.describe_document("https://example.com/lease.png").unwrap_err();
        assert!(matches!(err, AiError::InvalidInput(_)));
    }

    #[test]
    fn test_describe_rejects_unencoded_uri() {
        let client = offline_client();
        let err = client.describe_document("data:text/plain,hello").unwrap_err();
        assert!(matches!(err, AiError::InvalidInput(_)));
    }

    #[test]
    fn test_draft_rejects_empty_points() {
        let client = offline_client();
        let err = client.draft_notice("   \n ").unwrap_err();
        assert!(matches!(err, AiError::InvalidInput(_)));
    }
}

//! Translation service client (MyMemory-compatible API).
//!
//! `GET {base}/get?q=<text>&langpair=<src>|<dst>` -- one request per
//! text; the random-recipe flow issues many of these concurrently.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::CollaboratorError;
use crate::integrations::traits::Translator;

const SERVICE: &str = "translate";

pub struct MyMemoryTranslator {
    client: Client,
    base_url: String,
}

impl MyMemoryTranslator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        dest: &str,
    ) -> Result<String, CollaboratorError> {
        let response = self
            .client
            .get(format!("{}/get", self.base_url))
            .query(&[("q", text), ("langpair", &format!("{source}|{dest}"))])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }
        let payload: TranslateResponse = response.json().await?;
        payload
            .response_data
            .and_then(|data| data.translated_text)
            .ok_or_else(|| CollaboratorError::Malformed {
                service: SERVICE,
                message: "no translatedText in response".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_translate_parses_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/get")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Chicken Soup".into()),
                Matcher::UrlEncoded("langpair".into(), "en|ru".into()),
            ]))
            .with_body(r#"{"responseData": {"translatedText": "Куриный суп"}}"#)
            .create_async()
            .await;

        let translator = MyMemoryTranslator::new(server.url());
        let translated = translator.translate("Chicken Soup", "en", "ru").await.unwrap();
        assert_eq!(translated, "Куриный суп");
    }

    #[tokio::test]
    async fn test_missing_translation_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/get")
            .match_query(Matcher::Any)
            .with_body(r#"{"responseData": {}}"#)
            .create_async()
            .await;

        let translator = MyMemoryTranslator::new(server.url());
        let err = translator.translate("Soup", "en", "ru").await.unwrap_err();
        assert!(matches!(err, CollaboratorError::Malformed { .. }));
    }
}

use serde::{Deserialize, Serialize};

/// `object_type: "text"` message template
#[derive(Debug, Clone, Serialize)]
pub struct TextTemplate<'a> {
    pub object_type: &'static str,
    pub text: &'a str,
    pub link: TemplateLink<'a>,
    pub button_title: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateLink<'a> {
    pub web_url: &'a str,
}

impl<'a> TextTemplate<'a> {
    pub fn new(text: &'a str, web_url: &'a str, button_title: &'a str) -> Self {
        Self {
            object_type: "text",
            text,
            link: TemplateLink { web_url },
            button_title,
        }
    }
}

/// Body of a successful `grant_type=refresh_token` call.
///
/// `refresh_token` is only present when Kakao rotated it.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_template_shape() {
        let template =
            TextTemplate::new("안녕", "https://news.google.com/?hl=ko&gl=KR", "더 보기");
        let value = serde_json::to_value(&template).unwrap();

        assert_eq!(value["object_type"], "text");
        assert_eq!(value["text"], "안녕");
        assert_eq!(value["link"]["web_url"], "https://news.google.com/?hl=ko&gl=KR");
        assert_eq!(value["button_title"], "더 보기");
    }

    #[test]
    fn test_token_response_without_rotation() {
        let body = r#"{"access_token":"abc","token_type":"bearer","expires_in":21599}"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.refresh_token, None);
        assert_eq!(token.expires_in, Some(21599));
    }

    #[test]
    fn test_token_response_with_rotation() {
        let body = r#"{"access_token":"abc","refresh_token":"new-refresh"}"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(token.refresh_token.as_deref(), Some("new-refresh"));
    }
}

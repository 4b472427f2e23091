use super::ContactFormData;

/// Hands a `mailto:` URI to the host's default mail client.
pub trait MailHandoff {
    fn open(&self, uri: &str);
}

pub fn fallback_body(data: &ContactFormData) -> String {
    format!(
        "Email: {}\nSubject: {}\n\nMessage:\n{}",
        data.email, data.subject, data.message
    )
}

pub fn mailto_uri(recipient: &str, data: &ContactFormData) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&data.subject),
        urlencoding::encode(&fallback_body(data))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_param<'a>(uri: &'a str, name: &str) -> &'a str {
        let query = uri.split_once('?').map(|(_, q)| q).unwrap_or_default();
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{name}=")))
            .unwrap_or_default()
    }

    #[test]
    fn test_uri_shape() {
        let data = ContactFormData::new("me@site.dev", "Hello", "Some message body");
        let uri = mailto_uri("owner@example.com", &data);
        assert!(uri.starts_with("mailto:owner@example.com?subject=Hello&body="));
    }

    #[test]
    fn test_reserved_characters_round_trip() {
        let data = ContactFormData::new(
            "x+y@site.dev",
            "Q&A: 100% = ok?",
            "Line one\nLine two & more #hash ñ",
        );
        let uri = mailto_uri("owner@example.com", &data);

        let subject = urlencoding::decode(query_param(&uri, "subject")).unwrap();
        let body = urlencoding::decode(query_param(&uri, "body")).unwrap();
        assert_eq!(subject, data.subject);
        assert_eq!(body, fallback_body(&data));
        assert!(body.contains("Email: x+y@site.dev"));
        assert!(body.ends_with("Message:\nLine one\nLine two & more #hash ñ"));
    }
}

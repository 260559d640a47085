use serde::de::DeserializeOwned;

use crate::{wire, LadderError};

/// Unwraps a 2xx response body from the backend's `{success, data}`
/// envelope. A 2xx body that is not valid JSON, reports `success: false`,
/// or lacks `data` is a contract violation and never retried.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, LadderError> {
    let envelope: wire::Envelope<T> = serde_json::from_str(body).map_err(|err| {
        LadderError::Decode(format!("invalid response envelope JSON: {err}; body: {body}"))
    })?;

    if !envelope.success {
        return Err(LadderError::Decode(format!(
            "envelope reports success=false on a 2xx response; body: {body}"
        )));
    }

    envelope.data.ok_or_else(|| {
        LadderError::Decode(format!("missing data payload in response envelope; body: {body}"))
    })
}

/// Extracts `(message, code)` from a non-2xx body. Best-effort: a body that
/// is not the backend's error envelope (a bare proxy page, an empty body)
/// falls back to the raw text or the status line.
pub(crate) fn decode_error_parts(status: u16, body: &str) -> (String, Option<String>) {
    match serde_json::from_str::<wire::ErrorBody>(body) {
        Ok(parsed) => {
            let code = parsed.code;
            let message = parsed
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| fallback_message(status, body));
            (message, code)
        }
        Err(_) => (fallback_message(status, body), None),
    }
}

fn fallback_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("http status {status} with empty body")
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use crate::{decode, types::Player, LadderError};

    #[test]
    fn decode_envelope_unwraps_data() {
        let body = r#"{"success":true,"data":{"username":"kit","rating":1500.0}}"#;
        let player: Player = decode::decode_envelope(body).expect("must decode");
        assert_eq!(player.username, "kit");
        assert_eq!(player.rating, 1500.0);
        assert_eq!(player.rank, None);
    }

    #[test]
    fn decode_envelope_rejects_success_false() {
        let body = r#"{"success":false,"data":{"username":"kit","rating":1500.0}}"#;
        let err = decode::decode_envelope::<Player>(body).expect_err("must fail");
        assert!(matches!(err, LadderError::Decode(_)));
    }

    #[test]
    fn decode_envelope_rejects_missing_data() {
        let body = r#"{"success":true}"#;
        let err = decode::decode_envelope::<Player>(body).expect_err("must fail");
        assert!(matches!(err, LadderError::Decode(_)));
    }

    #[test]
    fn decode_envelope_rejects_invalid_json() {
        let err = decode::decode_envelope::<Player>("<html>oops</html>").expect_err("must fail");
        assert!(matches!(err, LadderError::Decode(_)));
    }

    #[test]
    fn decode_error_parts_reads_message_and_code() {
        let body = r#"{"success":false,"message":"user not found","code":"USER_NOT_FOUND"}"#;
        let (message, code) = decode::decode_error_parts(404, body);
        assert_eq!(message, "user not found");
        assert_eq!(code.as_deref(), Some("USER_NOT_FOUND"));
    }

    #[test]
    fn decode_error_parts_falls_back_to_raw_body() {
        let (message, code) = decode::decode_error_parts(502, "Bad Gateway");
        assert_eq!(message, "Bad Gateway");
        assert_eq!(code, None);
    }

    #[test]
    fn decode_error_parts_falls_back_to_status_line_on_empty_body() {
        let (message, code) = decode::decode_error_parts(500, "   ");
        assert_eq!(message, "http status 500 with empty body");
        assert_eq!(code, None);
    }
}

//! Response validation and line splitting

use crate::error::FetchError;
use aoc_http_client::InputResponse;

/// Turn a transport response into input lines
///
/// Anything outside `200..=299` is rejected with the received code. A 2xx body
/// loses its trailing whitespace and is split on `\n` / `\r\n`.
pub(crate) fn response_lines(response: InputResponse) -> Result<Vec<String>, FetchError> {
    if !response.is_success() {
        return Err(FetchError::UnexpectedStatus(response.status));
    }
    Ok(split_lines(&response.body))
}

pub(crate) fn split_lines(body: &str) -> Vec<String> {
    body.trim_end().lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn response(status: u16, body: &str) -> InputResponse {
        InputResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_only_trailing_whitespace_is_stripped() {
        assert_eq!(split_lines("a\nb\nc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("1\n2\n3 and me\n"), vec!["1", "2", "3 and me"]);
        assert_eq!(split_lines("  x \n\n y\n\n\n"), vec!["  x ", "", " y"]);
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert!(split_lines("\n\n").is_empty());
    }

    #[test]
    fn test_unexpected_status_message() {
        let err = response_lines(response(400, "bad")).unwrap_err();
        assert!(matches!(err, FetchError::UnexpectedStatus(400)));
        assert_eq!(err.to_string(), "Unexpected response code 400");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_status_outside_2xx_is_rejected(
            status in prop::sample::select(vec![100u16, 199, 300, 302, 304, 400, 404, 500, 503]),
        ) {
            let err = response_lines(response(status, "ignored")).unwrap_err();
            prop_assert_eq!(err.to_string(), format!("Unexpected response code {}", status));
        }

        #[test]
        fn prop_2xx_lines_survive(
            status in 200u16..=299u16,
            lines in prop::collection::vec("[a-z0-9 ]{0,10}[a-z0-9]", 1..20),
        ) {
            let body = format!("{}\n", lines.join("\n"));
            let parsed = response_lines(response(status, &body)).unwrap();
            prop_assert_eq!(parsed, lines);
        }
    }
}

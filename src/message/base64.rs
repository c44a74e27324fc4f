use ::base64::{engine::general_purpose::STANDARD, Engine};

/// MIME convention column width for encoded bodies.
const WRAP_COLUMNS: usize = 100;

/// Encodes `body` as standard Base64 and hard-wraps the result into
/// 100-character lines joined with `\n`. The last line may be shorter; an
/// empty input yields an empty string.
pub(crate) fn encode_wrapped(body: &str) -> String {
    let encoded = STANDARD.encode(body);
    let mut lines = Vec::with_capacity(encoded.len() / WRAP_COLUMNS + 1);
    let mut rest = encoded.as_str();
    while !rest.is_empty() {
        // Base64 output is pure ASCII, splitting on a byte index is safe
        let (line, tail) = rest.split_at(rest.len().min(WRAP_COLUMNS));
        lines.push(line);
        rest = tail;
    }
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use ::base64::{engine::general_purpose::STANDARD, Engine};
    use pretty_assertions::assert_eq;

    use super::encode_wrapped;

    #[test]
    fn short_body_is_a_single_line() {
        assert_eq!(encode_wrapped("This is the body"), "VGhpcyBpcyB0aGUgYm9keQ==");
    }

    #[test]
    fn empty_body_encodes_to_nothing() {
        assert_eq!(encode_wrapped(""), "");
    }

    #[test]
    fn long_body_wraps_at_100_columns() {
        let body = "a".repeat(120);
        let wrapped = encode_wrapped(&body);

        let lines: Vec<&str> = wrapped.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 100);
        assert!(lines[1].len() <= 100);
        assert!(!lines[1].is_empty());
    }

    #[test]
    fn wrapped_output_decodes_to_the_original_bytes() {
        let body = "<html><body><p>Hello, world! Привет мир!</p></body></html>".repeat(5);
        let wrapped = encode_wrapped(&body);

        for line in wrapped.split('\n') {
            assert!(line.len() <= 100);
        }
        let rejoined: String = wrapped.split('\n').collect();
        assert_eq!(STANDARD.decode(rejoined).unwrap(), body.as_bytes());
    }
}

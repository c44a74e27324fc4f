use fastrand::Rng;

const INITIAL_BOUNDARY: &str = "boundary";
const BOUNDARY_LENGTH: usize = 15;

/// Picks a multipart boundary that no line of the plaintext alternative
/// collides with.
///
/// The candidate starts as the literal token `boundary`. If the plaintext
/// contains a line that is exactly `--` followed by the candidate, a fresh
/// 15-character alphanumeric token is drawn from `rng` and re-checked, until
/// a non-colliding token is found. Only the plaintext part is inspected: the
/// HTML part is Base64 encoded and can never contain a literal delimiter
/// line.
pub(crate) fn generate(plaintext: Option<&str>, rng: &mut Rng) -> String {
    let mut boundary = INITIAL_BOUNDARY.to_string();
    while collides(&boundary, plaintext) {
        boundary = (0..BOUNDARY_LENGTH).map(|_| rng.alphanumeric()).collect();
    }
    boundary
}

fn collides(boundary: &str, plaintext: Option<&str>) -> bool {
    let Some(plaintext) = plaintext else {
        return false;
    };
    plaintext
        .split('\n')
        .any(|line| line.strip_prefix("--") == Some(boundary))
}

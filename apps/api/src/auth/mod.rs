// Accounts: signup and login against the document store.
// Passwords are only ever stored as Argon2 hashes.

pub mod handlers;
pub mod password;

/// Trims and lower-cases an account email, rejecting obviously invalid input.
/// Emails inside parsed resumes are free text and never go through here.
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    let (local, domain) = email.split_once('@')?;

    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    let no_spaces = !email.chars().any(char::is_whitespace);

    (!local.is_empty() && domain_ok && no_spaces).then_some(email)
}

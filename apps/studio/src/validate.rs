//! Contact form checks run before handing fields to the submission client.

use shared::protocol::ContactFields;

pub fn validate_contact(fields: &ContactFields) -> Result<(), String> {
    for (label, value) in [
        ("name", &fields.name),
        ("email", &fields.email),
        ("subject", &fields.subject),
        ("message", &fields.message),
    ] {
        if value.trim().is_empty() {
            return Err(format!("{label} must not be empty"));
        }
    }
    if !looks_like_email(fields.email.trim()) {
        return Err(format!("'{}' is not a valid email address", fields.email));
    }
    Ok(())
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

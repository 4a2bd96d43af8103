//! Form checks applied before a record is sent to the server
//!
//! The server accepts any well-typed record. These rules only guard
//! against obvious typos at the command line.

use anyhow::Result;
use crud_core::dto::record::RecordPayload;

const MIN_TEXT_LEN: usize = 2;
const AGE_RANGE: std::ops::RangeInclusive<i32> = 1..=120;

/// Reject payloads with short names or cities, or an implausible age
pub fn validate_payload(payload: &RecordPayload) -> Result<()> {
    let mut problems = Vec::new();

    if !long_enough(payload.name.as_deref()) {
        problems.push(format!("Name must be at least {} characters", MIN_TEXT_LEN));
    }

    if !AGE_RANGE.contains(&payload.age) {
        problems.push(format!(
            "Age must be between {} and {}",
            AGE_RANGE.start(),
            AGE_RANGE.end()
        ));
    }

    if !long_enough(payload.city.as_deref()) {
        problems.push(format!("City must be at least {} characters", MIN_TEXT_LEN));
    }

    if !problems.is_empty() {
        anyhow::bail!("{}", problems.join("; "));
    }

    Ok(())
}

fn long_enough(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().chars().count() >= MIN_TEXT_LEN)
}

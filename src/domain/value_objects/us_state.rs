//! Two-letter codes accepted for the `state` field.

/// The 50 US states plus the District of Columbia.
pub const US_STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Normalize a submitted state to its canonical code, if it is known.
pub fn normalize_state(input: &str) -> Option<&'static str> {
    let wanted = input.trim();
    US_STATES
        .iter()
        .copied()
        .find(|code| code.eq_ignore_ascii_case(wanted))
}

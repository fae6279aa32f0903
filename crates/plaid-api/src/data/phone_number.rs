use serde::Deserialize;

/// A user's phone number, as returned by Plaid.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    /// Whether or not the user has chosen this as their primary phone number.
    pub primary: bool,
    /// The type of the phone number (e.g personal, home).
    #[serde(rename = "type")]
    pub phone_number_type: String,
    /// The actual phone number. Never parsed, so leading zeros survive.
    #[serde(rename = "data")]
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_phone_number() {
        let x: PhoneNumber = serde_json::from_value(json!({
            "primary": true,
            "type": "home",
            "data": "4673956022"
        }))
        .unwrap();

        assert!(x.primary);
        assert_eq!(x.phone_number_type, "home");
        assert_eq!(x.phone_number, "4673956022");
    }
}

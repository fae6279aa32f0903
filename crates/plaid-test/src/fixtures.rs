//! Response bodies as returned by the sandbox.

/// `Connect` data after authenticating without MFA, including the `access_token`.
pub const CONNECT_SUCCESS: &str = include_str!("../fixtures/connect_success.json");

/// `Connect` data as returned by a data fetch.
pub const CONNECT_GET: &str = include_str!("../fixtures/connect_get.json");

/// An MFA challenge offering two devices to send a code to.
pub const MFA_DEVICE_LIST: &str = include_str!("../fixtures/mfa_device_list.json");

/// An MFA challenge announcing that a code was sent.
pub const MFA_CODE: &str = include_str!("../fixtures/mfa_code.json");

/// An MFA challenge with security questions.
pub const MFA_QUESTIONS: &str = include_str!("../fixtures/mfa_questions.json");

/// `Auth` data, with account and routing numbers.
pub const AUTH_SUCCESS: &str = include_str!("../fixtures/auth_success.json");

/// `Info` data.
pub const INFO_GET: &str = include_str!("../fixtures/info_get.json");

/// The error returned when the product isn't enabled for the user.
pub const PRODUCT_NOT_ENABLED: &str = include_str!("../fixtures/product_not_enabled.json");

/// The error returned for wrong client credentials.
pub const INVALID_CREDENTIALS: &str = include_str!("../fixtures/invalid_credentials.json");

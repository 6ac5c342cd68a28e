use std::collections::BTreeMap;

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResetField {
    Token,
    UserId,
    Password,
    ConfirmPassword,
}

impl ResetField {
    pub const ALL: [ResetField; 4] = [
        ResetField::Token,
        ResetField::UserId,
        ResetField::Password,
        ResetField::ConfirmPassword,
    ];

    /// Form control id, matching the wire field name.
    pub fn as_str(self) -> &'static str {
        match self {
            ResetField::Token => "token",
            ResetField::UserId => "userId",
            ResetField::Password => "password",
            ResetField::ConfirmPassword => "confirm_password",
        }
    }
}

/// At most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ResetField, String>);

impl FieldErrors {
    pub fn get(&self, field: ResetField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ResetField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn record(&mut self, field: ResetField, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(msg) => {
                self.0.insert(field, msg);
            }
        }
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    let length = password.chars().count();
    if length == 0 {
        return Err(t!("auth.password_required").to_string());
    }
    if length < PASSWORD_MIN_LENGTH {
        return Err(t!("auth.password_min_length", min = PASSWORD_MIN_LENGTH).to_string());
    }
    if length > PASSWORD_MAX_LENGTH {
        return Err(t!("auth.password_max_length", max = PASSWORD_MAX_LENGTH).to_string());
    }
    Ok(())
}

pub fn validate_confirm_password(password: &str, confirm_password: &str) -> Result<(), String> {
    if password == confirm_password {
        Ok(())
    } else {
        Err(t!("auth.password_not_match").to_string())
    }
}

pub fn validate_token(token: &str) -> Result<(), String> {
    if token.is_empty() {
        return Err(t!("auth.error_missing_reset_token").to_string());
    }
    Ok(())
}

pub fn validate_user_id(user_id: &str) -> Result<(), String> {
    if user_id.is_empty() {
        return Err(t!("auth.error_missing_user_id").to_string());
    }
    Ok(())
}

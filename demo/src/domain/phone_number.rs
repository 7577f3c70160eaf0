use mediate_domain::error::DomainError;
use mediate_domain::value_object::ValueObject;
use mediate_macros::value_object;

/// 电话号码值对象
///
/// 规则：可选 `+` 前缀，其余为 7..=15 位数字。
/// 通过智能构造器 [`PhoneNumber::create`] 构造，
/// 非法输入返回 `None`，绝不产出部分合法的实例。
#[value_object]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const MIN_DIGITS: usize = 7;
    pub const MAX_DIGITS: usize = 15;

    pub fn create(raw: &str) -> Option<Self> {
        let candidate = Self(raw.trim().to_string());
        candidate.validate().ok().map(|_| candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn digits(&self) -> &str {
        self.0.strip_prefix('+').unwrap_or(&self.0)
    }
}

impl ValueObject for PhoneNumber {
    type Error = DomainError;

    fn validate(&self) -> Result<(), DomainError> {
        let digits = self.digits();
        let digits_only = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());
        let in_range = (Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len());

        if digits_only && in_range {
            Ok(())
        } else {
            Err(DomainError::InvalidValue {
                reason: format!("phone number has not valid format: {}", self.0),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_prefixed_numbers() {
        assert!(PhoneNumber::create("34612345678").is_some());
        assert!(PhoneNumber::create("+34612345678").is_some());
        assert_eq!(
            PhoneNumber::create(" 5551234567 ").unwrap().as_str(),
            "5551234567"
        );
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in ["", "abc", "12ab34", "123", "1234567890123456", "+"] {
            assert!(PhoneNumber::create(raw).is_none(), "accepted {raw:?}");
        }
    }
}

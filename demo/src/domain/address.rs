use mediate_domain::error::DomainError;
use mediate_domain::value_object::ValueObject;
use mediate_macros::value_object;

/// 邮政地址值对象
///
/// `line2` 允许为空，其余字段必填；邮编为 4..=10 位数字。
#[value_object]
pub struct Address {
    country: String,
    line1: String,
    line2: String,
    city: String,
    state: String,
    zip_code: String,
}

impl Address {
    pub fn create(
        country: &str,
        line1: &str,
        line2: &str,
        city: &str,
        state: &str,
        zip_code: &str,
    ) -> Option<Self> {
        let candidate = Self {
            country: country.trim().to_string(),
            line1: line1.trim().to_string(),
            line2: line2.trim().to_string(),
            city: city.trim().to_string(),
            state: state.trim().to_string(),
            zip_code: zip_code.trim().to_string(),
        };
        candidate.validate().ok().map(|_| candidate)
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn line2(&self) -> &str {
        &self.line2
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

impl ValueObject for Address {
    type Error = DomainError;

    fn validate(&self) -> Result<(), DomainError> {
        let required = [
            &self.country,
            &self.line1,
            &self.city,
            &self.state,
            &self.zip_code,
        ];
        let filled = required.iter().all(|field| !field.is_empty());
        let zip_ok = (4..=10).contains(&self.zip_code.len())
            && self.zip_code.chars().all(|c| c.is_ascii_digit());

        if filled && zip_ok {
            Ok(())
        } else {
            Err(DomainError::InvalidValue {
                reason: "address has not valid format".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Option<Address> {
        Address::create("Spain", "Calle Mayor 1", "", "Madrid", "Madrid", "28001")
    }

    #[test]
    fn accepts_complete_address_with_empty_line2() {
        let address = valid().unwrap();
        assert_eq!(address.country(), "Spain");
        assert_eq!(address.line2(), "");
    }

    #[test]
    fn rejects_missing_required_fields() {
        assert!(Address::create("", "Calle Mayor 1", "", "Madrid", "Madrid", "28001").is_none());
        assert!(Address::create("Spain", "", "", "Madrid", "Madrid", "28001").is_none());
        assert!(Address::create("Spain", "Calle Mayor 1", "", "", "Madrid", "28001").is_none());
    }

    #[test]
    fn rejects_bad_zip_code() {
        assert!(Address::create("Spain", "Calle Mayor 1", "", "Madrid", "Madrid", "28A01").is_none());
        assert!(Address::create("Spain", "Calle Mayor 1", "", "Madrid", "Madrid", "12").is_none());
    }
}

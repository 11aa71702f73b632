use super::domain::ContactDetails;

const MIN_PHONE_DIGITS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactViolation {
    #[error("contact name is required")]
    MissingName,
    #[error("email address '{0}' is not valid")]
    InvalidEmail(String),
    #[error("company name is required")]
    MissingCompany,
    #[error("phone number '{0}' must contain at least 7 digits")]
    InvalidPhone(String),
}

/// Checks the contact form and returns a trimmed copy ready for storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactGuard;

impl ContactGuard {
    pub fn validate(&self, contact: ContactDetails) -> Result<ContactDetails, ContactViolation> {
        let name = contact.name.trim().to_string();
        if name.is_empty() {
            return Err(ContactViolation::MissingName);
        }

        let email = contact.email.trim().to_ascii_lowercase();
        if !is_plausible_email(&email) {
            return Err(ContactViolation::InvalidEmail(contact.email));
        }

        let company = contact.company.trim().to_string();
        if company.is_empty() {
            return Err(ContactViolation::MissingCompany);
        }

        let phone = contact
            .phone
            .map(|phone| phone.trim().to_string())
            .filter(|phone| !phone.is_empty());
        if let Some(phone) = &phone {
            let digits = phone.chars().filter(char::is_ascii_digit).count();
            if digits < MIN_PHONE_DIGITS {
                return Err(ContactViolation::InvalidPhone(phone.clone()));
            }
        }

        Ok(ContactDetails {
            name,
            email,
            company,
            phone,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split('.')
            .filter(|label| !label.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactDetails {
        ContactDetails {
            name: " Dana Whitfield ".to_string(),
            email: "Dana@Whitfield-Legal.com".to_string(),
            company: "Whitfield Legal".to_string(),
            phone: Some("(515) 555-0142".to_string()),
        }
    }

    #[test]
    fn trims_and_lowercases_valid_contact() {
        let validated = ContactGuard.validate(contact()).expect("valid contact");
        assert_eq!(validated.name, "Dana Whitfield");
        assert_eq!(validated.email, "dana@whitfield-legal.com");
    }

    #[test]
    fn blank_phone_is_treated_as_absent() {
        let validated = ContactGuard
            .validate(ContactDetails {
                phone: Some("   ".to_string()),
                ..contact()
            })
            .expect("valid contact");
        assert!(validated.phone.is_none());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["dana", "@whitfield.com", "dana@whitfield", "a@b@c.com", "dana@.com"] {
            let result = ContactGuard.validate(ContactDetails {
                email: email.to_string(),
                ..contact()
            });
            assert_eq!(
                result,
                Err(ContactViolation::InvalidEmail(email.to_string())),
                "{email}"
            );
        }
    }

    #[test]
    fn rejects_short_phone_numbers() {
        let result = ContactGuard.validate(ContactDetails {
            phone: Some("555-01".to_string()),
            ..contact()
        });
        assert!(matches!(result, Err(ContactViolation::InvalidPhone(_))));
    }
}

//! Payment method and card checks done before an order is sent.

use super::CheckoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    Cash,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
}

impl CardDetails {
    pub fn digits(&self) -> String {
        self.card_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }

    pub fn last4(&self) -> String {
        let digits = self.digits();
        digits[digits.len().saturating_sub(4)..].to_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDetails {
    Cash,
    Card(CardDetails),
}

impl PaymentDetails {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentDetails::Cash => PaymentMethod::Cash,
            PaymentDetails::Card(_) => PaymentMethod::CreditCard,
        }
    }

    pub fn validate(&self) -> Result<(), CheckoutError> {
        let PaymentDetails::Card(card) = self else {
            return Ok(());
        };

        let blank = [
            &card.card_number,
            &card.expiry_date,
            &card.cvv,
            &card.cardholder_name,
        ]
        .iter()
        .any(|field| field.trim().is_empty());
        if blank {
            return Err(CheckoutError::MissingCardDetails);
        }
        if card.card_number.chars().filter(|c| !c.is_whitespace()).count() < 16 {
            return Err(CheckoutError::InvalidCardNumber);
        }
        if card.cvv.chars().count() < 3 {
            return Err(CheckoutError::InvalidCvv);
        }
        Ok(())
    }
}

/// Groups the first run of 4 to 16 digits in blocks of four, e.g. `4111 1111 1111 1111`.
/// Input with fewer than four digits is returned as the bare digits.
pub fn format_card_number(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return digits;
    }
    let digits = &digits[..digits.len().min(16)];
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the first four digits as `MM/YY`.
pub fn format_expiry_date(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 2 {
        return digits;
    }
    let end = digits.len().min(4);
    format!("{}/{}", &digits[..2], &digits[2..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardDetails {
        CardDetails {
            card_number: "4111 1111 1111 1111".to_owned(),
            expiry_date: "12/29".to_owned(),
            cvv: "123".to_owned(),
            cardholder_name: "A Customer".to_owned(),
        }
    }

    #[test]
    fn cash_needs_no_details() {
        assert!(PaymentDetails::Cash.validate().is_ok());
    }

    #[test]
    fn complete_card_is_valid() {
        assert!(PaymentDetails::Card(card()).validate().is_ok());
    }

    #[test]
    fn blank_card_field_is_rejected() {
        let details = PaymentDetails::Card(CardDetails {
            cardholder_name: " ".to_owned(),
            ..card()
        });
        assert!(matches!(details.validate(), Err(CheckoutError::MissingCardDetails)));
    }

    #[test]
    fn short_card_number_is_rejected() {
        let details = PaymentDetails::Card(CardDetails {
            card_number: "4111 1111 1111".to_owned(),
            ..card()
        });
        assert!(matches!(details.validate(), Err(CheckoutError::InvalidCardNumber)));
    }

    #[test]
    fn short_cvv_is_rejected() {
        let details = PaymentDetails::Card(CardDetails {
            cvv: "12".to_owned(),
            ..card()
        });
        assert!(matches!(details.validate(), Err(CheckoutError::InvalidCvv)));
    }

    #[test]
    fn payment_methods_use_backend_names() {
        assert_eq!(PaymentMethod::CreditCard.to_string(), "CREDIT_CARD");
        assert_eq!(
            serde_json::to_value(PaymentMethod::Cash).unwrap(),
            serde_json::json!("CASH")
        );
    }

    #[test]
    fn last4_ignores_spacing() {
        assert_eq!(card().last4(), "1111");
        let odd = CardDetails {
            card_number: "4000 0000 0000 0002".to_owned(),
            ..card()
        };
        assert_eq!(odd.last4(), "0002");
    }

    #[test]
    fn card_numbers_are_grouped_in_fours() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4111-1111-11"), "4111 1111 11");
        assert_eq!(format_card_number("41"), "41");
    }

    #[test]
    fn expiry_dates_get_a_slash() {
        assert_eq!(format_expiry_date("1229"), "12/29");
        assert_eq!(format_expiry_date("12"), "12/");
        assert_eq!(format_expiry_date("1"), "1");
    }
}

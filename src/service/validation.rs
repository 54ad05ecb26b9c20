//! Request payload validation, applied before any storage call.

use crate::error::AppError;
use crate::models::BookPayload;

/// The only enforced rule: `price` must be strictly positive. Title/author
/// emptiness is deliberately not checked here; the store's NOT NULL
/// constraints reject missing values, and empty strings are legal.
pub fn validate_payload(payload: &BookPayload) -> Result<(), AppError> {
    if payload.price <= 0 {
        return Err(AppError::Validation(format!(
            "price must be greater than 0, got {}",
            payload.price
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(price: i64) -> BookPayload {
        BookPayload {
            title: Some("A".into()),
            author: Some("B".into()),
            publisher: None,
            price,
            publish_date: None,
            isbn: None,
            cover_url: None,
        }
    }

    #[test]
    fn rejects_zero_and_negative_price() {
        assert!(validate_payload(&payload(0)).is_err());
        assert!(validate_payload(&payload(-5)).is_err());
    }

    #[test]
    fn accepts_price_of_one() {
        assert!(validate_payload(&payload(1)).is_ok());
    }

    #[test]
    fn empty_title_and_author_pass_validation() {
        let mut p = payload(100);
        p.title = Some(String::new());
        p.author = Some(String::new());
        assert!(validate_payload(&p).is_ok());
    }

    #[test]
    fn missing_title_passes_validation() {
        // NULL title is the store's problem (NOT NULL), not validation's.
        let mut p = payload(100);
        p.title = None;
        assert!(validate_payload(&p).is_ok());
    }
}

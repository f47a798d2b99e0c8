//! Parsing and validation gates for raw user input.
//!
//! The screens hand text fields through here before anything reaches a
//! store: the stock form before a product is created, the composition
//! dialog before a quantity becomes a line item. On failure a single
//! combined message is surfaced and no state is mutated.

use crate::catalog_actor::CatalogError;
use crate::model::{ImageRef, ProductCreate};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the stock intake gate.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// One combined message; the form does not say which field failed.
    #[error("Fill in every field correctly to add the product.")]
    InvalidInput,

    /// The catalog store could not be reached.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parses a quantity field: a whole number greater than zero.
pub fn parse_positive_quantity(text: &str) -> Option<u32> {
    match text.trim().parse::<u32>() {
        Ok(value) if value > 0 => Some(value),
        _ => None,
    }
}

/// Parses a price field: a decimal greater than zero.
pub fn parse_positive_price(text: &str) -> Option<Decimal> {
    match text.trim().parse::<Decimal>() {
        Ok(value) if value > Decimal::ZERO => Some(value),
        _ => None,
    }
}

/// Validates the stock form as a whole. Valid iff the name is non-empty,
/// price and quantity parse to positive values, and an image was picked.
/// Runs before the catalog create; the catalog itself does not validate.
pub fn validate_product_input(
    name: &str,
    price_text: &str,
    quantity_text: &str,
    image: Option<&ImageRef>,
) -> Result<ProductCreate, IntakeError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(IntakeError::InvalidInput);
    }
    let price = parse_positive_price(price_text).ok_or(IntakeError::InvalidInput)?;
    let quantity = parse_positive_quantity(quantity_text).ok_or(IntakeError::InvalidInput)?;
    let image = image.ok_or(IntakeError::InvalidInput)?;

    Ok(ProductCreate {
        name: name.to_string(),
        price,
        quantity,
        image: image.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> ImageRef {
        ImageRef::from("file:///photos/caneta.jpg")
    }

    #[test]
    fn accepts_a_fully_filled_form() {
        let params = validate_product_input("Caneta", "2.50", "100", Some(&image())).unwrap();
        assert_eq!(params.name, "Caneta");
        assert_eq!(params.price, "2.50".parse().unwrap());
        assert_eq!(params.quantity, 100);
    }

    #[test]
    fn rejects_each_missing_or_malformed_field() {
        let img = image();
        let cases: [(&str, &str, &str, Option<&ImageRef>); 7] = [
            ("", "2.50", "100", Some(&img)),
            ("  ", "2.50", "100", Some(&img)),
            ("Caneta", "", "100", Some(&img)),
            ("Caneta", "-1", "100", Some(&img)),
            ("Caneta", "2.50", "0", Some(&img)),
            ("Caneta", "2.50", "abc", Some(&img)),
            ("Caneta", "2.50", "100", None),
        ];
        for (name, price, quantity, image) in cases {
            let result = validate_product_input(name, price, quantity, image);
            assert!(
                matches!(result, Err(IntakeError::InvalidInput)),
                "expected rejection for ({name:?}, {price:?}, {quantity:?})"
            );
        }
    }

    #[test]
    fn quantity_must_be_a_whole_number() {
        assert_eq!(parse_positive_quantity("3"), Some(3));
        assert_eq!(parse_positive_quantity(" 3 "), Some(3));
        assert_eq!(parse_positive_quantity("0"), None);
        assert_eq!(parse_positive_quantity("-2"), None);
        assert_eq!(parse_positive_quantity("2.5"), None);
        assert_eq!(parse_positive_quantity("abc"), None);
    }

    #[test]
    fn price_parses_as_exact_decimal() {
        assert_eq!(parse_positive_price("2.50"), Some("2.50".parse().unwrap()));
        assert_eq!(parse_positive_price("0"), None);
        assert_eq!(parse_positive_price("-0.01"), None);
        assert_eq!(parse_positive_price("R$2.50"), None);
    }
}

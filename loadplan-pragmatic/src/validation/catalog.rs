#[cfg(test)]
#[path = "../../tests/unit/validation/catalog_test.rs"]
mod catalog_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks that catalog has no product types with duplicate ids.
fn check_e1300_no_product_types_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.product_types().map(|product_type| &product_type.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1300".to_string(),
            "duplicated product type ids".to_string(),
            format!("remove duplicated product type ids: {}", ids.join(", ")),
        ))
    })
}

/// Validates product type catalog.
pub fn validate_catalog(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[check_e1300_no_product_types_with_duplicate_ids(ctx)])
}

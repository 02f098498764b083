#[cfg(test)]
#[path = "../../tests/unit/validation/orders_test.rs"]
mod orders_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks that problem has no orders with duplicate ids.
fn check_e1000_no_orders_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.orders().map(|order| &order.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1000".to_string(),
            "duplicated order ids".to_string(),
            format!("remove duplicated order ids: {}", ids.join(", ")),
        ))
    })
}

/// Checks that palette ids are unique across all orders.
fn check_e1001_no_palettes_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.orders().flat_map(|order| order.palettes.iter()).map(|palette| &palette.id)).map_or(
        Ok(()),
        |ids| {
            Err(FormatError::new(
                "E1001".to_string(),
                "duplicated palette ids".to_string(),
                format!("remove duplicated palette ids: {}", ids.join(", ")),
            ))
        },
    )
}

/// Checks that order delivery window is parseable and earliest deadline is not after the latest one.
fn check_e1002_delivery_window_is_correct(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .orders()
        .filter(|order| {
            get_time_window(order.earliest.as_deref(), order.latest.as_deref()).is_none_or(|tw| !tw.is_valid())
        })
        .map(|order| order.id.clone())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1002".to_string(),
            "invalid delivery window in orders".to_string(),
            format!("check that earliest is not after latest and both are in RFC3339 format, ids: '{}'", ids.join(", ")),
        ))
    }
}

/// Validates orders.
pub fn validate_orders(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1000_no_orders_with_duplicate_ids(ctx),
        check_e1001_no_palettes_with_duplicate_ids(ctx),
        check_e1002_delivery_window_is_correct(ctx),
    ])
}

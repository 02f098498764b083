use super::*;
use crate::format::FormatError;
use crate::validation::ValidationContext;
use crate::{parse_date_safe, parse_time_safe};
use loadplan_core::models::common::{Coordinate, Size3D, TemperatureBand, TimeWindow};
use loadplan_core::models::common::{Destination as CoreDestination, PalletStandard as CorePalletStandard};
use loadplan_core::models::problem::{DEFAULT_LOADING_PRIORITY, ProductTypeConstraint, VehicleCategory};
use loadplan_core::models::problem::Palette as CorePalette;
use loadplan_core::utils::GenericError;

pub(crate) fn map_to_problem(api_problem: &ApiProblem) -> Result<PlanningProblem, MultiFormatError> {
    ValidationContext::new(api_problem).validate()?;

    let catalog = read_catalog(&api_problem.catalog)?;

    let (orders, vehicles, planning_start) = match (
        read_orders(api_problem.orders.as_slice()),
        read_vehicles(api_problem.vehicles.as_slice()),
        read_planning_start(api_problem),
    ) {
        (Ok(orders), Ok(vehicles), Ok(planning_start)) => (orders, vehicles, planning_start),
        (orders, vehicles, planning_start) => {
            let errors = orders.err().into_iter().chain(vehicles.err()).chain(planning_start.err()).collect::<Vec<_>>();
            return Err(errors.into());
        }
    };

    let oracle = GreatCircleOracle::new(
        api_problem
            .locations
            .iter()
            .flatten()
            .map(|location| (location.address.clone(), Coordinate::new(location.lat, location.lng))),
    );

    Ok(PlanningProblem { catalog: Arc::new(catalog), orders, vehicles, oracle: Arc::new(oracle), planning_start })
}

fn read_catalog(catalog: &Catalog) -> Result<ConstraintCatalog, FormatError> {
    let constraints = catalog
        .product_types
        .iter()
        .map(|product_type| {
            let defaults = ProductTypeConstraint::new(product_type.id.as_str());

            ProductTypeConstraint {
                fragile: product_type.fragile.unwrap_or(defaults.fragile),
                rotatable: product_type.rotatable.unwrap_or(defaults.rotatable),
                incompatible_types: product_type.incompatible_with.iter().flatten().cloned().collect(),
                temperature: product_type
                    .temperature
                    .as_ref()
                    .map_or(defaults.temperature, |range| TemperatureBand::new(range.min, range.max)),
                max_stack_weight: product_type.max_stack_weight,
                requires_vertical: product_type.requires_vertical.unwrap_or(defaults.requires_vertical),
                loading_priority: product_type.loading_priority.unwrap_or(DEFAULT_LOADING_PRIORITY),
                ..defaults
            }
        })
        .collect();

    ConstraintCatalog::new(constraints).map_err(|err| {
        FormatError::new(
            "E0003".to_string(),
            "cannot create product type catalog".to_string(),
            format!("check catalog definition: '{err}'"),
        )
    })
}

fn read_orders(orders: &[Order]) -> Result<Vec<CoreOrder>, FormatError> {
    let (orders, invalid_ids) =
        orders.iter().fold((Vec::with_capacity(orders.len()), Vec::new()), |(mut orders, mut invalid_ids), order| {
            match read_order(order) {
                Ok(order) => orders.push(order),
                Err(_) => invalid_ids.push(order.id.clone()),
            }

            (orders, invalid_ids)
        });

    if invalid_ids.is_empty() {
        Ok(orders)
    } else {
        Err(FormatError::new(
            "E0002".to_string(),
            "cannot parse order dates".to_string(),
            format!(
                "use YYYY-MM-DD for delivery date and RFC3339 for deadlines, order ids: '{}'",
                invalid_ids.join(", ")
            ),
        ))
    }
}

fn read_order(order: &Order) -> Result<CoreOrder, GenericError> {
    let delivery_date = parse_date_safe(order.delivery_date.as_str())?;
    let start = order.earliest.as_deref().map(parse_time_safe).transpose()?;
    let end = order.latest.as_deref().map(parse_time_safe).transpose()?;
    let unlimited = TimeWindow::max();

    Ok(CoreOrder {
        id: order.id.clone(),
        delivery_date,
        destination: read_destination(&order.destination),
        window: TimeWindow::new(start.unwrap_or(unlimited.start), end.unwrap_or(unlimited.end)),
        palettes: order.palettes.iter().map(|palette| Arc::new(read_palette(palette))).collect(),
    })
}

fn read_destination(destination: &Destination) -> CoreDestination {
    match destination {
        Destination::Coordinate { lat, lng } => CoreDestination::Coordinate(Coordinate::new(*lat, *lng)),
        Destination::Address(address) => CoreDestination::Address(address.clone()),
    }
}

fn read_palette(palette: &Palette) -> CorePalette {
    CorePalette {
        id: palette.id.clone(),
        product_type: palette.product_type.clone(),
        standard: match palette.standard {
            PalletStandard::European => CorePalletStandard::European,
            PalletStandard::American => CorePalletStandard::American,
        },
        size: Size3D::new(palette.length, palette.width, palette.height),
        weight: palette.weight,
    }
}

fn read_vehicles(vehicles: &[Vehicle]) -> Result<Vec<CoreVehicle>, FormatError> {
    vehicles
        .iter()
        .map(|vehicle| {
            let category = vehicle.category.parse::<VehicleCategory>().map_err(|err| {
                FormatError::new(
                    "E1101".to_string(),
                    "unknown vehicle category".to_string(),
                    format!("use one of known vehicle categories: '{err}'"),
                )
            })?;

            Ok(CoreVehicle {
                id: vehicle.id.clone(),
                category,
                available: vehicle.available.unwrap_or(true),
                transport_cost: vehicle.transport_cost,
                temperature: vehicle.temperature,
            })
        })
        .collect()
}

fn read_planning_start(api_problem: &ApiProblem) -> Result<Option<Timestamp>, FormatError> {
    api_problem.planning_start.as_deref().map(parse_time_safe).transpose().map_err(|err| {
        FormatError::new(
            "E0002".to_string(),
            "cannot parse planning start".to_string(),
            format!("use RFC3339 format for planning start: '{err}'"),
        )
    })
}

//! Catalog endpoints: categories and the static type enumerations.

use api_types::{
    Envelope, EnumOption,
    category::{CategoryGroups, CategoryListing, CategoryQuery, CategoryView},
};
use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::WithRejection;
use engine::{Category, TransactionType, WalletType};

use crate::{ServerError, server::ServerState, views::category_view};

/// `type=expense|income` returns a flat list, anything else (`all` by
/// default) groups both types.
pub async fn list(
    State(state): State<ServerState>,
    WithRejection(Query(query), _): WithRejection<Query<CategoryQuery>, ServerError>,
) -> Result<Json<Envelope<CategoryListing>>, ServerError> {
    let kind = query
        .kind
        .as_deref()
        .and_then(|kind| TransactionType::try_from(kind).ok());

    let listing = match kind {
        Some(kind) => {
            let categories = state.engine.list_categories(Some(kind)).await?;
            CategoryListing::Single(
                categories
                    .into_iter()
                    .map(|category| category_view(category, false))
                    .collect(),
            )
        }
        None => {
            let (expense, income): (Vec<Category>, Vec<Category>) = state
                .engine
                .list_categories(None)
                .await?
                .into_iter()
                .partition(|category| category.kind == TransactionType::Expense);
            CategoryListing::Grouped(CategoryGroups {
                expense: into_views(expense),
                income: into_views(income),
            })
        }
    };
    Ok(Json(Envelope::success(listing)))
}

fn into_views(categories: Vec<Category>) -> Vec<CategoryView> {
    categories
        .into_iter()
        .map(|category| category_view(category, true))
        .collect()
}

pub async fn wallet_types() -> Json<Envelope<Vec<EnumOption>>> {
    let options = WalletType::ALL
        .iter()
        .map(|kind| EnumOption {
            value: kind.as_str().to_string(),
            label: kind.label(),
        })
        .collect();
    Json(Envelope::success(options))
}

pub async fn transaction_types() -> Json<Envelope<Vec<EnumOption>>> {
    let options = TransactionType::ALL
        .iter()
        .map(|kind| EnumOption {
            value: kind.as_str().to_string(),
            label: kind.label(),
        })
        .collect();
    Json(Envelope::success(options))
}

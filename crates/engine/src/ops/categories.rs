use sea_orm::{QueryFilter, QueryOrder, prelude::*};

use crate::{Category, ResultEngine, TransactionType, categories};

use super::Engine;

impl Engine {
    /// Categories stored in the catalog table, optionally restricted to one
    /// transaction type, ordered by id.
    pub async fn list_categories(
        &self,
        kind: Option<TransactionType>,
    ) -> ResultEngine<Vec<Category>> {
        let mut query = categories::Entity::find();
        if let Some(kind) = kind {
            query = query.filter(categories::Column::TransactionType.eq(kind.as_str()));
        }
        let models = query
            .order_by_asc(categories::Column::Id)
            .all(&self.database)
            .await?;
        models.into_iter().map(Category::try_from).collect()
    }
}

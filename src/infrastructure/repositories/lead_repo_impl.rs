// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::lead::{Lead, LeadStage};
use crate::domain::repositories::lead_repository::{LeadQueryParams, LeadRepository, LeadSummary};
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::{lead as lead_entity, task as task_entity};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{sea_query::Expr, *};
use std::sync::Arc;
use uuid::Uuid;

/// 线索仓库实现
#[derive(Clone)]
pub struct LeadRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl LeadRepositoryImpl {
    /// 创建新的线索仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<lead_entity::Model> for Lead {
    fn from(model: lead_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            source: model.source.parse().unwrap_or_default(),
            stage: model.stage.parse().unwrap_or_default(),
            priority: model.priority.parse().unwrap_or_default(),
            score: model.score,
            contact_info: serde_json::from_value(model.contact_info).unwrap_or_default(),
            tags: serde_json::from_value(model.tags).unwrap_or_default(),
            product_interest: model.product_interest,
            estimated_value: model.estimated_value,
            notes: model.notes,
            utm_source: model.utm_source,
            utm_medium: model.utm_medium,
            utm_campaign: model.utm_campaign,
            referrer_url: model.referrer_url,
            assigned_to: model.assigned_to,
            created_at: model.created_at,
            updated_at: model.updated_at,
            contacted_at: model.contacted_at,
            closed_at: model.closed_at,
        }
    }
}

impl From<Lead> for lead_entity::ActiveModel {
    fn from(lead: Lead) -> Self {
        Self {
            id: Set(lead.id),
            name: Set(lead.name),
            source: Set(lead.source.to_string()),
            stage: Set(lead.stage.to_string()),
            priority: Set(lead.priority.to_string()),
            score: Set(lead.score),
            contact_info: Set(serde_json::to_value(&lead.contact_info).unwrap_or_default()),
            tags: Set(serde_json::Value::from(lead.tags)),
            product_interest: Set(lead.product_interest),
            estimated_value: Set(lead.estimated_value),
            notes: Set(lead.notes),
            utm_source: Set(lead.utm_source),
            utm_medium: Set(lead.utm_medium),
            utm_campaign: Set(lead.utm_campaign),
            referrer_url: Set(lead.referrer_url),
            assigned_to: Set(lead.assigned_to),
            created_at: Set(lead.created_at),
            updated_at: Set(lead.updated_at),
            contacted_at: Set(lead.contacted_at),
            closed_at: Set(lead.closed_at),
        }
    }
}

/// 联系方式中只检索邮箱字段
fn email_search_sql(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::Postgres => "LOWER(contact_info ->> 'email') LIKE ?",
        _ => "LOWER(json_extract(contact_info, '$.email')) LIKE ?",
    }
}

fn stage_names(stages: &[LeadStage]) -> Vec<String> {
    stages.iter().map(ToString::to_string).collect()
}

#[async_trait]
impl LeadRepository for LeadRepositoryImpl {
    async fn create(&self, lead: &Lead) -> Result<Lead, RepositoryError> {
        let model: lead_entity::ActiveModel = lead.clone().into();

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Lead>, RepositoryError> {
        let model = lead_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, lead: &Lead) -> Result<Lead, RepositoryError> {
        let model: lead_entity::ActiveModel = lead.clone().into();

        match model.update(self.db.as_ref()).await {
            Ok(updated) => Ok(updated.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        task_entity::Entity::delete_many()
            .filter(task_entity::Column::LeadId.eq(id))
            .exec(&txn)
            .await?;

        let result = lead_entity::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(RepositoryError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }

    async fn query(&self, params: LeadQueryParams) -> Result<(Vec<Lead>, u64), RepositoryError> {
        let mut query = lead_entity::Entity::find();

        if let Some(stage) = params.stage {
            query = query.filter(lead_entity::Column::Stage.eq(stage.to_string()));
        }
        if let Some(source) = params.source {
            query = query.filter(lead_entity::Column::Source.eq(source.to_string()));
        }
        if let Some(search) = params.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(Expr::cust_with_values("LOWER(name) LIKE ?", [pattern.clone()]))
                    .add(Expr::cust_with_values(
                        email_search_sql(self.db.get_database_backend()),
                        [pattern],
                    )),
            );
        }

        let total = query.clone().count(self.db.as_ref()).await?;

        let models = query
            .order_by_desc(lead_entity::Column::CreatedAt)
            .offset(params.offset)
            .limit(params.limit)
            .all(self.db.as_ref())
            .await?;

        Ok((models.into_iter().map(Lead::from).collect(), total))
    }

    async fn find_stale(
        &self,
        stages: &[LeadStage],
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Lead>, RepositoryError> {
        let models = lead_entity::Entity::find()
            .filter(lead_entity::Column::Stage.is_in(stage_names(stages)))
            .filter(lead_entity::Column::UpdatedAt.lt(cutoff))
            .order_by_asc(lead_entity::Column::UpdatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Lead::from).collect())
    }

    async fn summaries(
        &self,
        created_after: Option<DateTime<Utc>>,
        created_before: Option<DateTime<Utc>>,
    ) -> Result<Vec<LeadSummary>, RepositoryError> {
        let mut query = lead_entity::Entity::find().select_only().columns([
            lead_entity::Column::Stage,
            lead_entity::Column::Source,
            lead_entity::Column::Priority,
            lead_entity::Column::Score,
            lead_entity::Column::EstimatedValue,
        ]);

        if let Some(after) = created_after {
            query = query.filter(lead_entity::Column::CreatedAt.gte(after));
        }
        if let Some(before) = created_before {
            query = query.filter(lead_entity::Column::CreatedAt.lte(before));
        }

        let rows: Vec<(String, String, String, i32, Option<f64>)> =
            query.into_tuple().all(self.db.as_ref()).await?;

        Ok(rows
            .into_iter()
            .map(|(stage, source, priority, score, estimated_value)| LeadSummary {
                stage: stage.parse().unwrap_or_default(),
                source: source.parse().unwrap_or_default(),
                priority: priority.parse().unwrap_or_default(),
                score,
                estimated_value,
            })
            .collect())
    }
}

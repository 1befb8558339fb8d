use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::order::{ROrderCreate, ROrderUpdate};
use chrono::Utc;
use entity::order::{
    ActiveModel as OrderActive, Column, Entity as Order, Model as OrderModel, OrderStatus,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    /// Fresh id, status PENDING, owner fixed at creation.
    pub async fn create_order(
        &self,
        owner: Uuid,
        create: ROrderCreate,
    ) -> Result<OrderModel, AppError> {
        let now = Utc::now();

        let order = OrderActive {
            quantity: Set(create.quantity),
            pizza_size: Set(create.pizza_size),
            flavour: Set(create.flavour),
            order_status: Set(OrderStatus::Pending),
            user_id: Set(owner),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(order.insert(&self.db).await?)
    }

    pub async fn get_order(&self, id: i32) -> Result<OrderModel, AppError> {
        Ok(Order::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Order does not exist".into()))?)
    }

    pub async fn list_orders(&self) -> Result<Vec<OrderModel>, AppError> {
        Ok(Order::find().order_by_asc(Column::Id).all(&self.db).await?)
    }

    pub async fn list_orders_by_owner(&self, owner: Uuid) -> Result<Vec<OrderModel>, AppError> {
        Ok(Order::find()
            .filter(Column::UserId.eq(owner))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Searches only the owner's orders. "Exists but not mine" and "does not
    /// exist" are the same NotFound to the caller.
    pub async fn get_order_for_owner(&self, owner: Uuid, id: i32) -> Result<OrderModel, AppError> {
        Ok(Order::find_by_id(id)
            .filter(Column::UserId.eq(owner))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Order does not exist".into()))?)
    }

    /// Partial update; absent fields keep their stored values.
    pub async fn update_order_fields(
        &self,
        id: i32,
        patch: ROrderUpdate,
    ) -> Result<OrderModel, AppError> {
        let current = self.get_order(id).await?;

        let mut am: OrderActive = current.into();
        if let Some(quantity) = patch.quantity {
            am.quantity = Set(quantity);
        }
        if let Some(size) = patch.pizza_size {
            am.pizza_size = Set(size);
        }
        if let Some(flavour) = patch.flavour {
            am.flavour = Set(Some(flavour));
        }
        am.updated_at = Set(Utc::now());

        Ok(am.update(&self.db).await?)
    }

    /// Single-field status update, independent of `update_order_fields`.
    pub async fn update_order_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<OrderModel, AppError> {
        let mut am: OrderActive = self.get_order(id).await?.into();
        am.order_status = Set(status);
        am.updated_at = Set(Utc::now());

        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_order(&self, id: i32) -> Result<(), AppError> {
        let res = Order::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

use crate::types::error::AppError;
use entity::order::{OrderStatus, PizzaSize};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct ROrderCreate {
    pub quantity: i32,
    #[serde(default)]
    pub pizza_size: PizzaSize,
    #[serde(default)]
    pub flavour: Option<String>,
}

impl ROrderCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.quantity < 1 {
            return Err(AppError::Validation("quantity must be at least 1".into()));
        }
        Ok(())
    }
}

/// Partial update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ROrderUpdate {
    pub quantity: Option<i32>,
    pub pizza_size: Option<PizzaSize>,
    pub flavour: Option<String>,
}

impl ROrderUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(q) = self.quantity {
            if q < 1 {
                return Err(AppError::Validation("quantity must be at least 1".into()));
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ROrderStatus {
    pub order_status: OrderStatus,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OrderRes {
    pub id: i32,
    pub quantity: i32,
    pub pizza_size: PizzaSize,
    pub flavour: Option<String>,
    pub order_status: OrderStatus,
    pub user_id: Uuid,
}

impl From<entity::order::Model> for OrderRes {
    fn from(o: entity::order::Model) -> Self {
        OrderRes {
            id: o.id,
            quantity: o.quantity,
            pizza_size: o.pizza_size,
            flavour: o.flavour,
            order_status: o.order_status,
            user_id: o.user_id,
        }
    }
}

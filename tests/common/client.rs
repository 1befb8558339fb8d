use actix_web::{web, App};
use pizza_api::{
    db::postgres_service::PostgresService,
    types::user::DBUserCreate,
    utils::token::{construct_token, encrypt, new_token},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(pizza_api::routes::configure_routes)
    }

    /// Creates a user directly in the database and issues it an access token,
    /// the same way the login route does.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, staff: bool) -> (Uuid, String) {
        let random_id = Uuid::new_v4();
        let username = format!("user-{}", random_id);

        let password_hash = encrypt("password").expect("Failed to hash password");

        let user_id = self
            .db
            .create_user(DBUserCreate {
                username,
                email: format!("user-{}@test.com", random_id),
                password_hash,
                is_staff: staff,
            })
            .await
            .expect("Failed to create user");

        let secret = new_token();
        let hash = encrypt(&secret).expect("Failed to encrypt token");
        self.db
            .store_token_hash(&user_id, hash)
            .await
            .expect("Failed to store token hash");

        let access_token = construct_token(&user_id.to_string(), &secret);

        (user_id, access_token)
    }
}

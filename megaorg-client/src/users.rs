/// User store
///
/// Maps user CRUD intents onto `/users`. Create and update accept an
/// optional avatar file: with one present the request goes out as multipart
/// form data (field-equivalent to the JSON body plus an `avatar` part),
/// without one it is plain JSON. User create/update envelopes carry `data`
/// as an array whose first element is the affected record.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use megaorg_shared::models::user::{CreateUser, UpdateUser, User};

use crate::error::ClientError;
use crate::http::ApiClient;

/// CRUD operations over the user collection
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetches the full user collection
    async fn list(&self) -> Result<Vec<User>, ClientError>;

    /// Fetches one user by id, tasks included
    async fn get(&self, id: i64) -> Result<User, ClientError>;

    /// Creates a user and returns the server's record
    async fn create(&self, payload: CreateUser, avatar: Option<PathBuf>)
        -> Result<User, ClientError>;

    /// Updates a user; absent payload fields mean "unchanged"
    async fn update(
        &self,
        id: i64,
        payload: UpdateUser,
        avatar: Option<PathBuf>,
    ) -> Result<User, ClientError>;

    /// Deletes a user. Irreversible.
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}

/// HTTP-backed user store
#[derive(Debug, Clone)]
pub struct ApiUserStore {
    api: ApiClient,
}

impl ApiUserStore {
    pub fn new(api: ApiClient) -> Self {
        ApiUserStore { api }
    }

    fn first(records: Vec<User>) -> Result<User, ClientError> {
        records.into_iter().next().ok_or(ClientError::EmptyData)
    }

    async fn attach_avatar(mut form: Form, avatar: &Path) -> Result<Form, ClientError> {
        let bytes = tokio::fs::read(avatar).await?;
        let filename = avatar
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "avatar".to_string());
        form = form.part("avatar", Part::bytes(bytes).file_name(filename));
        Ok(form)
    }

    fn create_form(payload: &CreateUser) -> Form {
        Form::new()
            .text("user", payload.user.clone())
            .text("fullname", payload.fullname.clone())
            .text("password", payload.password.clone())
            .text("role", payload.role.clone())
    }

    fn update_form(payload: &UpdateUser) -> Form {
        let mut form = Form::new();
        if let Some(user) = &payload.user {
            form = form.text("user", user.clone());
        }
        if let Some(fullname) = &payload.fullname {
            form = form.text("fullname", fullname.clone());
        }
        if let Some(password) = &payload.password {
            form = form.text("password", password.clone());
        }
        if let Some(role) = &payload.role {
            form = form.text("role", role.clone());
        }
        form
    }
}

#[async_trait]
impl UserStore for ApiUserStore {
    async fn list(&self) -> Result<Vec<User>, ClientError> {
        self.api.get_json("/users").await
    }

    async fn get(&self, id: i64) -> Result<User, ClientError> {
        self.api.get_json(&format!("/users/{id}")).await
    }

    async fn create(
        &self,
        payload: CreateUser,
        avatar: Option<PathBuf>,
    ) -> Result<User, ClientError> {
        let records: Vec<User> = match avatar {
            Some(path) => {
                let form = Self::attach_avatar(Self::create_form(&payload), &path).await?;
                self.api.post_multipart("/users", form).await?
            }
            None => self.api.post_json("/users", &payload).await?,
        };
        Self::first(records)
    }

    async fn update(
        &self,
        id: i64,
        payload: UpdateUser,
        avatar: Option<PathBuf>,
    ) -> Result<User, ClientError> {
        let path = format!("/users/{id}");
        let records: Vec<User> = match avatar {
            Some(file) => {
                let form = Self::attach_avatar(Self::update_form(&payload), &file).await?;
                self.api.put_multipart(&path, form).await?
            }
            None => self.api.put_json(&path, &payload).await?,
        };
        Self::first(records)
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.api.delete(&format!("/users/{id}")).await
    }
}

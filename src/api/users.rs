//! User Service Bindings

use super::{api_base, check, ApiError};
use crate::models::User;

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    let url = format!("{}/users", api_base());
    let response = check(reqwest::get(&url).await?).await?;
    Ok(response.json().await?)
}

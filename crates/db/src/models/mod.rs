//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches. Nullable
//!   columns use `Option<Option<T>>` so a patch can clear them.

pub mod dashboard;
pub mod meeting_attendance;
pub mod project_group;
pub mod project_group_member;
pub mod project_meeting;
pub mod project_type;
pub mod staff;
pub mod student;
pub mod user_login;

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(..)`, keeping an explicit `null`
/// as `Some(None)`. Pair with `#[serde(default)]` so an absent field is `None`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

//! Day id generation
//!
//! Day ids are opaque unique tokens, generated once at creation and stable
//! for the lifetime of the day, across renames and reorders. Duplicated days
//! always receive a fresh id.

/// Generate a fresh day id
pub fn generate_day_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}

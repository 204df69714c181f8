//! Route handlers organized by resource

pub mod lists;
pub mod todos;

use serde::Serialize;

/// Response to a successful delete
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub success: bool,
    pub deleted: i64,
}

impl Deleted {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            deleted: id,
        }
    }
}

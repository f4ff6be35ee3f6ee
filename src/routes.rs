// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const RECORDS: &str = "/";
pub const RECORD_ITEM: &str = "/user/{id}";

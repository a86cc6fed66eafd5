pub const DB_NAME: &str = "bot-swbox-db";
pub const COLL_NAME: &str = "upload-json";

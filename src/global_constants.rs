#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Intersection Guide";

pub const DEFAULT_PREDICT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

pub const MULTIPART_FIELD_NAME: &str = "file";
pub const MULTIPART_FILE_NAME: &str = "image.jpeg";
pub const MULTIPART_PART_CONTENT_TYPE: &str = "image/jpeg";

pub const PREDICTION_JSON_FIELD: &str = "prediction";

pub const JPEG_ENCODE_QUALITY: u8 = 100;

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const SETTINGS_DIR_NAME: &str = "intersection-guide";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_PREDICT: &str = "[PREDICT]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_SNAPSHOT: &str = "[SNAPSHOT]";

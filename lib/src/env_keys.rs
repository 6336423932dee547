pub static EMOTION_SERVICE_URL: &str = "EMOTION_SERVICE_URL";
pub static EMOTION_SERVICE_TIMEOUT_SECONDS: &str = "EMOTION_SERVICE_TIMEOUT_SECONDS";

pub static BIND_ADDRESS: &str = "BIND_ADDRESS";

/// Current UTC timestamp in milliseconds.
///
/// All persisted timestamps (leads, system audit rows) use this format.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Datelike, TimeZone, Utc};

/// One hour in milliseconds
pub const HOUR_MILLIS: i64 = 60 * 60 * 1000;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Last id handed out by [`snowflake_id`] in this process
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: sequence within the millisecond
///
/// Ids are strictly increasing within a process. Each millisecond starts the
/// sequence at a random offset in the lower half so ids minted by a previous
/// run in the same millisecond are unlikely to be reissued.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let floor = (ts << 12) | rand::thread_rng().gen_range(0..0x800);

    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let next = floor.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

/// Start of the UTC day containing `millis`
pub fn day_start_millis(millis: i64) -> i64 {
    millis - millis.rem_euclid(24 * HOUR_MILLIS)
}

/// Start of the UTC month containing `millis`
pub fn month_start_millis(millis: i64) -> i64 {
    let Some(dt) = Utc.timestamp_millis_opt(millis).single() else {
        return day_start_millis(millis);
    };
    Utc.with_ymd_and_hms(dt.year(), dt.month(), 1, 0, 0, 0)
        .single()
        .map(|d| d.timestamp_millis())
        .unwrap_or_else(|| day_start_millis(millis))
}

use tracing::debug;

/// 解析 "HH:MM" 为当日分钟数 (H*60+M)
///
/// 宽松回落: 分隔符个数不对、任一部分非数字、或数值溢出时返回 0.
/// 小时/分钟不做范围校验
pub fn parse_minute_of_day(raw: &str) -> i32 {
    let mut parts = raw.split(':');
    let (hours, minutes) = match (parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), None) => (h, m),
        _ => {
            debug!(time = raw, "时刻格式非法,按 00:00 处理");
            return 0;
        }
    };

    let parsed = hours
        .trim()
        .parse::<i32>()
        .ok()
        .zip(minutes.trim().parse::<i32>().ok())
        .and_then(|(h, m)| h.checked_mul(60).and_then(|h| h.checked_add(m)));

    match parsed {
        Some(minute) => minute,
        None => {
            debug!(time = raw, "时刻无法解析,按 00:00 处理");
            0
        }
    }
}

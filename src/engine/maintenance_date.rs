// ==========================================
// 机尾调换优化系统 - 维修日期解析
// ==========================================
// 职责: 严格解析 ISO 8601 日期/日期时间 (不带时区)
// 日期: YYYY-MM-DD / YYYYMMDD / YYYY-Www[-D] / YYYYWww[D]
// 时间: HH[:MM[:SS[.f+]]] / HHMM / HHMMSS[.f+], 与日期之间为任意单个分隔符
// 拒绝: 前导空白、正负号、未补零、带时区偏移
// ==========================================

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// 解析 ISO 格式的维修日期
///
/// # 返回
/// - Some(NaiveDateTime): 语法合法的日期 (纯日期按 00:00)
/// - None: 非法格式或带时区偏移
pub fn parse_maintenance_date(raw: &str) -> Option<NaiveDateTime> {
    // 只处理 ASCII, 保证按字节切片安全
    if !raw.is_ascii() {
        return None;
    }

    let bytes = raw.as_bytes();
    let (date, date_len) = parse_date_part(bytes)?;

    match &bytes[date_len..] {
        [] => date.and_hms_opt(0, 0, 0),
        [_separator, time @ ..] => parse_time_part(time).map(|t| date.and_time(t)),
    }
}

/// 解析日期部分,返回日期及其占用的字节数
fn parse_date_part(b: &[u8]) -> Option<(NaiveDate, usize)> {
    let year = i32::try_from(digits(b.get(0..4)?)?).ok()?;
    if year < 1 {
        return None;
    }

    match b.get(4)? {
        b'-' => {
            if b.get(5) == Some(&b'W') {
                let week = digits(b.get(6..8)?)?;
                return if b.get(8) == Some(&b'-') {
                    let day = digits(b.get(9..10)?)?;
                    week_date(year, week, day).map(|d| (d, 10))
                } else {
                    week_date(year, week, 1).map(|d| (d, 8))
                };
            }

            let month = digits(b.get(5..7)?)?;
            if b.get(7) != Some(&b'-') {
                return None;
            }
            let day = digits(b.get(8..10)?)?;
            NaiveDate::from_ymd_opt(year, month, day).map(|d| (d, 10))
        }
        b'W' => {
            let week = digits(b.get(5..7)?)?;
            match b.get(7) {
                Some(c) if c.is_ascii_digit() => {
                    week_date(year, week, u32::from(c - b'0')).map(|d| (d, 8))
                }
                _ => week_date(year, week, 1).map(|d| (d, 7)),
            }
        }
        _ => {
            let month = digits(b.get(4..6)?)?;
            let day = digits(b.get(6..8)?)?;
            NaiveDate::from_ymd_opt(year, month, day).map(|d| (d, 8))
        }
    }
}

fn week_date(year: i32, week: u32, day: u32) -> Option<NaiveDate> {
    let weekday = match day {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => return None,
    };
    NaiveDate::from_isoywd_opt(year, week, weekday)
}

/// 解析时间部分 (不接受时区)
fn parse_time_part(b: &[u8]) -> Option<NaiveTime> {
    if b.iter().any(|c| matches!(c, b'+' | b'-' | b'Z' | b'z')) {
        return None;
    }

    let (clock, fraction) = match b.iter().position(|c| matches!(c, b'.' | b',')) {
        Some(pos) => (&b[..pos], Some(&b[pos + 1..])),
        None => (b, None),
    };

    let components: Vec<u32> = if clock.contains(&b':') {
        clock
            .split(|c| *c == b':')
            .map(|part| if part.len() == 2 { digits(part) } else { None })
            .collect::<Option<Vec<_>>>()?
    } else if matches!(clock.len(), 2 | 4 | 6) {
        clock.chunks(2).map(digits).collect::<Option<Vec<_>>>()?
    } else {
        return None;
    };

    let (hour, minute, second) = match components.as_slice() {
        [h] => (*h, 0, 0),
        [h, m] => (*h, *m, 0),
        [h, m, s] => (*h, *m, *s),
        _ => return None,
    };

    let micro = match fraction {
        None => 0,
        // 小数秒只能跟在秒之后
        Some(_) if components.len() != 3 => return None,
        Some(frac) => fraction_to_micro(frac)?,
    };

    NaiveTime::from_hms_micro_opt(hour, minute, second, micro)
}

/// 小数秒 → 微秒 (超过 6 位截断)
fn fraction_to_micro(frac: &[u8]) -> Option<u32> {
    if frac.is_empty() || !frac.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let kept = &frac[..frac.len().min(6)];
    let value = digits(kept)?;
    Some(value * 10u32.pow((6 - kept.len()) as u32))
}

/// 纯数字字节串 → u32 (空串或含非数字返回 None)
fn digits(b: &[u8]) -> Option<u32> {
    if b.is_empty() || !b.iter().all(u8::is_ascii_digit) {
        return None;
    }
    b.iter()
        .try_fold(0u32, |acc, c| acc.checked_mul(10)?.checked_add(u32::from(c - b'0')))
}

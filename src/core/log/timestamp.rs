use chrono::{Local, NaiveDateTime};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// 当前本地时间，格式 `YYYY-MM-DD HH:MM:SS.mmm`（不带时区）
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now().naive_local())
}

pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_milli_opt(h, m, s, ms))
            .expect("valid date")
    }

    #[test]
    fn test_format_pads_fields() {
        assert_eq!(format_timestamp(&at(7, 8, 9, 45)), "2024-03-05 07:08:09.045");
    }

    #[test]
    fn test_format_whole_second() {
        assert_eq!(format_timestamp(&at(23, 59, 59, 0)), "2024-03-05 23:59:59.000");
    }

    #[test]
    fn test_now_shape() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), "YYYY-MM-DD HH:MM:SS.mmm".len());
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[19..20], ".");
    }
}

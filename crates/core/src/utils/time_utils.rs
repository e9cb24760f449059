use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};

/// Today's date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First business day on or after `date`.
pub fn roll_forward_to_business_day(date: NaiveDate) -> NaiveDate {
    let mut current = date;
    while !is_business_day(current) {
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}

/// Last business day on or before `date`.
pub fn roll_back_to_business_day(date: NaiveDate) -> NaiveDate {
    let mut current = date;
    while !is_business_day(current) {
        match current.pred_opt() {
            Some(prev) => current = prev,
            None => break,
        }
    }
    current
}

/// `date` shifted back by `days` calendar days, saturating at the earliest date.
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            break;
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_business_day() {
        // 2024-01-01 is a Monday
        assert!(is_business_day(date(2024, 1, 1)));
        assert!(is_business_day(date(2024, 1, 5)));
        assert!(!is_business_day(date(2024, 1, 6)));
        assert!(!is_business_day(date(2024, 1, 7)));
    }

    #[test]
    fn test_roll_to_business_day() {
        assert_eq!(roll_forward_to_business_day(date(2024, 1, 6)), date(2024, 1, 8));
        assert_eq!(roll_forward_to_business_day(date(2024, 1, 3)), date(2024, 1, 3));
        assert_eq!(roll_back_to_business_day(date(2024, 1, 7)), date(2024, 1, 5));
        assert_eq!(roll_back_to_business_day(date(2024, 1, 8)), date(2024, 1, 8));
    }

    #[test]
    fn test_days_before() {
        assert_eq!(days_before(date(2024, 3, 1), 60), date(2024, 1, 1));
        assert_eq!(days_before(date(2024, 3, 1), 0), date(2024, 3, 1));
    }

    #[test]
    fn test_get_days_between() {
        let days = get_days_between(date(2024, 2, 27), date(2024, 3, 1));
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1)
            ]
        );
        assert!(get_days_between(date(2024, 3, 2), date(2024, 3, 1)).is_empty());
    }
}

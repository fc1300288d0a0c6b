#[cfg(test)]
mod tests {
    use crate::calendar::*;
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use common::models::{Record, YearMonth};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn test_every_month_grid_starts_on_sunday() {
        for year in [1999, 2024, 2025, 2100] {
            for m in 1..=12 {
                let grid = generate_month_grid(month(year, m));
                assert_eq!(grid.len(), GRID_DAYS);
                assert_eq!(grid[0].weekday(), Weekday::Sun);
                assert!(grid.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
                assert!(grid.contains(&day(year, m, 1)));
            }
        }
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_days() {
        // June 1st 2025 is a Sunday
        let grid = generate_month_grid(month(2025, 6));
        assert_eq!(grid[0], day(2025, 6, 1));
        assert_eq!(grid[41], day(2025, 7, 12));
    }

    #[test]
    fn test_leading_days_come_from_previous_month() {
        // January 1st 2025 is a Wednesday
        let grid = generate_month_grid(month(2025, 1));
        assert_eq!(grid[0], day(2024, 12, 29));
        assert_eq!(grid[3], day(2025, 1, 1));
        assert_eq!(grid[41], day(2025, 2, 8));
    }

    #[test]
    fn test_february_leap_year() {
        // February 1st 2024 is a Thursday
        let grid = generate_month_grid(month(2024, 2));
        assert_eq!(grid[0], day(2024, 1, 28));
        assert!(grid.contains(&day(2024, 2, 29)));
    }

    #[test]
    fn test_week_grid_sunday_first() {
        // Wednesday
        let week = generate_week_grid(day(2025, 1, 1)).unwrap();
        assert_eq!(week[0], day(2024, 12, 29));
        assert_eq!(week[6], day(2025, 1, 4));

        // a Sunday is the start of its own week
        let week = generate_week_grid(day(2025, 6, 1)).unwrap();
        assert_eq!(week[0], day(2025, 6, 1));
    }

    #[test]
    fn test_week_start_saturday() {
        assert_eq!(week_start(day(2025, 6, 7)), Some(day(2025, 6, 1)));
    }

    #[test]
    fn test_week_grid_at_end_of_date_range() {
        // the week of the last representable date ends after it
        assert_eq!(generate_week_grid(NaiveDate::MAX), None);
        assert!(week_start(NaiveDate::MAX).is_some());
    }

    #[test]
    fn test_intensity_buckets() {
        assert_eq!(intensity(false, 0), 0);
        assert_eq!(intensity(true, 0), 1);
        assert_eq!(intensity(false, 10), 1);
        assert_eq!(intensity(true, 15), 2);
        assert_eq!(intensity(true, 45), 3);
        assert_eq!(intensity(true, 60), 4);
        assert_eq!(intensity(true, 600), 4);
    }

    #[test]
    fn test_month_activity_marks_days() {
        let records = vec![
            Record::new(day(2025, 1, 1), true, 20),
            Record::new(day(2025, 1, 1), false, 25),
            Record::new(day(2025, 1, 2), false, 0),
            Record::new(day(2024, 12, 30), true, 5),
            Record::new(day(2025, 3, 1), true, 5),
        ];

        let cells = month_activity(month(2025, 1), &records, day(2025, 1, 2));
        assert_eq!(cells.len(), GRID_DAYS);

        let first = cells.iter().find(|c| c.date == day(2025, 1, 1)).unwrap();
        assert!(first.completed);
        assert!(first.in_month);
        assert_eq!(first.duration_minutes, 45);
        assert_eq!(first.intensity, 3);

        let second = cells.iter().find(|c| c.date == day(2025, 1, 2)).unwrap();
        assert!(!second.completed);
        assert!(second.is_today);
        assert_eq!(second.intensity, 0);

        // leading cell from December still shows its record
        let leading = cells.iter().find(|c| c.date == day(2024, 12, 30)).unwrap();
        assert!(!leading.in_month);
        assert!(leading.completed);

        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
        assert_eq!(cells.iter().filter(|c| c.in_month).count(), 31);
    }

    #[test]
    fn test_today_in_differs_by_at_most_one_day_from_utc() {
        let utc = chrono::Utc::now().date_naive();
        let tokyo = today_in(chrono_tz::Asia::Tokyo);
        let diff = (tokyo - utc).num_days();
        assert!((0..=1).contains(&diff));
    }
}

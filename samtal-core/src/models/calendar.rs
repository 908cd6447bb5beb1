use chrono::{Datelike, NaiveDate, Weekday};

/// Column headers for the day grid, Monday first.
pub const DAY_HEADERS: [&str; 7] = ["Mån", "Tis", "Ons", "Tor", "Fre", "Lör", "Sön"];

/// The month grid shown in the booking modal. Navigation only moves the
/// displayed month; a day selection made earlier stays put, and selecting a
/// day is always relative to whatever month is displayed at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
}

impl CalendarView {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
            selected: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// "December 2024"-style heading for the displayed month.
    pub fn label(&self) -> String {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("displayed month always has a first day");
        first.format("%B %Y").to_string()
    }

    /// Move the displayed month by `delta`, wrapping the year at both
    /// boundaries. December 2024 + 1 → January 2025, and back again.
    pub fn navigate(&mut self, delta: i32) {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        self.year = total.div_euclid(12);
        self.month = (total.rem_euclid(12) + 1) as u32;
    }

    /// Select `day` in the currently displayed month. Past days are
    /// selectable on purpose; the quick-pick row is the curated path.
    pub fn select_day(&mut self, day: u32) -> Option<NaiveDate> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, day)?;
        self.selected = Some(date);
        self.selected
    }

    /// Select an absolute date and move the view to its month.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.year = date.year();
        self.month = date.month();
        self.selected = Some(date);
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// The grid as rows of Monday-first weeks; `None` cells pad the edges.
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("displayed month always has a first day");
        let offset = first.weekday().num_days_from_monday() as usize;
        let days = self.days_in_month();

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut column = offset;
        for day in 1..=days {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }
        weeks
    }

    /// True when `date` sits in the displayed month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// The next `count` weekdays strictly after `today`, the one-click booking
/// options offered above the full grid.
pub fn quick_picks(today: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut picks = Vec::with_capacity(count);
    let mut date = today;
    while picks.len() < count {
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            picks.push(date);
        }
    }
    picks
}

/// Swedish weekday name, used in quick-pick buttons and the success text.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "måndag",
        Weekday::Tue => "tisdag",
        Weekday::Wed => "onsdag",
        Weekday::Thu => "torsdag",
        Weekday::Fri => "fredag",
        Weekday::Sat => "lördag",
        Weekday::Sun => "söndag",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_navigate_wraps_year_forward_and_back() {
        let mut view = CalendarView::new(date(2024, 12, 10));
        view.navigate(1);
        assert_eq!((view.year(), view.month()), (2025, 1));
        view.navigate(-1);
        assert_eq!((view.year(), view.month()), (2024, 12));
    }

    #[test]
    fn test_navigate_net_delta() {
        let mut view = CalendarView::new(date(2024, 6, 1));
        for _ in 0..8 {
            view.navigate(1);
        }
        for _ in 0..3 {
            view.navigate(-1);
        }
        // net +5 from June 2024
        assert_eq!((view.year(), view.month()), (2024, 11));
    }

    #[test]
    fn test_select_day_is_relative_to_displayed_month() {
        let mut view = CalendarView::new(date(2024, 12, 10));
        view.navigate(1);
        let selected = view.select_day(15).unwrap();
        assert_eq!(selected, date(2025, 1, 15));
    }

    #[test]
    fn test_navigation_keeps_prior_selection() {
        let mut view = CalendarView::new(date(2024, 12, 10));
        view.select_day(15);
        view.navigate(2);
        assert_eq!(view.selected(), Some(date(2024, 12, 15)));
    }

    #[test]
    fn test_past_days_stay_selectable() {
        // Deliberate: the grid does not restrict to future dates, only the
        // quick-pick row curates upcoming weekdays.
        let mut view = CalendarView::new(date(2024, 12, 10));
        assert_eq!(view.select_day(1), Some(date(2024, 12, 1)));
    }

    #[test]
    fn test_select_day_rejects_invalid_day() {
        let mut view = CalendarView::new(date(2025, 2, 1));
        assert!(view.select_day(30).is_none());
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_weeks_cover_whole_month_once() {
        let view = CalendarView::new(date(2024, 12, 1));
        let weeks = view.weeks();
        let days: Vec<u32> = weeks.iter().flatten().filter_map(|d| *d).collect();
        assert_eq!(days.len(), 31);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&31));
        // 2024-12-01 is a Sunday, so the first row has a single cell.
        assert_eq!(weeks[0].iter().filter(|d| d.is_some()).count(), 1);
        assert_eq!(weeks[0][6], Some(1));
    }

    #[test]
    fn test_days_in_month_leap_year() {
        let view = CalendarView::new(date(2024, 2, 5));
        assert_eq!(view.days_in_month(), 29);
        let view = CalendarView::new(date(2025, 2, 5));
        assert_eq!(view.days_in_month(), 28);
    }

    #[test]
    fn test_quick_picks_are_upcoming_weekdays() {
        // 2024-12-05 is a Thursday: Fri 6, Mon 9, Tue 10, Wed 11, Thu 12.
        let picks = quick_picks(date(2024, 12, 5), 5);
        assert_eq!(
            picks,
            vec![
                date(2024, 12, 6),
                date(2024, 12, 9),
                date(2024, 12, 10),
                date(2024, 12, 11),
                date(2024, 12, 12),
            ]
        );
        assert!(picks
            .iter()
            .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn test_quick_picks_start_strictly_after_today() {
        // A Monday: today itself must not be offered.
        let picks = quick_picks(date(2024, 12, 2), 3);
        assert_eq!(picks[0], date(2024, 12, 3));
    }

    #[test]
    fn test_label_format() {
        let view = CalendarView::new(date(2024, 12, 10));
        assert_eq!(view.label(), "December 2024");
    }
}

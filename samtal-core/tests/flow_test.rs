use chrono::NaiveDate;
use samtal_core::flow::{AutoPilot, BookingFlow, BookingPhase, ConfirmOutcome, MODAL_FADE_TICKS};
use samtal_core::models::{
    default_services, default_slots, quick_picks, CalendarView, FieldKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn open_flow(today: NaiveDate) -> BookingFlow {
    let mut flow = BookingFlow::open(today, default_slots(), default_services(), 5);
    for _ in 0..MODAL_FADE_TICKS {
        flow.tick();
    }
    assert_eq!(flow.phase(), BookingPhase::Selecting);
    flow
}

mod calendar_tests {
    use super::*;

    #[test]
    fn test_navigate_rolls_over_year_boundaries() {
        let mut view = CalendarView::new(date(2024, 12, 10));
        view.navigate(1);
        assert_eq!((view.year(), view.month()), (2025, 1));
        view.navigate(-1);
        assert_eq!((view.year(), view.month()), (2024, 12));
    }

    #[test]
    fn test_displayed_month_equals_start_plus_net_delta() {
        let mut view = CalendarView::new(date(2023, 3, 1));
        let deltas = [1, 1, -1, 1, 1, 1, -1, -1, 1, 1]; // net +4
        for delta in deltas {
            view.navigate(delta);
        }
        assert_eq!((view.year(), view.month()), (2023, 7));
    }

    #[test]
    fn test_selection_is_relative_to_displayed_view() {
        let mut view = CalendarView::new(date(2024, 5, 20));
        view.navigate(3);
        assert_eq!(view.select_day(15), Some(date(2024, 8, 15)));
        view.navigate(-4);
        assert_eq!(view.select_day(15), Some(date(2024, 4, 15)));
    }
}

mod confirm_tests {
    use super::*;

    #[test]
    fn test_all_placeholders_is_incomplete_and_modal_stays_open() {
        let mut flow = open_flow(date(2024, 12, 5));
        match flow.confirm() {
            ConfirmOutcome::Incomplete(message) => {
                assert!(message.starts_with("Vänligen fyll i"));
            }
            other => panic!("expected incomplete, got {other:?}"),
        }
        // Invalid is a visible, recoverable state, not Closed.
        assert_eq!(flow.phase(), BookingPhase::Invalid);
        assert!(!flow.is_closed());
    }

    #[test]
    fn test_full_booking_confirms_with_exact_details() {
        let mut flow = open_flow(date(2024, 12, 5));
        flow.selection.form.field_mut(FieldKind::Name).set("Anna Andersson");
        flow.selection
            .form
            .field_mut(FieldKind::Email)
            .set("anna.andersson@foretag.se");
        flow.selection
            .form
            .field_mut(FieldKind::Company)
            .set("Innovativa Lösningar AB");

        // First quick pick after Thursday 2024-12-05 is Friday the 6th.
        let picked = flow.select_quick(0).unwrap();
        assert_eq!(picked, date(2024, 12, 6));
        flow.select_slot(1).unwrap();

        match flow.confirm() {
            ConfirmOutcome::Confirmed(summary) => {
                assert_eq!(summary.name, "Anna Andersson");
                assert_eq!(summary.time, "10:30");
                assert_eq!(summary.date, date(2024, 12, 6));
                let message = summary.message();
                assert!(message.contains("Anna Andersson"));
                assert!(message.contains("10:30"));
                assert!(message.contains("fredag"));
            }
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn test_filled_form_without_slot_reports_date_and_time() {
        let mut flow = open_flow(date(2024, 12, 5));
        flow.selection.form.field_mut(FieldKind::Name).set("Anna Andersson");
        flow.selection.form.field_mut(FieldKind::Email).set("a@b.se");
        flow.selection.form.field_mut(FieldKind::Company).set("AB");

        match flow.confirm() {
            ConfirmOutcome::Incomplete(message) => {
                assert_eq!(message, "Vänligen välj både datum och tid");
            }
            other => panic!("expected incomplete, got {other:?}"),
        }
    }
}

mod quick_pick_tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_quick_picks_skip_weekends_over_a_year() {
        let mut day = date(2024, 1, 1);
        for _ in 0..365 {
            let picks = quick_picks(day, 5);
            assert_eq!(picks.len(), 5);
            for pick in &picks {
                assert!(*pick > day);
                assert!(!matches!(pick.weekday(), Weekday::Sat | Weekday::Sun));
            }
            day = day.succ_opt().unwrap();
        }
    }
}

mod autopilot_tests {
    use super::*;

    #[test]
    fn test_autopilot_runs_modal_to_completion() {
        let mut flow = open_flow(date(2024, 12, 5));
        let mut pilot = AutoPilot::new(2);

        for _ in 0..64 {
            pilot.tick(&mut flow);
            flow.tick();
            if flow.is_closed() {
                break;
            }
        }

        assert!(flow.is_closed());
        let summary = flow.summary().unwrap();
        assert_eq!(summary.name, "Anna Andersson");
        assert_eq!(summary.time, "10:30");
        assert!(summary.service.is_some());
    }

    #[test]
    fn test_disengaged_autopilot_leaves_the_modal_alone() {
        let mut flow = open_flow(date(2024, 12, 5));
        let mut pilot = AutoPilot::new(1);
        pilot.disengage();

        for _ in 0..16 {
            assert!(pilot.tick(&mut flow).is_none());
            flow.tick();
        }
        assert_eq!(flow.phase(), BookingPhase::Selecting);
        assert!(flow.selection.date.is_none());
        assert!(flow.summary().is_none());
    }
}

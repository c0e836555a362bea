use super::booking::status_for;
use super::plan::PlanAction;
use crate::entity::ReservationStatus;
use proptest::prelude::*;

proptest! {
    #[test]
    fn full_flights_always_waitlist(available in -50i64..=0, confirmed in any::<bool>()) {
        prop_assert_eq!(status_for(available, confirmed), ReservationStatus::Waitlisted);
    }

    #[test]
    fn open_flights_follow_the_answer(available in 1i64..500, confirmed in any::<bool>()) {
        let status = status_for(available, confirmed);
        prop_assert!(status.takes_seat());
        prop_assert_eq!(status == ReservationStatus::Confirmed, confirmed);
    }

    #[test]
    fn increments_never_draw_ids(flight_num in 0i64..10_000) {
        let action = PlanAction::IncrementSold { flight_num };
        prop_assert!(action.allocated_id().is_none());
        prop_assert!(action.summary().is_none());
    }
}

//! Unit tests for tt-core primitives.

#[cfg(test)]
mod ids {
    use crate::RegistrationId;

    #[test]
    fn ordering_and_display() {
        assert!(RegistrationId(12345) < RegistrationId(12346));
        assert_eq!(RegistrationId(7).to_string(), "RegistrationId(7)");
        assert_eq!(RegistrationId::from(9u32), RegistrationId(9));
    }
}

#[cfg(test)]
mod weekday {
    use crate::{CoreError, Weekday};

    #[test]
    fn short_names_resolve() {
        assert_eq!(Weekday::from_short_name("M").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::from_short_name("Th").unwrap(), Weekday::Thursday);
        assert_eq!(Weekday::from_short_name("Su").unwrap(), Weekday::Sunday);
    }

    #[test]
    fn unknown_token_errors() {
        assert_eq!(
            Weekday::from_short_name("X"),
            Err(CoreError::InvalidWeekday("X".into()))
        );
    }

    #[test]
    fn parse_days_distinguishes_tuesday_and_thursday() {
        use Weekday::*;
        assert_eq!(Weekday::parse_days("MWF").unwrap(), vec![Monday, Wednesday, Friday]);
        assert_eq!(Weekday::parse_days("TTh").unwrap(), vec![Tuesday, Thursday]);
        assert_eq!(Weekday::parse_days("ThF").unwrap(), vec![Thursday, Friday]);
        assert_eq!(Weekday::parse_days("").unwrap(), vec![]);
    }

    #[test]
    fn parse_days_rejects_garbage() {
        assert!(Weekday::parse_days("MXF").is_err());
        assert!(Weekday::parse_days("h").is_err());
    }
}

#[cfg(test)]
mod time_of_day {
    use crate::TimeOfDay;

    #[test]
    fn parses_twelve_hour_clock() {
        assert_eq!("10:30 AM".parse::<TimeOfDay>().unwrap(), TimeOfDay::hm(10, 30));
        assert_eq!("1:20 PM".parse::<TimeOfDay>().unwrap(), TimeOfDay::hm(13, 20));
        assert_eq!("12:00 PM".parse::<TimeOfDay>().unwrap(), TimeOfDay::hm(12, 0));
        assert_eq!("12:15 AM".parse::<TimeOfDay>().unwrap(), TimeOfDay::hm(0, 15));
    }

    #[test]
    fn parses_twenty_four_hour_clock() {
        assert_eq!("06:30".parse::<TimeOfDay>().unwrap(), TimeOfDay::hm(6, 30));
        assert_eq!("23:59".parse::<TimeOfDay>().unwrap(), TimeOfDay(1439));
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "10", "10:3 AM", "13:00 PM", "0:30 AM", "24:00", "ab:cd"] {
            assert!(bad.parse::<TimeOfDay>().is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn display_round_trips_catalog_format() {
        assert_eq!(TimeOfDay::hm(9, 5).to_string(), "9:05 AM");
        assert_eq!(TimeOfDay::hm(0, 0).to_string(), "12:00 AM");
        assert_eq!(TimeOfDay::hm(15, 45).to_string(), "3:45 PM");
    }
}

#[cfg(test)]
mod class_time {
    use crate::{conflicts, ClassTime, CoreError, TimeOfDay, Weekday};

    fn ct(day: Weekday, start: (u16, u16), end: (u16, u16)) -> ClassTime {
        ClassTime::new(day, TimeOfDay::hm(start.0, start.1), TimeOfDay::hm(end.0, end.1))
    }

    #[test]
    fn different_days_never_conflict() {
        let a = ct(Weekday::Monday, (9, 0), (10, 0));
        let b = ct(Weekday::Tuesday, (9, 0), (10, 0));
        assert!(!conflicts(a, b));
    }

    #[test]
    fn overlap_on_same_day_conflicts() {
        let a = ct(Weekday::Monday, (9, 0), (10, 0));
        let b = ct(Weekday::Monday, (9, 30), (11, 0));
        assert!(conflicts(a, b));
        assert!(conflicts(b, a));
    }

    #[test]
    fn containment_conflicts() {
        let outer = ct(Weekday::Friday, (8, 0), (12, 0));
        let inner = ct(Weekday::Friday, (9, 0), (9, 50));
        assert!(conflicts(outer, inner));
        assert!(inner.conflicts_with(&outer));
    }

    #[test]
    fn touching_endpoints_do_not_conflict() {
        let a = ct(Weekday::Wednesday, (9, 0), (10, 0));
        let b = ct(Weekday::Wednesday, (10, 0), (11, 0));
        assert!(!conflicts(a, b));
        assert!(!conflicts(b, a));
    }

    #[test]
    fn degenerate_interval_has_zero_duration() {
        let empty = ct(Weekday::Monday, (12, 0), (6, 0));
        assert_eq!(empty.duration_minutes(), 0);
    }

    #[test]
    fn parse_range_and_expand() {
        let t = ClassTime::parse_range(Weekday::Monday, "10:30 AM - 11:20 AM").unwrap();
        assert_eq!(t, ct(Weekday::Monday, (10, 30), (11, 20)));
        assert_eq!(t.duration_minutes(), 50);

        let all = ClassTime::expand("TTh", "1:30 PM - 3:20 PM").unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].day, Weekday::Tuesday);
        assert_eq!(all[1].day, Weekday::Thursday);
        assert_eq!(all[1].start, TimeOfDay::hm(13, 30));
    }

    #[test]
    fn parse_range_rejects_empty_interval() {
        let err = ClassTime::parse_range(Weekday::Monday, "11:00 AM - 10:00 AM").unwrap_err();
        assert!(matches!(err, CoreError::EmptyInterval { .. }));
        assert!(ClassTime::parse_range(Weekday::Monday, "10:00 AM").is_err());
    }

    #[test]
    fn display() {
        let t = ct(Weekday::Thursday, (9, 30), (10, 20));
        assert_eq!(t.to_string(), "Th 9:30 AM - 10:20 AM");
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::{conflicts, ClassTime, TimeOfDay, Weekday};

    fn weekday() -> impl Strategy<Value = Weekday> {
        prop_oneof![
            Just(Weekday::Monday),
            Just(Weekday::Tuesday),
            Just(Weekday::Wednesday),
            Just(Weekday::Thursday),
            Just(Weekday::Friday),
        ]
    }

    fn class_time() -> impl Strategy<Value = ClassTime> {
        (weekday(), 0u16..1200, 1u16..240)
            .prop_map(|(day, start, len)| {
                ClassTime::new(day, TimeOfDay(start), TimeOfDay(start + len))
            })
    }

    proptest! {
        #[test]
        fn conflict_is_symmetric(a in class_time(), b in class_time()) {
            prop_assert_eq!(conflicts(a, b), conflicts(b, a));
        }

        #[test]
        fn different_days_are_conflict_free(a in class_time(), b in class_time()) {
            prop_assume!(a.day != b.day);
            prop_assert!(!conflicts(a, b));
        }

        #[test]
        fn touching_is_conflict_free(day in weekday(), s in 0u16..1000, l1 in 1u16..200, l2 in 1u16..200) {
            let a = ClassTime::new(day, TimeOfDay(s), TimeOfDay(s + l1));
            let b = ClassTime::new(day, TimeOfDay(s + l1), TimeOfDay(s + l1 + l2));
            prop_assert!(!conflicts(a, b));
            prop_assert!(!conflicts(b, a));
        }

        #[test]
        fn matches_minute_by_minute_overlap(a in class_time(), b in class_time()) {
            let shared = a.day == b.day
                && (a.start.0..a.end.0).any(|m| (b.start.0..b.end.0).contains(&m));
            prop_assert_eq!(conflicts(a, b), shared);
        }
    }
}

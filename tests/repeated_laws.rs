#![cfg(feature = "func")]
//! Property-based tests for `Repeated`.
//!
//! - **Count**: a positive count `n` invokes the transform exactly `n` times
//! - **Last result**: only the result of the final repetition is returned
//! - **Rejection**: a non-positive count fails without invoking anything
//! - **Abort**: the first failing repetition stops the rest

use deferrable::error::{InvalidArgumentError, RepeatedError};
use deferrable::func::{Func, Repeated};
use proptest::prelude::*;
use std::cell::Cell;

proptest! {
    #[test]
    fn prop_repeated_invokes_exactly_n_times(times in 1_i64..64, input in any::<i32>()) {
        let calls = Cell::new(0_i64);
        let repeated = Repeated::new(
            |value: i32| {
                calls.set(calls.get() + 1);
                Ok::<_, ()>((value, calls.get()))
            },
            times,
        );

        let result = repeated.apply(input);

        prop_assert_eq!(result, Ok((input, times)));
        prop_assert_eq!(calls.get(), times);
    }
}

proptest! {
    #[test]
    fn prop_repeated_once_equals_plain_application(input in any::<i16>()) {
        let double = |value: i16| Ok::<_, ()>(i32::from(value) * 2);
        let repeated = Repeated::new(double, 1);

        prop_assert_eq!(repeated.apply(input).map_err(|_| ()), double.apply(input));
    }
}

proptest! {
    #[test]
    fn prop_repeated_rejects_non_positive_count(times in i64::MIN..=0) {
        let calls = Cell::new(0);
        let repeated = Repeated::new(
            |value: u8| {
                calls.set(calls.get() + 1);
                Ok::<_, ()>(value)
            },
            times,
        );

        let result = repeated.apply(1);

        prop_assert_eq!(
            result,
            Err(RepeatedError::InvalidArgument(
                InvalidArgumentError::NonPositiveRepetitions { times }
            ))
        );
        prop_assert_eq!(calls.get(), 0);
    }
}

proptest! {
    #[test]
    fn prop_repeated_stops_at_first_failure(times in 2_i64..32, failing_at in 1_i64..32) {
        prop_assume!(failing_at <= times);

        let calls = Cell::new(0_i64);
        let repeated = Repeated::new(
            |_: ()| {
                calls.set(calls.get() + 1);
                if calls.get() == failing_at {
                    Err(calls.get())
                } else {
                    Ok(calls.get())
                }
            },
            times,
        );

        let result = repeated.apply(());

        prop_assert_eq!(result, Err(RepeatedError::Evaluation(failing_at)));
        prop_assert_eq!(calls.get(), failing_at);
    }
}

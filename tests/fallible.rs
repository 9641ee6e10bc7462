//! Integration tests for fallible conversions through `TryInto`.

use std::collections::VecDeque;

use bracket_list::{ConversionError, init};

#[derive(Debug, PartialEq, Eq)]
struct Even(u32);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0} is odd")]
struct Odd(u32);

impl TryFrom<u32> for Even {
    type Error = Odd;

    fn try_from(value: u32) -> Result<Self, Odd> {
        if value % 2 == 0 {
            Ok(Even(value))
        } else {
            Err(Odd(value))
        }
    }
}

#[test]
fn test_all_conversions_succeed() {
    let evens = init![2u32, 4u32, 0u32].try_to::<Vec<Even>, Even>().unwrap();
    assert_eq!(evens, [Even(2), Even(4), Even(0)]);

    let queue = init![1u64, 2i8].try_to::<VecDeque<u8>, u8>().unwrap();
    assert_eq!(queue, [1, 2]);
}

#[test]
fn test_first_failure_is_reported() {
    let report = init![2u32, 3u32, 5u32]
        .try_to::<Vec<Even>, Even>()
        .unwrap_err();

    assert_eq!(
        *report.current_context(),
        ConversionError {
            index: 1,
            argument: "u32",
            element: core::any::type_name::<Even>(),
        }
    );
    assert_eq!(report.children().len(), 1);

    let cause = report
        .children()
        .get(0)
        .and_then(|child| child.downcast_current_context::<Odd>());
    assert_eq!(cause, Some(&Odd(3)));
}

#[test]
fn test_report_display_names_the_argument() {
    let report = init![7u32].try_to::<Vec<Even>, Even>().unwrap_err();
    let rendered = report.to_string();

    assert!(
        rendered.contains("could not convert argument #0 (u32) into"),
        "{rendered}"
    );
    assert!(rendered.contains("7 is odd"), "{rendered}");
}

#[test]
fn test_empty_list_never_fails() {
    let empty = init![].try_to::<Vec<Even>, Even>().unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_references_keep_going_after_a_failure() {
    let mut list = init![1u32, 2u32, 3u32, 4u32];
    let refs = list.fallible_references::<Even>();

    let (evens, odds): (Vec<_>, Vec<_>) = refs
        .iter()
        .map(|reference| reference.try_convert())
        .partition(Result::is_ok);

    assert_eq!(
        evens.into_iter().map(Result::unwrap).collect::<Vec<_>>(),
        [Even(2), Even(4)]
    );
    assert_eq!(
        odds.into_iter()
            .map(|result| result.unwrap_err().current_context().index)
            .collect::<Vec<_>>(),
        [0, 2]
    );
    assert!(refs.iter().all(|reference| reference.is_converted()));
}

use rstest::rstest;

use super::*;

#[test]
fn optional_to_string_test() {
    assert_eq!("3", optional_to_string(Some(3)));
    assert_eq!("<not set>", optional_to_string::<i32>(None));
}

#[rstest]
#[case("2/3", Some(2), Some(3))]
#[case("0/3", None, Some(3))]
#[case("0/0", None, None)]
fn ratio_test(#[case] expected: &str, #[case] current: Option<i32>, #[case] total: Option<i32>) {
    assert_eq!(expected, ratio(current, total));
}

#[test]
fn join_or_none_test() {
    assert_eq!("<none>", join_or_none::<&str>(&[], ", "));
    assert_eq!("get, list", join_or_none(&["get", "list"], ", "));
    assert_eq!("a", join_or_none(&["a".to_owned()], ","));
}

use notjs::list::{
    AccessError, Component, ConsList, EncodedList, List, first, make_pair, print_all, second,
    sum_all,
};

fn encoded_one_to_four() -> EncodedList<i64> {
    EncodedList::pair(
        1,
        EncodedList::pair(2, EncodedList::pair(3, EncodedList::pair(4, EncodedList::empty()))),
    )
}

fn tagged_one_to_four() -> List<i64> {
    List::pair(1, List::pair(2, List::pair(3, List::pair(4, List::Empty))))
}

fn printed<L>(list: &L) -> String
where
    L: ConsList,
    L::Item: std::fmt::Display,
{
    let mut out = Vec::new();
    print_all(list, &mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("output is utf-8")
}

#[test]
fn first_and_second_select_pair_components() {
    let pair = make_pair(1, "two");
    assert_eq!(first(&pair), 1);
    assert_eq!(second(&pair), "two");

    let pair = make_pair(String::from("a"), 2.5);
    assert_eq!(first(&pair), "a");
    assert_eq!(second(&pair), 2.5);
}

#[test]
fn pair_applies_arbitrary_selector() {
    let pair = make_pair(3, 4);
    assert_eq!(pair.apply(|a, b| Component::First(a * b)), Component::First(12));
}

#[test]
fn pair_can_be_used_repeatedly() {
    let pair = make_pair(vec![1, 2], 7);
    assert_eq!(first(&pair), vec![1, 2]);
    assert_eq!(first(&pair), vec![1, 2]);
    assert_eq!(second(&pair), 7);
}

#[test]
fn print_all_writes_one_element_per_line() {
    assert_eq!(printed(&encoded_one_to_four()), "1\n2\n3\n4\n");
    assert_eq!(printed(&tagged_one_to_four()), "1\n2\n3\n4\n");
}

#[test]
fn print_all_of_empty_list_writes_nothing() {
    assert_eq!(printed(&EncodedList::<i64>::empty()), "");
    assert_eq!(printed(&List::<i64>::Empty), "");
}

#[test]
fn sum_all_adds_every_element() {
    assert_eq!(sum_all(&encoded_one_to_four()), 10);
    assert_eq!(sum_all(&tagged_one_to_four()), 10);
}

#[test]
fn sum_all_of_empty_list_is_zero() {
    assert_eq!(sum_all(&EncodedList::<i64>::empty()), 0);
    assert_eq!(sum_all(&List::<i64>::Empty), 0);
}

#[test]
fn sum_all_uses_float_addition() {
    let list: List<f64> = [0.5, 0.25, 0.125].into_iter().collect();
    assert_eq!(sum_all(&list), 0.875);
}

#[test]
fn accessors_walk_the_encoded_list() {
    let list = encoded_one_to_four();
    assert_eq!(list.first(), Ok(1));

    let rest = list.second().expect("list is not empty");
    assert_eq!(rest.first(), Ok(2));
    assert!(!rest.is_empty());
}

#[test]
fn accessors_on_empty_marker_fail_fast() {
    let encoded = EncodedList::<i64>::empty();
    assert_eq!(
        encoded.first(),
        Err(AccessError::EmptyList { accessor: "first" })
    );
    assert!(matches!(
        encoded.second(),
        Err(AccessError::EmptyList { accessor: "second" })
    ));

    let tagged = List::<i64>::Empty;
    assert_eq!(
        tagged.first(),
        Err(AccessError::EmptyList { accessor: "first" })
    );
    assert_eq!(
        tagged.second(),
        Err(AccessError::EmptyList { accessor: "second" })
    );
}

#[test]
fn access_error_message_names_the_accessor() {
    let err = AccessError::EmptyList { accessor: "second" };
    assert_eq!(err.to_string(), "cannot take `second` of the empty list");
}

#[test]
fn collecting_keeps_element_order() {
    let encoded: EncodedList<i64> = (1..=4).collect();
    assert_eq!(encoded.items().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

    let tagged: List<i64> = (1..=4).collect();
    assert_eq!(tagged, tagged_one_to_four());
}

#[test]
fn both_representations_agree() {
    let encoded = encoded_one_to_four();
    let tagged = tagged_one_to_four();
    assert!(encoded.items().eq(tagged.items()));
}

#[test]
fn encoded_list_debug_lists_elements() {
    assert_eq!(format!("{:?}", encoded_one_to_four()), "[1, 2, 3, 4]");
}

#[test]
fn tagged_second_shares_the_tail() {
    let list = tagged_one_to_four();
    let tail = list.second().expect("list is not empty");
    assert_eq!(tail.first(), Ok(&2));
    assert_eq!(sum_all(tail), 9);
}

#[test]
fn long_tagged_list_sums_and_drops() {
    let list: List<u64> = (0..200_000).collect();
    assert_eq!(sum_all(&list), 19_999_900_000);
    drop(list);
}

#[test]
fn long_encoded_list_sums_and_drops() {
    let list: EncodedList<u64> = (0..200_000).collect();
    assert_eq!(sum_all(&list), 19_999_900_000);
    drop(list);
}

#[test]
fn dropping_a_list_keeps_shared_tails_alive() {
    let tagged = tagged_one_to_four();
    let tagged_tail = tagged.second().expect("non-empty").clone();
    drop(tagged);
    assert_eq!(sum_all(&tagged_tail), 9);

    let encoded = encoded_one_to_four();
    let encoded_tail = encoded.second().expect("non-empty");
    drop(encoded);
    assert_eq!(printed(&encoded_tail), "2\n3\n4\n");
}

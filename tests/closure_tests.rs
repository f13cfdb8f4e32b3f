use notjs::closure::make_adder;

#[test]
fn adder_adds_captured_value() {
    for a in -20..20 {
        let add = make_adder(a);
        for b in -20..20 {
            assert_eq!(add(b), a + b, "make_adder({a})({b})");
        }
    }
}

#[test]
fn forty_plus_two() {
    assert_eq!(make_adder(40)(2), 42);
}

#[test]
fn adders_are_independent() {
    let add_one = make_adder(1);
    let add_ten = make_adder(10);
    assert_eq!(add_one(5), 6);
    assert_eq!(add_ten(5), 15);
    assert_eq!(add_one(5), 6);
}

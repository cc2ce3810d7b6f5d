//! Dumper tests
//!
//! Op listings for scalar values are pinned with inline snapshots. Objects
//! with more than one key have no fixed iteration order, so those are only
//! checked by decoding them again.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use watson_vm::{dump, dump_to_vec, Dumper, FnSink, Op, Value, Vm};

fn listing(value: &Value) -> String {
    dump_to_vec(value)
        .iter()
        .map(|op| op.name())
        .collect::<Vec<_>>()
        .join(" ")
}

fn round_trip(value: &Value) -> Value {
    let mut vm = Vm::new();
    vm.feed_multi(dump_to_vec(value))
        .unwrap_or_else(|e| panic!("decoding {} failed: {}", value, e));
    assert_eq!(vm.sp(), 0, "dump of {} left extra values on the stack", value);
    vm.into_top().expect("decoded value")
}

#[track_caller]
fn assert_round_trip(value: Value) {
    assert_eq!(round_trip(&value), value);
}

// ==================== Listings ====================

#[test]
fn test_int_listings() {
    assert_snapshot!(listing(&Value::Int(0)), @"Inew");
    assert_snapshot!(listing(&Value::Int(1)), @"Inew Iinc");
    assert_snapshot!(listing(&Value::Int(3)), @"Inew Iinc Ishl Iinc");
    assert_snapshot!(listing(&Value::Int(10)), @"Inew Iinc Ishl Ishl Iinc Ishl");
}

#[test]
fn test_scalar_listings() {
    assert_snapshot!(listing(&Value::Uint(1)), @"Inew Iinc Itou");
    assert_snapshot!(listing(&Value::Float(f64::NEG_INFINITY)), @"Finf Fneg");
    assert_snapshot!(listing(&Value::Bool(true)), @"Bnew Bneg");
    assert_snapshot!(listing(&Value::Nil), @"Nnew");
}

#[test]
fn test_string_listing() {
    // 'a' = 0x61 = 0b1100001
    assert_snapshot!(
        listing(&Value::string("a")),
        @"Snew Inew Iinc Ishl Iinc Ishl Ishl Ishl Ishl Ishl Iinc Sadd"
    );
}

#[test]
fn test_container_listings() {
    assert_snapshot!(listing(&Value::array([])), @"Anew");
    assert_snapshot!(
        listing(&Value::array([Value::Nil, Value::Bool(false)])),
        @"Anew Nnew Aadd Bnew Aadd"
    );
    assert_snapshot!(
        listing(&Value::object([("", Value::Nil)])),
        @"Onew Snew Nnew Oadd"
    );
}

#[test]
fn test_int_shift_count_is_msb_index() {
    for n in [1u64, 2, 5, 0x80, 0xdead_beef, u64::MAX] {
        let ops = dump_to_vec(&Value::Uint(n));
        let shifts = ops.iter().filter(|op| **op == Op::Ishl).count();
        let incs = ops.iter().filter(|op| **op == Op::Iinc).count();
        assert_eq!(shifts as u32, 63 - n.leading_zeros(), "n = {:#x}", n);
        assert_eq!(incs as u32, n.count_ones(), "n = {:#x}", n);
    }
}

// ==================== Round trips ====================

#[test]
fn test_round_trip_ints() {
    for n in [0, 1, -1, 2, 42, -42, 0xabcd, i64::MAX, i64::MIN, i64::MIN + 1] {
        assert_round_trip(Value::Int(n));
    }
}

#[test]
fn test_round_trip_uints() {
    for n in [0, 1, 255, 1 << 63, u64::MAX] {
        assert_round_trip(Value::Uint(n));
    }
}

#[test]
fn test_round_trip_floats_bit_exact() {
    for x in [
        0.0,
        -0.0,
        1.0,
        -1.5,
        std::f64::consts::PI,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::MAX,
        f64::MIN,
        5e-324,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ] {
        let decoded = round_trip(&Value::Float(x));
        assert_eq!(
            decoded.as_float().map(f64::to_bits),
            Some(x.to_bits()),
            "x = {:e}",
            x
        );
    }
}

#[test]
fn test_round_trip_vm_built_negative_nan() {
    let mut vm = Vm::new();
    vm.feed_multi([Op::Fnan, Op::Fneg]).unwrap();
    let value = vm.into_top().unwrap();
    assert!(value.as_float().is_some_and(|x| x.is_nan() && x.is_sign_negative()));

    assert_snapshot!(listing(&value), @"Fnan");
    assert_round_trip(value);
}

#[test]
fn test_round_trip_nan_inside_containers() {
    let payload = f64::from_bits(0x7ff4_0000_0000_00ff);
    assert_round_trip(Value::array([Value::Float(-f64::NAN), Value::Float(payload)]));
    assert_round_trip(Value::object([("x", Value::Float(payload))]));
}

#[test]
fn test_round_trip_strings() {
    assert_round_trip(Value::string(""));
    assert_round_trip(Value::string("hello, world"));
    assert_round_trip(Value::string("日本語"));
    assert_round_trip(Value::String((0..=255).collect()));
}

#[test]
fn test_round_trip_bools_and_nil() {
    assert_round_trip(Value::Bool(false));
    assert_round_trip(Value::Bool(true));
    assert_round_trip(Value::Nil);
}

#[test]
fn test_round_trip_nested_containers() {
    let value = Value::object([
        ("name", Value::string("watson")),
        ("version", Value::Uint(1)),
        ("ratio", Value::Float(0.25)),
        ("enabled", Value::Bool(true)),
        ("missing", Value::Nil),
        (
            "tags",
            Value::array([Value::string("a"), Value::Int(-7), Value::array([])]),
        ),
        (
            "nested",
            Value::object([
                ("empty", Value::object::<&str, _>([])),
                ("deep", Value::array([Value::object([("x", Value::Int(1))])])),
            ]),
        ),
    ]);
    assert_round_trip(value);
}

#[test]
fn test_round_trip_non_utf8_keys() {
    assert_round_trip(Value::Object(
        [(vec![0xff, 0x00], Value::Int(1)), (vec![], Value::Int(2))]
            .into_iter()
            .collect(),
    ));
}

#[test]
fn test_round_trip_deep_nesting() {
    let mut value = Value::Nil;
    for depth in 0..64 {
        value = if depth % 2 == 0 {
            Value::array([value])
        } else {
            Value::object([("child", value)])
        };
    }
    assert_round_trip(value);
}

// ==================== Sinks ====================

#[test]
fn test_dump_straight_into_a_vm() {
    let value = Value::array([Value::Int(5), Value::string("x")]);
    let mut vm = Vm::new();
    dump(&value, &mut vm).unwrap();
    assert_eq!(vm.top(), Ok(&value));
}

#[test]
fn test_dumper_reuses_its_sink() {
    let mut dumper = Dumper::new(Vec::new());
    dumper.dump(&Value::Nil).unwrap();
    dumper.dump(&Value::Bool(false)).unwrap();
    assert_eq!(dumper.get_ref().len(), 2);

    let mut vm = Vm::new();
    vm.feed_multi(dumper.into_inner()).unwrap();
    assert_eq!(vm.stack(), &[Value::Nil, Value::Bool(false)]);
}

#[test]
fn test_sink_error_is_returned_unchanged() {
    #[derive(Debug, PartialEq)]
    struct Full(usize);

    let mut written = Vec::new();
    let sink = FnSink::new(|op: Op| {
        if written.len() == 4 {
            return Err(Full(written.len()));
        }
        written.push(op);
        Ok(())
    });
    let result = dump(&Value::string("hi"), sink);
    assert_eq!(result, Err(Full(4)));
    assert_eq!(written.len(), 4);
}

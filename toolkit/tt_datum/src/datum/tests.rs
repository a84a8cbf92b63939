use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use pretty_assertions::assert_eq;
use tt_url::Url;

use super::{Datum, DatumKind, Map};

fn hash_of(value: &Datum) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_map() -> Datum {
    let mut entries = Map::new();
    entries.insert(Datum::from("b"), Datum::from(2));
    entries.insert(Datum::from("a"), Datum::from(1));
    Datum::map(entries)
}

#[test]
fn default_is_undefined() {
    let value = Datum::default();
    assert!(value.is_undefined());
    assert_eq!(value.kind(), DatumKind::Undefined);
}

#[test]
fn kinds_and_type_names() {
    assert_eq!(Datum::Null.type_name(), "Null");
    assert_eq!(Datum::from(true).type_name(), "Boolean");
    assert_eq!(Datum::from(1).type_name(), "Integer");
    assert_eq!(Datum::from(1.0).type_name(), "Float");
    assert_eq!(Datum::from("x").type_name(), "String");
    assert_eq!(Datum::url(Url::new("file:/a")).type_name(), "URL");
    assert_eq!(Datum::vector(vec![]).type_name(), "Vector");
    assert_eq!(sample_map().type_name(), "Map");
}

#[test]
fn reset_returns_to_undefined() {
    let mut value = Datum::vector(vec![Datum::from(1), Datum::from(2)]);
    value.reset();
    assert_eq!(value, Datum::Undefined);
}

#[test]
fn clone_is_a_deep_copy() {
    let original = Datum::vector(vec![Datum::from(1)]);
    let mut copy = original.clone();
    if let Datum::Vector(items) = &mut copy {
        items.push(Datum::from(2));
    }
    assert_eq!(original, Datum::vector(vec![Datum::from(1)]));
    assert_eq!(copy, Datum::vector(vec![Datum::from(1), Datum::from(2)]));
}

#[test]
fn display_scalars() {
    assert_eq!(Datum::Undefined.to_string(), "undefined");
    assert_eq!(Datum::Null.to_string(), "null");
    assert_eq!(Datum::from(true).to_string(), "true");
    assert_eq!(Datum::from(-42).to_string(), "-42");
    assert_eq!(Datum::from("hello").to_string(), "hello");
}

#[test]
fn display_float_keeps_fractional_part() {
    assert_eq!(Datum::from(1.5).to_string(), "1.5");
    assert_eq!(Datum::from(2.0).to_string(), "2.0");
    assert_eq!(Datum::from(-0.0).to_string(), "-0.0");
}

#[test]
fn display_non_finite_floats() {
    assert_eq!(Datum::from(f64::INFINITY).to_string(), "inf");
    assert_eq!(Datum::from(f64::NEG_INFINITY).to_string(), "-inf");
    assert_eq!(Datum::from(f64::NAN).to_string(), "nan");
}

#[test]
fn display_containers() {
    let vector = Datum::vector(vec![Datum::from(1), Datum::from("a")]);
    assert_eq!(vector.to_string(), "[1, a]");
    assert_eq!(sample_map().to_string(), "{a: 1, b: 2}");
}

#[test]
fn repr_quotes_strings_and_wraps_urls() {
    assert_eq!(Datum::from("hi").repr(), "\"hi\"");
    assert_eq!(Datum::url(Url::new("file:/a")).repr(), "<URL file:/a>");
    assert_eq!(Datum::from(7).repr(), "7");
    assert_eq!(
        Datum::vector(vec![Datum::from(1)]).repr(),
        "[1]"
    );
}

#[test]
fn size_of_sized_kinds() {
    assert_eq!(Datum::from("abc").size(), Ok(3));
    assert_eq!(Datum::vector(vec![Datum::Null]).size(), Ok(1));
    assert_eq!(sample_map().size(), Ok(2));
}

#[test]
fn size_rejects_scalars() {
    let err = Datum::from(5).size().unwrap_err();
    assert_eq!(err.message(), "cannot get size of 5 of type Integer");
}

#[test]
fn numeric_kinds_compare_equal_by_value() {
    assert_eq!(Datum::from(1), Datum::from(1.0));
    assert_eq!(Datum::from(0), Datum::from(-0.0));
    assert_ne!(Datum::from(1), Datum::from(1.5));
}

#[test]
fn large_integers_compare_exactly() {
    // i64::MAX rounds up to 2^63 as f64 and must not compare equal.
    #[allow(clippy::cast_precision_loss)]
    let rounded = Datum::from(i64::MAX as f64);
    assert_ne!(Datum::from(i64::MAX), rounded);
    assert_eq!(Datum::from(i64::MAX).cmp(&rounded), Ordering::Less);
}

#[test]
fn string_and_url_compare_by_string_form() {
    let text = Datum::from("file:/a");
    let url = Datum::url(Url::new("file:/a"));
    assert_eq!(text, url);
    assert_eq!(hash_of(&text), hash_of(&url));
}

#[test]
fn nan_is_equal_to_itself_and_sorts_above_floats() {
    let nan = Datum::from(f64::NAN);
    assert_eq!(nan, nan.clone());
    assert_eq!(nan.cmp(&Datum::from(f64::INFINITY)), Ordering::Greater);
    assert_eq!(nan.cmp(&Datum::from("")), Ordering::Less);
}

#[test]
fn kind_rank_orders_distinct_families() {
    let mut values = vec![
        sample_map(),
        Datum::from("s"),
        Datum::from(1),
        Datum::vector(vec![]),
        Datum::from(false),
        Datum::Null,
        Datum::Undefined,
    ];
    values.sort();
    let kinds: Vec<DatumKind> = values.iter().map(Datum::kind).collect();
    assert_eq!(
        kinds,
        vec![
            DatumKind::Undefined,
            DatumKind::Null,
            DatumKind::Boolean,
            DatumKind::Integer,
            DatumKind::String,
            DatumKind::Vector,
            DatumKind::Map,
        ]
    );
}

#[test]
fn integers_and_floats_interleave_in_sort_order() {
    let mut values = vec![
        Datum::from(2),
        Datum::from(0.5),
        Datum::from(1),
        Datum::from(1.5),
    ];
    values.sort();
    assert_eq!(
        values,
        vec![
            Datum::from(0.5),
            Datum::from(1),
            Datum::from(1.5),
            Datum::from(2),
        ]
    );
}

#[test]
fn maps_order_by_keys_then_values() {
    let mut low = Map::new();
    low.insert(Datum::from("a"), Datum::from(1));
    let mut high = Map::new();
    high.insert(Datum::from("a"), Datum::from(2));
    assert!(Datum::map(low) < Datum::map(high));
}

#[test]
fn map_key_sequences_decide_before_values() {
    // ["a"] sorts before ["a", "b"], so the larger value under "a" must
    // not flip the comparison.
    let mut short = Map::new();
    short.insert(Datum::from("a"), Datum::from(9));
    let mut long = Map::new();
    long.insert(Datum::from("a"), Datum::from(0));
    long.insert(Datum::from("b"), Datum::from(0));
    assert_eq!(
        Datum::map(short).cmp(&Datum::map(long)),
        Ordering::Less
    );
}

#[test]
fn equal_values_hash_equal() {
    assert_eq!(hash_of(&Datum::from(1)), hash_of(&Datum::from(1.0)));
    assert_eq!(hash_of(&Datum::from(0.0)), hash_of(&Datum::from(-0.0)));
    assert_eq!(
        hash_of(&Datum::from(f64::NAN)),
        hash_of(&Datum::from(-f64::NAN))
    );
    assert_eq!(hash_of(&sample_map()), hash_of(&sample_map()));
}

#[test]
fn datum_works_as_a_map_key() {
    let mut entries = Map::new();
    entries.insert(Datum::from(1), Datum::from("int"));
    // Float 1.0 is the same key as Integer 1.
    entries.insert(Datum::from(1.0), Datum::from("float"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.get(&Datum::from(1)), Some(&Datum::from("float")));
}

#[test]
fn numeric_conversions() {
    assert_eq!(Datum::from(3).to_f64(), Ok(3.0));
    assert_eq!(Datum::from(2.5).to_i64(), Ok(2));
    assert_eq!(Datum::from(-2.5).to_i64(), Ok(-2));
    assert_eq!(Datum::from(true).to_i64(), Ok(1));
    assert_eq!(Datum::from(300).to_u16(), Ok(300));
}

#[test]
fn narrowing_conversions_are_range_checked() {
    let err = Datum::from(300).to_u8().unwrap_err();
    assert_eq!(err.message(), "cannot convert 300 of type Integer to u8");
    assert!(Datum::from(-1).to_u64().is_err());
    assert!(Datum::from(i64::from(i32::MAX) + 1).to_i32().is_err());
}

#[test]
fn conversion_rejects_foreign_kinds() {
    let err = Datum::from("x").to_f64().unwrap_err();
    assert_eq!(err.message(), "cannot convert \"x\" of type String to f64");
    assert!(Datum::Null.to_i64().is_err());
    assert!(Datum::from(1).to_vector().is_err());
}

#[test]
fn truthiness_is_total() {
    assert!(!Datum::Undefined.to_bool());
    assert!(!Datum::Null.to_bool());
    assert!(!Datum::from(0).to_bool());
    assert!(Datum::from(0.5).to_bool());
    assert!(Datum::from(f64::NAN).to_bool());
    assert!(!Datum::from("").to_bool());
    assert!(Datum::from("x").to_bool());
    assert!(Datum::url(Url::new("file:/a")).to_bool());
    assert!(!Datum::vector(vec![]).to_bool());
    assert!(sample_map().to_bool());
}

#[test]
fn char_conversion_requires_one_character() {
    assert_eq!(Datum::from('x').to_char(), Ok('x'));
    assert!(Datum::from("xy").to_char().is_err());
    assert!(Datum::from("").to_char().is_err());
}

#[test]
fn url_conversion_parses_strings() {
    let from_string = Datum::from("HTTP://Example.com/a/../b").to_url();
    assert_eq!(from_string, Ok(Url::new("http://Example.com/b")));
    let url = Url::new("file:/x");
    assert_eq!(Datum::url(url.clone()).to_url(), Ok(url));
    assert!(Datum::from(1).to_url().is_err());
}

#[test]
fn try_from_delegates_to_conversions() {
    assert_eq!(i64::try_from(&Datum::from(9)), Ok(9));
    assert_eq!(f64::try_from(Datum::from(9)), Ok(9.0));
    assert_eq!(String::from(&Datum::from(1.5)), "1.5");
    assert!(char::try_from(&Datum::Null).is_err());
}

//! Wire-format conformance: number classification, string rules,
//! structural limits, encoder output, the size-probe law, pretty
//! printing, and the round-trip invariants.

use pretty_assertions::assert_eq;

use jitjson::{decode, decode_str, equal, JsonError, Kind, Pretty, Value};

fn dec(text: &str) -> Value {
    decode_str(text).unwrap_or_else(|e| panic!("decode failed for {text:?}: {e}"))
}

fn fails(text: &str) {
    assert!(
        matches!(decode_str(text), Err(JsonError::Syntax { .. })),
        "expected syntax failure for {text:?}"
    );
}

// ── Number classification ───────────────────────────────────

#[test]
fn number_classification_vectors() {
    let vectors: &[(&str, Value)] = &[
        ("0", Value::Integer(0)),
        ("-1", Value::Integer(-1)),
        ("9223372036854775807", Value::Integer(i64::MAX)),
        ("9223372036854775808", Value::Unsigned(9223372036854775808)),
        ("18446744073709551615", Value::Unsigned(u64::MAX)),
        ("-9223372036854775808", Value::Integer(i64::MIN)),
        // Magnitude past u64 with no fraction or exponent: float, final.
        ("18446744073709551616", Value::Float(1.8446744073709552e19)),
        ("-18446744073709551616", Value::Float(-1.8446744073709552e19)),
        // Fraction/exponent forms that denote exact integers promote back.
        ("0.0001E4", Value::Integer(1)),
        ("1e2", Value::Integer(100)),
        ("922337203685477580.7E1", Value::Integer(i64::MAX)),
        ("-922337203685477580.8E1", Value::Integer(i64::MIN)),
        ("1844674407370955161.5E1", Value::Unsigned(u64::MAX)),
        ("1e19", Value::Unsigned(10_000_000_000_000_000_000)),
        ("3.5", Value::Float(3.5)),
        ("-2.5e-3", Value::Float(-0.0025)),
        ("1e300", Value::Float(1e300)),
        ("-0.0", Value::Float(0.0)),
        ("0.0", Value::Float(0.0)),
        // Subnormal magnitudes flush to zero.
        ("1e-320", Value::Float(0.0)),
    ];
    for (input, expected) in vectors {
        let got = dec(input);
        assert_eq!(got.kind(), expected.kind(), "kind for {input:?}");
        assert!(
            equal(&got, expected, 0.0),
            "value for {input:?}: got {got}, expected {expected}"
        );
    }
}

#[test]
fn numbers_out_of_lexical_form_fail() {
    for bad in ["-", "+1", ".5", "1.", "1.e3", "1e", "1e+", "--1", "0x10", "1e999"] {
        fails(bad);
    }
}

#[test]
fn leading_zeros_are_tolerated() {
    assert_eq!(dec("01").kind(), Kind::Integer);
    assert!(equal(&dec("01"), &Value::Integer(1), 0.0));
}

#[test]
fn negative_zero_is_stable_across_passes() {
    let first = dec("-0.0").encode();
    let second = dec(&first).encode();
    assert_eq!(first, second);
}

// ── Strings ─────────────────────────────────────────────────

#[test]
fn surrogate_pair_decodes_to_utf8() {
    let v = dec(r#""\uD852\uDF62""#);
    assert_eq!(v.as_str().map(str::as_bytes), Some(&[0xF0, 0xA4, 0xAD, 0xA2][..]));
    // Hex digits are case-insensitive.
    assert_eq!(dec(r#""\ud852\udf62""#), v);
}

#[test]
fn lone_surrogates_fail() {
    fails(r#""\uDC00""#);
    fails(r#""\uD800""#);
    fails(r#""\uD800x""#);
    fails(r#""\uD800A""#);
    fails(r#""\uD800\uD800""#);
}

#[test]
fn named_escapes_decode() {
    let v = dec(r#""\"\\\/\b\f\n\r\t""#);
    assert_eq!(v.as_str(), Some("\"\\/\u{8}\u{c}\n\r\t"));
}

#[test]
fn invalid_escapes_fail() {
    fails(r#""\x41""#);
    fails(r#""\u12g4""#);
    fails(r#""\u12""#);
    fails(r#""abc"#);
}

#[test]
fn utf8_validation_by_lead_byte() {
    // Overlong, encoded surrogate, out of range, truncated, bare
    // continuation: all syntax failures.
    for bad in [
        &b"\"\xC0\xAF\""[..],
        &b"\"\xC1\x81\""[..],
        &b"\"\xED\xA0\x80\""[..],
        &b"\"\xF5\x80\x80\x80\""[..],
        &b"\"\xE2\x82\""[..],
        &b"\"\xF0\xA4\xAD\""[..],
        &b"\"\x80\""[..],
        &b"\"\xE0\x80\x80\""[..],
        &b"\"\xF0\x80\x80\x80\""[..],
    ] {
        assert!(matches!(decode(bad), Err(JsonError::Syntax { .. })));
    }
    // Well-formed two-, three-, and four-byte sequences pass through.
    let v = decode(b"\"\xC2\xBF \xE2\x82\xAC \xF0\xA4\xAD\xA2\"").unwrap();
    assert_eq!(v.as_str(), Some("¿ € 𤭢"));
}

#[test]
fn unescaped_controls_decode_and_reescape() {
    let v = decode(b"\"a\x01b\x7Fc\"").unwrap();
    assert_eq!(v.as_str(), Some("a\u{1}b\u{7f}c"));
    assert_eq!(v.encode(), r#""abc""#);
}

#[test]
fn c1_controls_reescape() {
    // U+0085 and U+009F arrive as the two-byte sequences 0xC2 0x85 and
    // 0xC2 0x9F and leave as \u00XX escapes.
    let v = decode(b"\"\xC2\x85\xC2\x9F\"").unwrap();
    assert_eq!(v.as_str(), Some("\u{85}\u{9f}"));
    assert_eq!(v.encode(), r#""\u0085\u009f""#);
    assert_eq!(dec(r#""\u0085\u009f""#), v);
}

#[test]
fn solidus_decodes_but_never_reescapes() {
    assert_eq!(dec(r#""\/""#).encode(), r#""/""#);
}

// ── Structure ───────────────────────────────────────────────

#[test]
fn nesting_budget_is_two_hundred() {
    let ok = format!("{}{}", "[".repeat(200), "]".repeat(200));
    assert!(decode_str(&ok).is_ok());
    let too_deep = "[".repeat(201);
    fails(&too_deep);
}

#[test]
fn trailing_garbage_fails() {
    fails("1 2");
    fails("nullx");
    fails("{} []");
    assert!(decode_str(" \t\r\n null \t ").is_ok());
}

#[test]
fn malformed_containers_fail() {
    for bad in [
        "[1,]", "[,1]", "[1 2]", "[1", "]", r#"{"a":1,}"#, r#"{"a" 1}"#, r#"{"a":}"#,
        r#"{a:1}"#, r#"{"a":1"#, r#"{"#, "[}",
    ] {
        fails(bad);
    }
    assert!(decode_str("[]").is_ok());
    assert!(decode_str("{}").is_ok());
}

#[test]
fn literals_are_byte_exact() {
    assert_eq!(dec("true"), Value::Boolean(true));
    assert_eq!(dec("false"), Value::Boolean(false));
    assert!(dec("null").is_null());
    for bad in ["True", "tru", "truee", "FALSE", "nul", "None", "NaN", "Infinity"] {
        fails(bad);
    }
}

// ── Encoder output and the size probe ───────────────────────

#[test]
fn raw_fragments_emit_verbatim() {
    let mut object = jitjson::Object::new();
    object.put("inline", Value::raw(r#"{"pre": "encoded"}"#));
    let doc = Value::Object(object);
    assert_eq!(doc.encode(), r#"{"inline":{"pre": "encoded"}}"#);
}

#[test]
fn size_probe_equals_actual_length() {
    let doc = dec(r#"{"string":"\t¿𤭢","n":-12345,"f":3.5,"l":[null,true,1e19]}"#);
    let text = doc.encode();
    assert_eq!(doc.encoded_len(), text.len());

    // Zero capacity is a pure probe.
    assert_eq!(doc.encode_into(&mut []), text.len());

    // A full-size buffer takes the whole encoding.
    let mut buf = vec![0u8; text.len()];
    assert_eq!(doc.encode_into(&mut buf), text.len());
    assert_eq!(&buf, text.as_bytes());

    // A short buffer holds the prefix; the return signals truncation.
    let mut short = vec![0u8; 10];
    let total = doc.encode_into(&mut short);
    assert_eq!(total, text.len());
    assert!(total > short.len());
    assert_eq!(&short, &text.as_bytes()[..10]);
}

#[test]
fn pretty_size_probe_matches_too() {
    let style = Pretty { left_margin: 3, indentation: 4 };
    let doc = dec(r#"{"a":[1,{"b":[]}]}"#);
    let text = doc.encode_pretty(&style);
    assert_eq!(doc.pretty_len(&style), text.len());
    assert_eq!(doc.encode_pretty_into(&style, &mut []), text.len());
}

// ── Pretty printer ──────────────────────────────────────────

#[test]
fn pretty_output_shape() {
    let doc = dec(r#"{"a":[1,2],"b":{},"c":"x"}"#);
    let expected = "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {},\n  \"c\": \"x\"\n}";
    assert_eq!(doc.encode_pretty(&Pretty::default()), expected);
}

#[test]
fn pretty_honors_margin_and_step() {
    let doc = dec("[1,2]");
    let style = Pretty { left_margin: 4, indentation: 3 };
    assert_eq!(doc.encode_pretty(&style), "[\n       1,\n       2\n    ]");
}

#[test]
fn pretty_empty_containers_stay_inline() {
    assert_eq!(dec("[]").encode_pretty(&Pretty::default()), "[]");
    assert_eq!(dec("{}").encode_pretty(&Pretty::default()), "{}");
}

/// Dropping every byte the pretty printer inserts outside strings must
/// reproduce the compact encoding exactly.
#[test]
fn pretty_is_a_whitespace_superset_of_compact() {
    let doc = dec(r#"{"s":"a b\nc","l":[1,[2,{"k":null}],true],"e":{},"f":3.5}"#);
    let pretty = doc.encode_pretty(&Pretty { left_margin: 2, indentation: 4 });
    assert_eq!(strip_outside_strings(&pretty), doc.encode());
}

fn strip_outside_strings(text: &str) -> String {
    let mut out = String::new();
    let mut in_string = false;
    let mut escaped = false;
    for ch in text.chars() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
        } else if ch == '"' {
            in_string = true;
            out.push(ch);
        } else if ch != ' ' && ch != '\n' {
            out.push(ch);
        }
    }
    out
}

// ── Round-trip invariants ───────────────────────────────────

#[test]
fn exact_round_trip_without_floats() {
    let doc = dec(
        r#"{"i":-42,"max":9223372036854775807,"u":18446744073709551615,
            "s":"text with \"quotes\" and 𤭢","b":[true,false,null],
            "nested":{"empty":[],"also":{}}}"#,
    );
    let back = dec(&doc.encode());
    assert!(equal(&doc, &back, 0.0));
}

#[test]
fn float_round_trip_within_tolerance() {
    let doc = dec(r#"{"pi":3.14159265,"tiny":-2.5e-3,"big":1.5e300,"zero":0.0}"#);
    let back = dec(&doc.encode());
    assert!(equal(&doc, &back, 1e-12));
}

#[test]
fn encodings_satisfy_an_independent_consumer() {
    for text in [
        r#"{"ab":" 𤭢","n":[-0.0,1e19,18446744073709551615]}"#,
        "[\"\\t\\\"¿\",{},[],null]",
        "3.14159265",
    ] {
        let encoded = dec(text).encode();
        assert!(
            serde_json::from_str::<serde_json::Value>(&encoded).is_ok(),
            "serde_json rejected {encoded:?}"
        );
    }
}

// ── End-to-end document ─────────────────────────────────────

#[test]
fn classic_document_round_trips_byte_for_byte() {
    let input = r#"{"string":"\t\"¿xyzzy? \uD852\udf62","truth":true,"lie":false,"nothing":null,"year":2017,"months":[1,3,5,7,8,10,12],"π":3.14159265}"#;
    let doc = dec(input);
    let expected = r#"{"string":"\t\"¿xyzzy? 𤭢","truth":true,"lie":false,"nothing":null,"year":2017,"months":[1,3,5,7,8,10,12],"π":3.14159265}"#;
    assert_eq!(doc.encode(), expected);

    // Fields stay in insertion order and survive a second pass.
    assert_eq!(dec(&doc.encode()).encode(), expected);

    let object = doc.as_object().unwrap();
    assert_eq!(object.get_integer("year"), Some(2017));
    assert_eq!(object.get_array("months").map(|m| m.len()), Some(7));
    assert!(object.get_float("π").is_some());
}

// ── Equality scenarios ──────────────────────────────────────

#[test]
fn object_equality_ignores_field_order() {
    let a = dec(r#"{"x":1,"y":[2,3],"z":"s"}"#);
    let b = dec(r#"{"z":"s","x":1,"y":[2,3]}"#);
    assert!(equal(&a, &b, 0.0));
}

#[test]
fn extra_or_missing_keys_break_equality() {
    let a = dec(r#"{"x":1}"#);
    let b = dec(r#"{"x":1,"y":2}"#);
    assert!(!equal(&a, &b, 0.0));
    assert!(!equal(&b, &a, 0.0));
}

#[test]
fn float_fields_compare_under_tolerance() {
    let a = dec(r#"{"pi":3.14159265}"#);
    let close = dec(r#"{"pi":3.14159265000001}"#);
    let far = dec(r#"{"pi":3.1415928}"#);
    assert!(equal(&a, &close, 1e-12));
    assert!(!equal(&a, &far, 1e-12));
}

#[test]
fn array_length_breaks_equality_regardless_of_content() {
    let a = dec("[1,2]");
    assert!(!equal(&a, &dec("[1,2,3]"), 0.0));
    assert!(!equal(&a, &dec("[1,3]"), 0.0));
    assert!(equal(&dec("[]"), &dec("[]"), 0.0));
}

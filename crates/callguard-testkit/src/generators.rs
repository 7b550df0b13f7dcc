//! Proptest generators for property-based testing.

use std::collections::BTreeMap;

use bytes::Bytes;
use proptest::prelude::*;

use callguard_core::{
    CoinDescriptor, CoinSelector, CoinSupport, FirmwareRange, GenerationRange, OverrideEntry,
    ParamKind, ParamValue, ParameterSpec, ValueBag, UNBOUNDED,
};

/// Method names used by generated overrides and calls.
pub const METHODS: &[&str] = &[
    "getAddress",
    "getPublicKey",
    "getAccountInfo",
    "signTransaction",
    "signMessage",
    "ethereumSignTypedData",
];

/// A dotted `major.minor.patch` version.
pub fn version() -> impl Strategy<Value = String> {
    (1u32..=3, 0u32..=12, 0u32..=12).prop_map(|(a, b, c)| format!("{a}.{b}.{c}"))
}

/// A version or the unbounded sentinel.
pub fn bound() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(UNBOUNDED.to_owned()),
        4 => version(),
    ]
}

pub fn generation_range() -> impl Strategy<Value = GenerationRange> {
    (bound(), bound()).prop_map(|(min, max)| GenerationRange::new(min, max))
}

pub fn firmware_range() -> impl Strategy<Value = FirmwareRange> {
    (generation_range(), generation_range()).prop_map(|(a, b)| FirmwareRange::new(a, b))
}

pub fn method() -> impl Strategy<Value = String> {
    prop::sample::select(METHODS).prop_map(str::to_owned)
}

const SHORTCUTS: &[&str] = &["BTC", "LTC", "ETH", "ETC", "XRP", "ADA", "DASH"];

const COIN_TYPES: &[&str] = &["bitcoin", "ethereum", "misc"];

fn shortcut() -> impl Strategy<Value = String> {
    prop::sample::select(SHORTCUTS).prop_map(str::to_owned)
}

fn coin_type() -> impl Strategy<Value = String> {
    prop::sample::select(COIN_TYPES).prop_map(str::to_owned)
}

pub fn coin_descriptor() -> impl Strategy<Value = CoinDescriptor> {
    (
        0u32..2000,
        proptest::option::of(coin_type()),
        shortcut(),
        proptest::option::of(version()),
        proptest::option::of(version()),
    )
        .prop_map(|(slip44, coin_type, shortcut, gen_one, gen_two)| CoinDescriptor {
            slip44,
            coin_type,
            shortcut,
            support: CoinSupport { gen_one, gen_two },
        })
}

fn coin_selector() -> impl Strategy<Value = CoinSelector> {
    prop_oneof![
        shortcut().prop_map(|s| CoinSelector::One(s.to_lowercase())),
        prop::collection::vec(shortcut().prop_map(|s| s.to_lowercase()), 1..3)
            .prop_map(CoinSelector::Many),
    ]
}

fn bound_pair() -> impl Strategy<Value = [String; 2]> {
    (bound(), bound()).prop_map(|(a, b)| [a, b])
}

pub fn override_entry() -> impl Strategy<Value = OverrideEntry> {
    (
        proptest::option::of(coin_type()),
        proptest::option::of(coin_selector()),
        proptest::option::of(prop::collection::vec(method(), 1..3)),
        proptest::option::of(bound_pair()),
        proptest::option::of(bound_pair()),
    )
        .prop_map(|(coin_type, coin, excluded_methods, min, max)| OverrideEntry {
            coin_type,
            coin,
            excluded_methods,
            min,
            max,
        })
}

pub fn overrides(max_len: usize) -> impl Strategy<Value = Vec<OverrideEntry>> {
    prop::collection::vec(override_entry(), 0..=max_len)
}

pub fn param_kind() -> impl Strategy<Value = ParamKind> {
    prop_oneof![
        Just(ParamKind::String),
        Just(ParamKind::Number),
        Just(ParamKind::Boolean),
        Just(ParamKind::Array),
        Just(ParamKind::ArrayBuffer),
        Just(ParamKind::Amount),
        Just(ParamKind::Object),
    ]
}

/// A value that satisfies `kind` (arrays are never empty).
pub fn value_of(kind: ParamKind) -> BoxedStrategy<ParamValue> {
    match kind {
        ParamKind::String => "[a-z]{0,8}".prop_map(ParamValue::String).boxed(),
        ParamKind::Number => any::<i64>().prop_map(ParamValue::from).boxed(),
        ParamKind::Boolean => any::<bool>().prop_map(ParamValue::Bool).boxed(),
        ParamKind::Array => prop::collection::vec(any::<u32>().prop_map(ParamValue::from), 1..4)
            .prop_map(ParamValue::Array)
            .boxed(),
        ParamKind::ArrayBuffer => prop::collection::vec(any::<u8>(), 0..16)
            .prop_map(|b| ParamValue::Bytes(Bytes::from(b)))
            .boxed(),
        ParamKind::Amount => any::<u128>()
            .prop_map(|n| ParamValue::String(n.to_string()))
            .boxed(),
        ParamKind::Object => prop::collection::btree_map("[a-z]{1,4}", any::<bool>(), 0..3)
            .prop_map(|m| {
                ParamValue::Object(
                    m.into_iter()
                        .map(|(k, v)| (k, ParamValue::Bool(v)))
                        .collect::<BTreeMap<_, _>>(),
                )
            })
            .boxed(),
    }
}

/// A declared contract together with a bag that satisfies it.
#[derive(Debug, Clone)]
pub struct ContractCase {
    pub fields: Vec<ParameterSpec>,
    pub values: ValueBag,
}

impl Arbitrary for ContractCase {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop::collection::vec((param_kind(), any::<bool>(), any::<bool>()), 0..8)
            .prop_flat_map(|shape| {
                let values: Vec<_> = shape
                    .iter()
                    .map(|&(kind, _, _)| value_of(kind))
                    .collect();
                (Just(shape), values)
            })
            .prop_map(|(shape, values)| {
                let mut case = ContractCase {
                    fields: Vec::new(),
                    values: ValueBag::new(),
                };
                for (i, ((kind, obligatory, present), value)) in
                    shape.into_iter().zip(values).enumerate()
                {
                    let name = format!("param{i}");
                    let mut spec = ParameterSpec::new(name.clone(), kind);
                    spec.obligatory = obligatory;
                    // Obligatory parameters are always supplied.
                    if obligatory || present {
                        case.values.insert(name, value);
                    }
                    case.fields.push(spec);
                }
                case
            })
            .boxed()
    }
}

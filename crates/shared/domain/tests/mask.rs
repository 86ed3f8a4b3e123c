use chub_domain::field::InputKind;
use chub_domain::mask::MaskKind;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn mask_kinds_round_trip_through_their_keys() {
    for kind in MaskKind::iter() {
        let key: &'static str = kind.into();
        assert_eq!(MaskKind::from_str(key).ok(), Some(kind));
        assert_eq!(kind.to_string(), key);
    }
    assert_eq!(MaskKind::iter().count(), 5);
}

#[test]
fn mask_keys_are_exact() {
    assert!(MaskKind::from_str("CPF").is_err());
    assert!(MaskKind::from_str("unknown").is_err());
    assert_eq!(MaskKind::from_str("cep").ok(), Some(MaskKind::Cep));
}

#[test]
fn mask_kind_serde_uses_lowercase_keys() {
    let json = serde_json::to_string(&MaskKind::Cnpj).unwrap();
    assert_eq!(json, "\"cnpj\"");
    let back: MaskKind = serde_json::from_str("\"phone\"").unwrap();
    assert_eq!(back, MaskKind::Phone);
}

#[test]
fn special_inputs_are_number_and_date() {
    assert!(InputKind::Number.is_special());
    assert!(InputKind::Date.is_special());
    assert!(!InputKind::Text.is_special());
    assert!(!InputKind::Password.is_special());
    assert!(InputKind::Password.is_secret());
    assert_eq!(InputKind::Tel.to_string(), "tel");
}

use chub_domain::config::ClientConfig;
use chub_masking::{
    MaskError, MaskExt, MaskKind, Masking, apply_mask, get_mask_config, parse_kind, validate_mask,
};

#[test]
fn phone_scenarios() {
    assert_eq!(apply_mask("11999998888", "phone"), "(11) 99999-8888");
    assert_eq!(apply_mask("1133334444", "phone"), "(11) 3333-4444");
    assert_eq!(apply_mask("(11) 3333-44445", "phone"), "(11) 33334-4445");
    assert_eq!(apply_mask("119", "phone"), "(11) 9");
    assert_eq!(apply_mask("", "phone"), "");
}

#[test]
fn twelfth_phone_digit_is_rejected() {
    assert_eq!(MaskKind::Phone.try_apply("(11) 99999-88881"), None);
    // The stateless form keeps the value the field held before the keystroke.
    assert_eq!(apply_mask("(11) 99999-88881", "phone"), "(11) 99999-8888");
}

#[test]
fn document_scenarios() {
    assert_eq!(apply_mask("12345678900", "cpf"), "123.456.789-00");
    assert_eq!(apply_mask("1234", "cpf"), "123.4");
    assert_eq!(apply_mask("11222333000181", "cnpj"), "11.222.333/0001-81");
    assert_eq!(apply_mask("112223330", "cnpj"), "11.222.333/0");
    assert_eq!(apply_mask("12345678", "cep"), "12345-678");
    assert_eq!(apply_mask("12345-67a8", "cep"), "12345-678");
}

#[test]
fn currency_scenarios() {
    assert_eq!(apply_mask("", "currency"), "");
    assert_eq!(apply_mask("100", "currency"), "R$ 1,00");
    assert_eq!(apply_mask("R$ 1,005", "currency"), "R$ 10,05");
    assert_eq!(apply_mask("R$ 10,0", "currency"), "R$ 1,00");
    assert_eq!(apply_mask("12345678", "currency"), "R$ 123.456,78");
}

#[test]
fn validation_scenarios() {
    assert!(validate_mask("123.456.789-00", "cpf"));
    assert!(!validate_mask("123.456.789-0", "cpf"));
    assert!(validate_mask("12345-678", "cep"));
    assert!(!validate_mask("12345-67", "cep"));
    assert!(validate_mask("(11) 99999-8888", "phone"));
    assert!(!validate_mask("(11) 3333-4444", "phone"));
    assert!(!validate_mask("", "currency"));
    assert!(validate_mask("R$ 0,00", "currency"));
}

#[test]
fn unknown_field_types_pass_through() {
    assert!(get_mask_config("unknown").is_none());
    assert!(get_mask_config("CPF").is_none());
    assert_eq!(apply_mask("abc-123", "unknown"), "abc-123");
    assert!(validate_mask("", "unknown"));

    let err = parse_kind("rg").expect_err("rg is not a mask");
    assert!(matches!(err, MaskError::UnknownKind { .. }));
    assert_eq!(err.to_string(), "Unknown mask 'rg'");
}

#[test]
fn config_lookup_exposes_rules() {
    let rule = get_mask_config("cnpj").expect("cnpj is registered");
    assert_eq!(rule.kind, MaskKind::Cnpj);
    assert_eq!((rule.min_digits, rule.max_digits), (14, 14));
    assert_eq!(rule.placeholder, "00.000.000/0000-00");
    assert_eq!(rule.max_formatted_length, Some(18));
    assert_eq!(MaskKind::Cep.rule().placeholder, "00000-000");
}

#[test]
fn masking_slice_uses_configured_locale() {
    let mut config = ClientConfig::default();
    config.locale.currency_symbol = "US$".to_owned();
    config.locale.decimal_separator = '.';
    config.locale.thousands_separator = ',';

    let masking = Masking::from_config(&config).expect("valid locale");
    assert_eq!(masking.apply(MaskKind::Currency, "123456"), "US$ 1,234.56");
    assert_eq!(masking.apply(MaskKind::Cpf, "12345678900"), "123.456.789-00");
    assert_eq!(masking.max_length(MaskKind::Currency), Some(20));
    assert_eq!(masking.max_length(MaskKind::Cep), Some(9));
}

#[test]
fn masking_slice_rejects_digit_symbols() {
    let mut config = ClientConfig::default();
    config.locale.currency_symbol = "R1".to_owned();

    let err = Masking::from_config(&config).expect_err("digits in symbol are ambiguous");
    assert_eq!(err.kind(), "InvalidLocale");
    assert!(err.to_string().contains("(locale)"));
}

#[test]
fn init_registers_the_masking_slice() {
    let slice = chub_masking::init(&ClientConfig::default()).expect("init should succeed");
    assert!(slice.is::<Masking>());
    assert_eq!(slice.name, "Masking");
}

#[test]
fn phone_area_code_stays_bare_until_complete() {
    assert_eq!(apply_mask("1", "phone"), "1");
    assert_eq!(apply_mask("11", "phone"), "11");
    assert_eq!(apply_mask("(11", "phone"), "11");
    assert_eq!(apply_mask("119", "phone"), "(11) 9");
    assert!(!validate_mask("11", "phone"));
}

#[test]
fn stateless_over_length_input_is_clipped() {
    // Appending at the end yields the previous value.
    assert_eq!(apply_mask("12345-6789", "cep"), "12345-678");
    // A digit inserted at the front shifts everything instead.
    assert_eq!(apply_mask("912345-678", "cep"), "91234-567");
    assert_eq!(apply_mask("1234567890123", "cpf"), "123.456.789-01");
    // The keystroke-level entry point rejects both.
    assert_eq!(MaskKind::Cep.try_apply("912345-678"), None);
    assert_eq!(MaskKind::Cpf.try_apply("1234567890123"), None);
}

#[test]
fn registry_currency_cap_assumes_brl() {
    let widest = "9".repeat(12);
    assert_eq!(apply_mask(&widest, "currency").chars().count(), 19);
    assert_eq!(get_mask_config("currency").and_then(|r| r.max_formatted_length), Some(19));

    let mut config = ClientConfig::default();
    config.locale.currency_symbol = "US$".to_owned();
    let masking = Masking::from_config(&config).expect("valid locale");
    let formatted = masking.apply(MaskKind::Currency, &widest);
    assert_eq!(formatted, "US$ 9.999.999.999,99");
    assert_eq!(Some(formatted.chars().count()), masking.max_length(MaskKind::Currency));
}

use chub::domain::config::ClientConfig;
use chub::masking::{MaskKind, Masking};
use chub::{ClientError, features, init};

#[test]
fn init_registers_masking_with_configured_locale() {
    let mut config = ClientConfig::default();
    config.locale.currency_symbol = "€".to_owned();

    let state = init(&config).expect("default config initializes");
    let masking = state.try_get_slice::<Masking>().expect("masking registered");
    assert_eq!(masking.apply(MaskKind::Currency, "1999"), "€ 19,99");
    assert_eq!(state.config.locale.currency_symbol, "€");
    assert_eq!(state.slice_names().count(), 1);
}

#[test]
fn init_rejects_ambiguous_locales() {
    let mut config = ClientConfig::default();
    config.locale.thousands_separator = ',';

    let err = init(&config).unwrap_err();
    assert!(matches!(err, ClientError::Masking { .. }));
}

#[test]
fn default_features_are_listed() {
    assert!(features::is_enabled("masking"));
    assert!(features::is_enabled("forms"));
    assert!(features::is_enabled("assessment"));
    assert!(!features::is_enabled("licensing"));
}

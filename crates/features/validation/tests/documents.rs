use chub_masking::{MaskExt, MaskKind};
use chub_validation::{is_valid_cnpj, is_valid_cpf};
use proptest::prelude::*;

/// Builds a valid CPF from nine base digits using the published algorithm.
fn cpf_from_base(base: &[u32]) -> String {
    let mut digits = base.to_vec();
    for len in [9_u32, 10] {
        let sum: u32 = digits.iter().zip((2..=len + 1).rev()).map(|(d, w)| d * w).sum();
        let check = (sum * 10) % 11 % 10;
        digits.push(check);
    }
    digits.iter().map(|d| char::from_digit(*d, 10).unwrap_or('0')).collect()
}

proptest! {
    #[test]
    fn generated_cpfs_validate_in_any_format(base in prop::collection::vec(0_u32..10, 9)) {
        prop_assume!(base.windows(2).any(|w| w[0] != w[1]));
        let raw = cpf_from_base(&base);

        prop_assert!(is_valid_cpf(&raw));
        prop_assert!(is_valid_cpf(&MaskKind::Cpf.apply(&raw)));
    }

    #[test]
    fn changing_the_last_digit_breaks_a_cpf(base in prop::collection::vec(0_u32..10, 9), bump in 1_u32..10) {
        prop_assume!(base.windows(2).any(|w| w[0] != w[1]));
        let mut raw = cpf_from_base(&base);
        let last = raw.pop().and_then(|c| c.to_digit(10)).unwrap_or(0);
        raw.push(char::from_digit((last + bump) % 10, 10).unwrap_or('0'));

        prop_assert!(!is_valid_cpf(&raw));
    }
}

#[test]
fn known_cnpjs() {
    assert!(is_valid_cnpj(&MaskKind::Cnpj.apply("11222333000181")));
    assert!(!is_valid_cnpj("11.111.111/1111-11"));
}

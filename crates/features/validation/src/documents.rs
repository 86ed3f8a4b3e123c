//! Check-digit validation for Brazilian taxpayer IDs (módulo 11).
//!
//! Both functions accept formatted or raw input; only ASCII digits are considered.

const CPF_LEN: usize = 11;
const CNPJ_LEN: usize = 14;
const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn digits(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| if c.is_ascii_digit() { c.to_digit(10) } else { None }).collect()
}

/// Repeated sequences like `111.111.111-11` pass the arithmetic but are never issued.
fn is_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// Validates a CPF's two check digits.
///
/// ```
/// use chub_validation::documents::is_valid_cpf;
///
/// assert!(is_valid_cpf("529.982.247-25"));
/// assert!(!is_valid_cpf("529.982.247-26"));
/// ```
#[must_use]
pub fn is_valid_cpf(value: &str) -> bool {
    let digits = digits(value);
    if digits.len() != CPF_LEN || is_repeated(&digits) {
        return false;
    }

    (9..CPF_LEN).all(|pos| cpf_check_digit(&digits[..pos]) == digits[pos])
}

/// Weights run from `len + 1` down to 2 over the prefix.
fn cpf_check_digit(prefix: &[u32]) -> u32 {
    let top = u32::try_from(prefix.len()).unwrap_or(u32::MAX) + 1;
    let sum: u32 = prefix.iter().zip((2..=top).rev()).map(|(&d, w)| d * w).sum();
    match (sum * 10) % 11 {
        10 => 0,
        check => check,
    }
}

/// Validates a CNPJ's two check digits.
///
/// ```
/// use chub_validation::documents::is_valid_cnpj;
///
/// assert!(is_valid_cnpj("11.222.333/0001-81"));
/// assert!(!is_valid_cnpj("11.222.333/0001-82"));
/// ```
#[must_use]
pub fn is_valid_cnpj(value: &str) -> bool {
    let digits = digits(value);
    if digits.len() != CNPJ_LEN || is_repeated(&digits) {
        return false;
    }

    (12..CNPJ_LEN).all(|pos| cnpj_check_digit(&digits[..pos]) == digits[pos])
}

/// The first check digit uses the last 12 weights, the second all 13.
fn cnpj_check_digit(prefix: &[u32]) -> u32 {
    let weights = &CNPJ_WEIGHTS[CNPJ_WEIGHTS.len() - prefix.len()..];
    let sum: u32 = prefix.iter().zip(weights).map(|(&d, &w)| d * w).sum();
    match sum % 11 {
        0 | 1 => 0,
        rem => 11 - rem,
    }
}

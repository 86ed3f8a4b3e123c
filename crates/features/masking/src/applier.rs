//! # Mask Applier
//!
//! Maps the full current input value (as captured after each keystroke) to its
//! canonical display format.
//!
//! ## Algorithm
//! 1. Strip every non-digit character.
//! 2. More digits than the rule allows rejects the keystroke.
//! 3. Otherwise fill the kind's template. Separators are emitted only when a digit
//!    follows them, so partial input never ends in a dangling `-` or `.`.

use crate::currency::CurrencyFormat;
use crate::registry::{get_mask_config, get_rule};
use chub_domain::mask::MaskKind;
use tracing::{debug, trace};

/// `#` marks a digit slot; everything else is a literal separator.
const SLOT: char = '#';

const PHONE_LANDLINE: &str = "(##) ####-####";
const PHONE_MOBILE: &str = "(##) #####-####";
const CPF: &str = "###.###.###-##";
const CNPJ: &str = "##.###.###/####-##";
const CEP: &str = "#####-###";

/// Digits at which a phone number switches from landline to mobile grouping.
const MOBILE_DIGITS: usize = 11;

/// Keeps only ASCII digits.
#[must_use]
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Counts ASCII digits without allocating.
#[must_use]
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Formats `raw` for `field_type`, passing it through untouched when no mask exists
/// under that key.
///
/// Over-length input keeps only the first `max_digits` digits and formats those.
/// That equals the previous value only when the surplus digits were typed at the end;
/// an insertion at the front or a paste is clipped and reformatted instead. Callers that
/// hold the previous value should use [`try_apply`] or `FieldController::on_change`,
/// which reject the keystroke outright.
///
/// ```
/// use chub_masking::apply_mask;
///
/// assert_eq!(apply_mask("11999998888", "phone"), "(11) 99999-8888");
/// assert_eq!(apply_mask("100", "currency"), "R$ 1,00");
/// assert_eq!(apply_mask("abc", "unknown"), "abc");
/// ```
#[must_use]
pub fn apply_mask(raw: &str, field_type: &str) -> String {
    match get_mask_config(field_type) {
        Some(rule) => apply(rule.kind, raw, &CurrencyFormat::BRL),
        None => {
            trace!(field_type, "No mask registered, passing value through");
            raw.to_owned()
        },
    }
}

/// Stateless formatting for a known kind. Over-length input is clipped to the first
/// `max_digits` digits; see [`apply_mask`] and prefer [`try_apply`] when the previous value
/// is at hand.
#[must_use]
pub fn apply(kind: MaskKind, raw: &str, currency: &CurrencyFormat) -> String {
    try_apply(kind, raw, currency).unwrap_or_else(|| {
        let mut digits = strip_non_digits(raw);
        digits.truncate(get_rule(kind).max_digits);
        format_digits(kind, &digits, currency)
    })
}

/// Formats `raw`, or returns `None` when the keystroke must be rejected because it
/// exceeds the rule's digit maximum.
#[must_use]
pub fn try_apply(kind: MaskKind, raw: &str, currency: &CurrencyFormat) -> Option<String> {
    let rule = get_rule(kind);
    let digits = strip_non_digits(raw);

    if digits.len() > rule.max_digits {
        debug!(%kind, digits = digits.len(), max = rule.max_digits, "Keystroke rejected");
        return None;
    }

    Some(format_digits(kind, &digits, currency))
}

/// Formats a run of at most `max_digits` ASCII digits.
fn format_digits(kind: MaskKind, digits: &str, currency: &CurrencyFormat) -> String {
    match kind {
        MaskKind::Phone if digits.len() >= MOBILE_DIGITS => fill_template(PHONE_MOBILE, digits),
        MaskKind::Phone => fill_template(PHONE_LANDLINE, digits),
        MaskKind::Cpf => fill_template(CPF, digits),
        MaskKind::Cnpj => fill_template(CNPJ, digits),
        MaskKind::Cep => fill_template(CEP, digits),
        MaskKind::Currency => currency.format_cents(digits),
    }
}

fn fill_template(template: &str, digits: &str) -> String {
    // A leading literal such as `(` opens the first group and waits until it is complete.
    let body = template.trim_start_matches(|c: char| c != SLOT);
    if body.len() < template.len() {
        let first_group = body.chars().take_while(|&c| c == SLOT).count();
        if digits.len() <= first_group {
            return digits.to_owned();
        }
    }

    let mut out = String::with_capacity(template.len());
    let mut digits = digits.chars().peekable();

    for slot in template.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == SLOT {
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_omits_trailing_separators() {
        assert_eq!(fill_template(CEP, ""), "");
        assert_eq!(fill_template(CEP, "12345"), "12345");
        assert_eq!(fill_template(CEP, "123456"), "12345-6");
        assert_eq!(fill_template(PHONE_LANDLINE, "1"), "1");
        assert_eq!(fill_template(PHONE_LANDLINE, "11"), "11");
        assert_eq!(fill_template(PHONE_LANDLINE, "119"), "(11) 9");
    }

    #[test]
    fn phone_switches_grouping_on_the_eleventh_digit() {
        let brl = CurrencyFormat::BRL;
        assert_eq!(format_digits(MaskKind::Phone, "1133334444", &brl), "(11) 3333-4444");
        assert_eq!(format_digits(MaskKind::Phone, "11999998888", &brl), "(11) 99999-8888");
    }

    #[test]
    fn over_length_is_rejected_not_truncated() {
        let brl = CurrencyFormat::BRL;
        assert_eq!(try_apply(MaskKind::Cep, "123456789", &brl), None);
        assert_eq!(apply(MaskKind::Cep, "123456789", &brl), "12345-678");
    }

    #[test]
    fn strips_everything_but_ascii_digits() {
        assert_eq!(strip_non_digits("(11) 9a9-٣"), "1199");
        assert_eq!(digit_count("123.456.789-00"), 11);
    }
}

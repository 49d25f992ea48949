//! Property-based tests for formosa-validator.

use formosa_validator::i18n::scoped_locale;
use formosa_validator::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn code<T: std::fmt::Debug>(result: Result<Option<T>, ParseError>) -> Option<MessageKey> {
    result.err().and_then(|e| e.code())
}

// ============================================================================
// IDEMPOTENCE: parse(parse(x)) == parse(x)
// ============================================================================

proptest! {
    #[test]
    fn text_output_reparses_to_itself(s in "[ a-zA-Z0-9]{0,20}") {
        let field = text(false, TextOptions::default().casing(Casing::Title)).unwrap();
        if let Ok(Some(out)) = field.parse(json!(s)) {
            prop_assert_eq!(field.parse(json!(out.clone())).unwrap(), Some(out));
        }
    }

    #[test]
    fn number_output_reparses_to_itself(n in -1.0e9f64..1.0e9) {
        let field = number(true, NumberOptions::default()).unwrap();
        let out = field.parse(json!(n.to_string())).unwrap().unwrap();
        prop_assert_eq!(field.parse(json!(out)).unwrap(), Some(out));
    }

    #[test]
    fn card_output_reparses_to_itself(groups in proptest::collection::vec("[0-9]{4}", 4)) {
        let field = credit_card(true, CreditCardOptions::default());
        if let Ok(Some(out)) = field.parse(json!(groups.join(" "))) {
            prop_assert_eq!(field.parse(json!(out.clone())).unwrap(), Some(out));
        }
    }

    #[test]
    fn mobile_output_reparses_to_itself(rest in "[0-9]{8}", intl in any::<bool>()) {
        let field = mobile(MobileOptions::default().required(true));
        let input = if intl { format!("+886 9{rest}") } else { format!("09{rest}") };
        let out = field.parse(json!(input)).unwrap().unwrap();
        prop_assert_eq!(out.len(), 10);
        prop_assert_eq!(field.parse(json!(out.clone())).unwrap(), Some(out));
    }
}

// ============================================================================
// WHITELIST AND EMPTINESS
// ============================================================================

proptest! {
    #[test]
    fn whitelisted_values_skip_every_rule(s in "[a-z]{1,12}") {
        let mail = email(true, EmailOptions::default().whitelist([s.clone()]));
        prop_assert_eq!(mail.parse(json!(s.clone())).unwrap(), Some(s.clone()));

        let card = credit_card(true, CreditCardOptions::default().whitelist([s.clone()]));
        prop_assert_eq!(card.parse(json!(s.clone())).unwrap(), Some(s.clone()));

        let id = national_id(NationalIdOptions::default().required(true).whitelist([s.to_uppercase()]));
        prop_assert_eq!(id.parse(json!(s.clone())).unwrap(), Some(s.to_uppercase()));
    }

    #[test]
    fn blank_input_is_empty(spaces in " {0,6}", required in any::<bool>()) {
        let field = text(required, TextOptions::default().min_length(3)).unwrap();
        let result = field.parse(json!(spaces));
        if required {
            prop_assert_eq!(code(result), Some(MessageKey::Required));
        } else {
            prop_assert_eq!(result.unwrap(), None);
        }
    }
}

#[test]
fn null_is_empty_for_every_kind() {
    assert_eq!(number(false, NumberOptions::default()).unwrap().parse(Value::Null).unwrap(), None);
    assert_eq!(boolean(false, BooleanOptions::default()).parse(Value::Null).unwrap(), None);
    assert_eq!(mobile(MobileOptions::default()).parse(Value::Null).unwrap(), None);
    assert_eq!(
        code(bank_account(BankAccountOptions::default().required(true)).parse(Value::Null)),
        Some(MessageKey::Required)
    );
}

// ============================================================================
// BOUNDARIES: exactly at a bound passes, one unit beyond fails
// ============================================================================

proptest! {
    #[test]
    fn number_bounds_are_inclusive(lo in -500i32..0, hi in 0i32..500, n in -1000i32..1000) {
        let field = number(
            true,
            NumberOptions::default().min(f64::from(lo)).max(f64::from(hi)),
        )
        .unwrap();
        prop_assert!(field.is_valid(json!(lo)));
        prop_assert!(field.is_valid(json!(hi)));
        prop_assert_eq!(code(field.parse(json!(lo - 1))), Some(MessageKey::Min));
        prop_assert_eq!(code(field.parse(json!(hi + 1))), Some(MessageKey::Max));
        prop_assert_eq!(field.is_valid(json!(n)), (lo..=hi).contains(&n));
    }

    #[test]
    fn text_length_bounds_are_inclusive(min in 1usize..8, extra in 0usize..8) {
        let max = min + extra;
        let field = text(true, TextOptions::default().min_length(min).max_length(max)).unwrap();
        prop_assert!(field.is_valid(json!("x".repeat(min))));
        prop_assert!(field.is_valid(json!("x".repeat(max))));
        prop_assert_eq!(code(field.parse(json!("x".repeat(max + 1)))), Some(MessageKey::MaxLength));
        if min > 1 {
            prop_assert_eq!(code(field.parse(json!("x".repeat(min - 1)))), Some(MessageKey::MinLength));
        }
    }
}

// ============================================================================
// LOCALE: switching changes messages, never outcomes
// ============================================================================

fn outcomes(input: &Value) -> Vec<Option<MessageKey>> {
    vec![
        code(text(true, TextOptions::default().min_length(3).excludes(["x"])).unwrap().parse(input.clone())),
        code(number(true, NumberOptions::default().min(0.0)).unwrap().parse(input.clone())),
        code(email(true, EmailOptions::default()).parse(input.clone())),
        code(national_id(NationalIdOptions::default().required(true)).parse(input.clone())),
        code(business_id(BusinessIdOptions::default().required(true)).parse(input.clone())),
    ]
}

proptest! {
    #[test]
    fn outcomes_do_not_depend_on_locale(s in "[ -~]{0,16}") {
        let input = json!(s);
        let en = {
            let _scope = scoped_locale("en");
            outcomes(&input)
        };
        let zh = {
            let _scope = scoped_locale("zh-TW");
            outcomes(&input)
        };
        let back = {
            let _scope = scoped_locale("en");
            outcomes(&input)
        };
        prop_assert_eq!(&en, &zh);
        prop_assert_eq!(&en, &back);
    }
}

#[test]
fn locale_changes_message_text_only() {
    let field = text(true, TextOptions::default().min_length(3)).unwrap();

    let en = {
        let _scope = scoped_locale("en");
        field.parse(json!("ab")).unwrap_err()
    };
    let zh = {
        let _scope = scoped_locale("zh_TW");
        field.parse(json!("ab")).unwrap_err()
    };

    assert_eq!(en.code(), zh.code());
    assert_eq!(en.message(), "Must be at least 3 characters");
    assert_eq!(zh.message(), "長度至少 3 個字元");
}

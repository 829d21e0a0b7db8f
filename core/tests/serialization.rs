#![cfg(feature = "serde")]

use tagged_core::{Maybe, Outcome};

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize, thiserror::Error)]
#[error("code {code}")]
struct CodedError {
  code: u16,
}

#[test]
fn maybe_is_externally_tagged() {
  assert_eq!(serde_json::to_string(&Maybe::some(3)).unwrap(), r#"{"Some":3}"#);
  assert_eq!(serde_json::to_string(&Maybe::<i32>::none()).unwrap(), r#""None""#);
  let parsed: Maybe<String> = serde_json::from_str(r#"{"Some":"x"}"#).unwrap();
  assert_eq!(parsed, Maybe::some(String::from("x")));
}

#[test]
fn outcome_is_externally_tagged() {
  let ok = Outcome::<u8, CodedError>::ok(1);
  assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"Ok":1}"#);
  let parsed: Outcome<u8, CodedError> = serde_json::from_str(r#"{"Err":{"code":404}}"#).unwrap();
  assert_eq!(parsed.unwrap_err(), CodedError { code: 404 });
}

//! Handler for `POST /contact` and the contact-form shape check.
//!
//! The body must be a JSON object with string `name`, `email` and `message`
//! fields; `company` may be a string, `null`, or left out. Nothing beyond
//! the shape is checked.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use folio_assistant::CompletionBackend;
use folio_core::{
  contact::{Contact, NewContact},
  store::PortfolioStore,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
  ApiState,
  error::{ApiError, FieldError},
};

/// Body returned on a successful submission.
#[derive(Debug, Serialize)]
pub struct ContactAccepted {
  pub message: &'static str,
  pub contact: Contact,
}

/// `POST /contact`, body: `{"name", "email", "company"?, "message"}`
pub async fn submit<S, B>(
  State(state): State<ApiState<S, B>>,
  body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContactAccepted>, ApiError>
where
  S: PortfolioStore + 'static,
  B: CompletionBackend + 'static,
{
  let Json(body) = body.map_err(|rejection| {
    ApiError::InvalidForm(vec![FieldError::new(&[], rejection.body_text())])
  })?;
  let input = parse_contact(&body).map_err(ApiError::InvalidForm)?;

  let contact = state
    .store
    .create_contact(input)
    .await
    .map_err(ApiError::internal("Failed to send message"))?;

  Ok(Json(ContactAccepted {
    message: "Message sent successfully!",
    contact,
  }))
}

/// Check `body` against the contact-form shape, collecting one error per
/// offending field.
pub fn parse_contact(body: &Value) -> Result<NewContact, Vec<FieldError>> {
  let Some(fields) = body.as_object() else {
    return Err(vec![FieldError::new(&[], expected("object", body))]);
  };

  let mut errors = Vec::new();
  let name = required_string(fields, "name", &mut errors);
  let email = required_string(fields, "email", &mut errors);
  let message = required_string(fields, "message", &mut errors);
  let company = optional_string(fields, "company", &mut errors);

  match (name, email, message, errors.is_empty()) {
    (Some(name), Some(email), Some(message), true) => Ok(NewContact {
      name,
      email,
      company,
      message,
    }),
    _ => Err(errors),
  }
}

fn required_string(
  fields: &Map<String, Value>,
  key: &str,
  errors: &mut Vec<FieldError>,
) -> Option<String> {
  match fields.get(key) {
    Some(Value::String(s)) => Some(s.clone()),
    None => {
      errors.push(FieldError::new(&[key], "Required"));
      None
    }
    Some(other) => {
      errors.push(FieldError::new(&[key], expected("string", other)));
      None
    }
  }
}

fn optional_string(
  fields: &Map<String, Value>,
  key: &str,
  errors: &mut Vec<FieldError>,
) -> Option<String> {
  match fields.get(key) {
    Some(Value::String(s)) => Some(s.clone()),
    None | Some(Value::Null) => None,
    Some(other) => {
      errors.push(FieldError::new(&[key], expected("string", other)));
      None
    }
  }
}

fn expected(want: &str, got: &Value) -> String {
  format!("Expected {want}, received {}", type_name(got))
}

fn type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

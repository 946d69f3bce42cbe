//! Request dispatch for the JSON line protocol
//!
//! Each request is `{"id": .., "method": .., "params": {..}}`. Each response
//! echoes the id and carries either `result` or `error { code, message }`.

use std::str::FromStr;

use quanta_core::numeric::MAX_DIGITS;
use quanta_core::{ParseError, SeparatorMode};
use quanta_units::{AnyQuantity, KindId, QuantityParser, KIND_PRIORITY};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use crate::config::Config;

/// Protocol-level error codes; quantity errors use [`ParseError::code`]
pub mod codes {
    pub const MALFORMED_REQUEST: &str = "MALFORMED_REQUEST";
    pub const METHOD_NOT_FOUND: &str = "METHOD_NOT_FOUND";
    pub const INVALID_PARAMS: &str = "INVALID_PARAMS";
    pub const UNKNOWN_KIND: &str = "UNKNOWN_KIND";
}

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    fn new(code: &str, message: impl Into<String>) -> Self {
        ErrorBody {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

impl From<ParseError> for ErrorBody {
    fn from(err: ParseError) -> Self {
        ErrorBody::new(err.code(), err.to_string())
    }
}

impl Response {
    fn ok(id: Option<JsonValue>, result: JsonValue) -> Self {
        Response {
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Option<JsonValue>, error: ErrorBody) -> Self {
        Response {
            id,
            result: None,
            error: Some(error),
        }
    }

    /// Single-line JSON encoding
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            json!({
                "id": null,
                "error": { "code": codes::MALFORMED_REQUEST, "message": e.to_string() }
            })
            .to_string()
        })
    }
}

pub struct Handler {
    config: Config,
}

impl Handler {
    pub fn new(config: Config) -> Self {
        Handler { config }
    }

    /// Decode one input line and answer it
    pub fn handle_line(&self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(&request),
            Err(e) => Response::err(None, ErrorBody::new(codes::MALFORMED_REQUEST, format!("Malformed request: {}", e))),
        }
    }

    pub fn handle(&self, request: &Request) -> Response {
        debug!(method = %request.method, "handling request");
        let params = request.params.as_ref();
        let result = match request.method.as_str() {
            "parse" => self.parse(params),
            "convert" => self.convert(params),
            "units" => units(params),
            "kinds" => Ok(kinds()),
            other => Err(ErrorBody::new(codes::METHOD_NOT_FOUND, format!("Method not found: {}", other))),
        };

        match result {
            Ok(r) => Response::ok(request.id.clone(), r),
            Err(e) => Response::err(request.id.clone(), e),
        }
    }

    fn parser(&self, params: Option<&JsonValue>) -> Result<QuantityParser, ErrorBody> {
        let mode = match param_str(params, "mode") {
            Some(raw) => SeparatorMode::from_str(raw).map_err(|e| ErrorBody::new(codes::INVALID_PARAMS, e))?,
            None => self.config.mode,
        };
        Ok(QuantityParser::new(mode).with_locale(self.config.locale))
    }

    fn parse(&self, params: Option<&JsonValue>) -> Result<JsonValue, ErrorBody> {
        let text = required_str(params, "text")?;
        let quantity = self.parser(params)?.try_parse_any(text)?;
        Ok(self.describe(&quantity, self.config.digits))
    }

    fn convert(&self, params: Option<&JsonValue>) -> Result<JsonValue, ErrorBody> {
        let text = required_str(params, "text")?;
        let to = required_str(params, "to")?;
        let digits = match params.and_then(|p| p.get("digits")) {
            None | Some(JsonValue::Null) => self.config.digits,
            Some(value) => Some(
                value
                    .as_u64()
                    .and_then(|d| u32::try_from(d).ok())
                    .filter(|d| *d <= MAX_DIGITS)
                    .ok_or_else(|| {
                        ErrorBody::new(
                            codes::INVALID_PARAMS,
                            format!("'digits' must be an integer from 0 to {}", MAX_DIGITS),
                        )
                    })?,
            ),
        };

        let quantity = self.parser(params)?.try_parse_any(text)?;
        let converted = quantity.switched_unit(to)?;
        Ok(self.describe(&converted, digits))
    }

    fn describe(&self, quantity: &AnyQuantity, digits: Option<u32>) -> JsonValue {
        json!({
            "kind": quantity.kind(),
            "value": quantity.value(),
            "unit": quantity.unit_symbol(),
            "display": quantity.value_rounded_with_unit(digits, false, self.config.i18n),
        })
    }
}

fn units(params: Option<&JsonValue>) -> Result<JsonValue, ErrorBody> {
    let selected: Vec<KindId> = match param_str(params, "kind") {
        Some(raw) => vec![KindId::from_str(raw).map_err(|e| ErrorBody::new(codes::UNKNOWN_KIND, e))?],
        None => KIND_PRIORITY.to_vec(),
    };

    let list: Vec<JsonValue> = selected
        .iter()
        .flat_map(|kind| {
            kind.units().into_iter().map(move |unit| {
                json!({
                    "kind": kind,
                    "name": unit.name,
                    "symbol": unit.symbol,
                    "digits": unit.digits,
                })
            })
        })
        .collect();
    Ok(JsonValue::Array(list))
}

fn kinds() -> JsonValue {
    json!(KIND_PRIORITY)
}

fn param_str<'a>(params: Option<&'a JsonValue>, key: &str) -> Option<&'a str> {
    params.and_then(|p| p.get(key)).and_then(|v| v.as_str())
}

fn required_str<'a>(params: Option<&'a JsonValue>, key: &str) -> Result<&'a str, ErrorBody> {
    param_str(params, key)
        .ok_or_else(|| ErrorBody::new(codes::INVALID_PARAMS, format!("Missing '{}' parameter", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quanta_core::Locale;

    fn handler() -> Handler {
        Handler::new(Config {
            mode: SeparatorMode::BestGuess,
            locale: Locale::C,
            digits: None,
            i18n: false,
        })
    }

    fn call(line: &str) -> JsonValue {
        serde_json::from_str(&handler().handle_line(line).to_line()).unwrap()
    }

    #[test]
    fn test_parse() {
        let r = call(r#"{"id": 1, "method": "parse", "params": {"text": "33.0 ft"}}"#);
        assert_eq!(r["id"], 1);
        assert_eq!(r["result"]["kind"], "length");
        assert_eq!(r["result"]["value"], 33.0);
        assert_eq!(r["result"]["unit"], "ft");
        assert_eq!(r["result"]["display"], "33.0 ft");
        assert!(r.get("error").is_none());
    }

    #[test]
    fn test_parse_clock_text() {
        let r = call(r#"{"id": "a", "method": "parse", "params": {"text": "1:30"}}"#);
        assert_eq!(r["result"]["kind"], "time");
        assert_eq!(r["result"]["value"], 5400.0);
    }

    #[test]
    fn test_parse_unknown_unit() {
        let r = call(r#"{"id": 2, "method": "parse", "params": {"text": "45.3 xyz"}}"#);
        assert_eq!(r["error"]["code"], "UNKNOWN_UNIT");
        assert!(r.get("result").is_none());
    }

    #[test]
    fn test_parse_mode_param() {
        let r = call(r#"{"id": 3, "method": "parse", "params": {"text": "1,5 m", "mode": "programmatic"}}"#);
        assert_eq!(r["error"]["code"], "INVALID_NUMBER");

        let r = call(r#"{"id": 4, "method": "parse", "params": {"text": "1 m", "mode": "sometimes"}}"#);
        assert_eq!(r["error"]["code"], codes::INVALID_PARAMS);
    }

    #[test]
    fn test_convert() {
        let r = call(r#"{"id": 5, "method": "convert", "params": {"text": "100 km/h", "to": "kts", "digits": 2}}"#);
        assert_eq!(r["result"]["unit"], "kts");
        assert_eq!(r["result"]["display"], "54.00 kts");

        let r = call(r#"{"id": 6, "method": "convert", "params": {"text": "35.4336 DMS", "to": "deg"}}"#);
        assert_eq!(r["result"]["display"], "35.73 deg");
    }

    #[test]
    fn test_convert_digits_out_of_range() {
        let r = call(r#"{"id": 14, "method": "convert", "params": {"text": "1 m", "to": "ft", "digits": 1000000}}"#);
        assert_eq!(r["error"]["code"], codes::INVALID_PARAMS);

        let r = call(r#"{"id": 15, "method": "convert", "params": {"text": "1 m", "to": "ft", "digits": -1}}"#);
        assert_eq!(r["error"]["code"], codes::INVALID_PARAMS);

        let r = call(r#"{"id": 16, "method": "convert", "params": {"text": "1 km", "to": "m", "digits": 15}}"#);
        assert_eq!(r["result"]["display"], "1000.000000000000000 m");
    }

    #[test]
    fn test_convert_across_kinds_fails() {
        let r = call(r#"{"id": 7, "method": "convert", "params": {"text": "100 km/h", "to": "ft"}}"#);
        assert_eq!(r["error"]["code"], "UNKNOWN_UNIT");

        let r = call(r#"{"id": 8, "method": "convert", "params": {"text": "100 km/h"}}"#);
        assert_eq!(r["error"]["code"], codes::INVALID_PARAMS);
    }

    #[test]
    fn test_units() {
        let r = call(r#"{"id": 9, "method": "units", "params": {"kind": "mass"}}"#);
        let symbols: Vec<&str> = r["result"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["symbol"].as_str().unwrap())
            .collect();
        assert_eq!(symbols, ["kg", "g", "t", "ton", "lb"]);
        assert_eq!(r["result"][0]["kind"], "mass");
        assert_eq!(r["result"][0]["name"], "kilogram");
        assert_eq!(r["result"][0]["digits"], 1);

        let all = call(r#"{"id": 10, "method": "units"}"#);
        assert!(all["result"].as_array().unwrap().len() > 40);

        let r = call(r#"{"id": 11, "method": "units", "params": {"kind": "volume"}}"#);
        assert_eq!(r["error"]["code"], codes::UNKNOWN_KIND);
    }

    #[test]
    fn test_kinds() {
        let r = call(r#"{"id": 12, "method": "kinds"}"#);
        assert_eq!(r["result"][0], "acceleration");
        assert_eq!(r["result"][8], "temperature");
    }

    #[test]
    fn test_protocol_errors() {
        let r = call("not json");
        assert_eq!(r["id"], JsonValue::Null);
        assert_eq!(r["error"]["code"], codes::MALFORMED_REQUEST);

        let r = call(r#"{"id": 13, "method": "evaluate"}"#);
        assert_eq!(r["error"]["code"], codes::METHOD_NOT_FOUND);
    }
}

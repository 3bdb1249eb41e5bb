//! Tolerant field decoders for platform JSON. Numbers may arrive as
//! strings, floats or `null`; anything unreadable becomes zero.
use super::player::Player;
use super::player::Status;
use crate::CHIP_CEILING;
use crate::Chips;
use crate::Seat;
use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

fn number(value: &Value) -> Option<Chips> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as Chips)),
        Value::String(s) => s
            .trim()
            .parse::<Chips>()
            .ok()
            .or_else(|| s.trim().parse::<f64>().ok().map(|f| f as Chips)),
        Value::Bool(b) => Some(*b as Chips),
        _ => None,
    }
}

/// Chip count in `[0, CHIP_CEILING]`.
pub fn chips<'de, D: Deserializer<'de>>(d: D) -> Result<Chips, D::Error> {
    Ok(number(&Value::deserialize(d)?).unwrap_or(0).clamp(0, CHIP_CEILING))
}

/// Signed integer identifier such as a round number.
pub fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(number(&Value::deserialize(d)?).unwrap_or(0))
}

pub fn seat<'de, D: Deserializer<'de>>(d: D) -> Result<Seat, D::Error> {
    Ok(number(&Value::deserialize(d)?).unwrap_or(0).clamp(0, CHIP_CEILING) as Seat)
}

/// Free-form identifier rendered as text; numbers keep their JSON spelling.
pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Collections that may be `null` or the wrong shape decode as empty.
/// An unreadable element keeps its slot as `T::default()`.
pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    slots(d, T::default)
}

/// Seats keep their index; an unreadable one becomes an empty, eliminated seat.
pub fn seats<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Player>, D::Error> {
    slots(d, || Player {
        status: Status::Out,
        ..Player::default()
    })
}

fn slots<'de, D, T>(d: D, vacant: impl Fn() -> T) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value::<T>(item).unwrap_or_else(|_| vacant()))
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "chips")]
        chips: Chips,
        #[serde(default, deserialize_with = "text")]
        text: String,
        #[serde(default, deserialize_with = "list")]
        list: Vec<u8>,
    }

    fn decode(v: Value) -> Fields {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn numbers_in_many_shapes() {
        assert!(decode(json!({"chips": 40})).chips == 40);
        assert!(decode(json!({"chips": "40"})).chips == 40);
        assert!(decode(json!({"chips": 40.9})).chips == 40);
        assert!(decode(json!({"chips": null})).chips == 0);
        assert!(decode(json!({"chips": "lots"})).chips == 0);
        assert!(decode(json!({"chips": -5})).chips == 0);
        assert!(decode(json!({})).chips == 0);
        assert!(decode(json!({"chips": 6e18})).chips == CHIP_CEILING);
        assert!(decode(json!({"chips": "9223372036854775807"})).chips == CHIP_CEILING);
    }

    #[test]
    fn text_ids() {
        assert!(decode(json!({"text": "abc"})).text == "abc");
        assert!(decode(json!({"text": 17})).text == "17");
        assert!(decode(json!({"text": null})).text.is_empty());
    }

    #[test]
    fn lists() {
        assert!(decode(json!({"list": [1, 2, "x", 3]})).list == vec![1, 2, 0, 3]);
        assert!(decode(json!({"list": null})).list.is_empty());
        assert!(decode(json!({"list": {"a": 1}})).list.is_empty());
    }
}

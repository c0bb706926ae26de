use serde::{Deserialize, Serialize};

/// Keyboard keys understood by the core's key-injection entry point.
/// Discriminants are the identifiers the core expects, in its matrix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Key {
    Shift = 0,
    Z,
    X,
    C,
    V,
    A,
    S,
    D,
    F,
    G,
    Q,
    W,
    E,
    R,
    T,
    #[serde(rename = "1")]
    Key1,
    #[serde(rename = "2")]
    Key2,
    #[serde(rename = "3")]
    Key3,
    #[serde(rename = "4")]
    Key4,
    #[serde(rename = "5")]
    Key5,
    #[serde(rename = "0")]
    Key0,
    #[serde(rename = "9")]
    Key9,
    #[serde(rename = "8")]
    Key8,
    #[serde(rename = "7")]
    Key7,
    #[serde(rename = "6")]
    Key6,
    P,
    O,
    I,
    U,
    Y,
    Enter,
    L,
    K,
    J,
    H,
    Space,
    SymbolShift,
    M,
    N,
    B,
}

impl Key {
    pub fn id(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ids() {
        assert_eq!(Key::Shift.id(), 0);
        assert_eq!(Key::Key6.id(), 24);
        assert_eq!(Key::Enter.id(), 30);
        assert_eq!(Key::B.id(), 39);
    }

    #[test]
    fn test_digit_keys_use_plain_names() {
        let key: Key = serde_json::from_str("\"6\"").unwrap();
        assert_eq!(key, Key::Key6);
        assert_eq!(serde_json::to_string(&Key::Enter).unwrap(), "\"Enter\"");
    }
}

use serde::Deserialize;

/// Human-readable duration: whitespace-separated `<number><unit>` parts
/// where the unit is one of `s`, `m`, `h` or `d` (e.g. `"5s"`, `"1m 30s"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

const UNITS: [(&str, u64); 4] = [("s", 1), ("m", 60), ("h", 3600), ("d", 24 * 3600)];

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let mut total = 0;
        for part in raw.split_whitespace() {
            let seconds = UNITS
                .iter()
                .find_map(|(unit, factor)| {
                    let number = part.strip_suffix(unit)?.parse::<u64>().ok()?;
                    number.checked_mul(*factor)
                })
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid duration: {part:?}")))?;
            total += seconds;
        }
        Ok(Self(std::time::Duration::from_secs(total)))
    }
}

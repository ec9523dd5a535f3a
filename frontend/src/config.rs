use web_sys::window;
use shared::{WheelConfig, WheelError};

const WHEEL_CONFIG_JSON: &str = include_str!("../assets/wheel_config.json");

pub fn load_wheel_config() -> Result<WheelConfig, WheelError> {
    WheelConfig::from_json(WHEEL_CONFIG_JSON)
}

/// `?seed=<u64>` pins the outcome sequence, handy for demos and screenshots.
pub fn get_seed_override() -> Option<u64> {
    let search = window()?.location().search().ok()?;
    parse_seed(&search)
}

fn parse_seed(search: &str) -> Option<u64> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "seed")
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_is_valid() {
        let config = load_wheel_config().unwrap();
        assert_eq!(config, WheelConfig::default());
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("?seed=42"), Some(42));
        assert_eq!(parse_seed("?theme=dark&seed=7"), Some(7));
        assert_eq!(parse_seed("?seed=abc"), None);
        assert_eq!(parse_seed(""), None);
    }
}

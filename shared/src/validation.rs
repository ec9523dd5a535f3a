use std::borrow::Cow;
use std::collections::HashSet;
use validator::ValidationError;
use crate::constants::*;
use crate::wheel_config::{Prize, TickerConfig};

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn validate_prizes(prizes: &[Prize]) -> Result<(), ValidationError> {
    if prizes.is_empty() {
        return Err(error_with_message("empty_prizes", EMPTY_PRIZES_ERROR));
    }

    if prizes.iter().any(|p| !p.weight.is_finite() || p.weight <= 0.0) {
        return Err(error_with_message("invalid_weight", INVALID_WEIGHT_ERROR));
    }

    let mut seen = HashSet::with_capacity(prizes.len());
    if !prizes.iter().all(|p| seen.insert(p.id)) {
        return Err(error_with_message("duplicate_prize_id", DUPLICATE_PRIZE_ERROR));
    }
    Ok(())
}

pub fn validate_intensity_range(ticker: &TickerConfig) -> Result<(), ValidationError> {
    if ticker.min_intensity > ticker.max_intensity {
        return Err(error_with_message("invalid_intensity_range", INTENSITY_RANGE_ERROR));
    }
    Ok(())
}

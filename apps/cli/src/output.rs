//! Human-readable rendering of race outcomes.

use cepfinder_lookup::{DispatchError, RaceError, RaceWinner};

/// Render the winning payload: a header naming the provider, then one
/// `label: value` line per field.
pub fn render_winner(winner: &RaceWinner) -> String {
    let mut rendered = format!("{} returned:\n", winner.payload.provider_name());
    for (label, value) in winner.payload.fields() {
        rendered.push_str(&format!("  {}: {}\n", label, value));
    }
    rendered
}

pub fn render_error(error: &DispatchError) -> String {
    match error {
        DispatchError::Input(input) => input.to_string(),
        DispatchError::Race(RaceError::Timeout(deadline)) => {
            format!("Timeout: no provider answered within {:?}", deadline)
        }
        DispatchError::Race(race) => race.to_string(),
    }
}

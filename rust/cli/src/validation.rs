//! Argument checks that clap cannot express on its own.

use euchre_ai::Strategy;
use euchre_engine::game::SEATS;

use crate::error::CliError;

/// Pairs up `NAME TYPE` arguments, one pair per seat in seating order.
///
/// # Example
///
/// ```rust
/// # use euchre_cli::validation::parse_player_specs;
/// use euchre_ai::Strategy;
///
/// let args: Vec<String> = ["Adi", "Simple", "Barbara", "Human", "Chi-Chih", "Simple", "Dabbala", "Simple"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let seats = parse_player_specs(&args).unwrap();
/// assert_eq!(seats[1], ("Barbara".to_string(), Strategy::Human));
/// ```
pub fn parse_player_specs(args: &[String]) -> Result<Vec<(String, Strategy)>, CliError> {
    if args.len() != SEATS * 2 {
        return Err(CliError::InvalidInput(format!(
            "Expected {} NAME TYPE pairs, got {} arguments",
            SEATS,
            args.len()
        )));
    }
    args.chunks(2)
        .map(|pair| {
            let strategy = pair[1]
                .parse::<Strategy>()
                .map_err(|e| CliError::InvalidInput(e.to_string()))?;
            Ok((pair[0].clone(), strategy))
        })
        .collect()
}

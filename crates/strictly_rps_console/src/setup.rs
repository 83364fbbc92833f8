//! Turns command-line choices into a catalog and an opponent.

use crate::cli::GameArgs;
use anyhow::{Context, Result};
use strictly_rps::{
    Catalog, CyclingOpponent, FixedOpponent, Opponent, RandomOpponent, VariantConfig,
};
use tracing::{info, instrument};

/// Prefix forcing an opponent choice to be read as a move name.
pub const MOVE_PREFIX: &str = "move:";

/// Builds the catalog selected by `args`.
#[instrument(skip_all, fields(variant = %args.variant, file = ?args.variant_file))]
pub fn load_catalog(args: &GameArgs) -> Result<Catalog> {
    let catalog = match &args.variant_file {
        Some(path) => VariantConfig::from_file(path)
            .and_then(|config| config.build())
            .with_context(|| format!("Invalid variant file {}", path.display()))?,
        None => args
            .variant
            .catalog()
            .with_context(|| format!("Invalid built-in variant {}", args.variant))?,
    };
    info!(moves = catalog.len(), "Catalog ready");
    Ok(catalog)
}

/// Creates the computer opponent named by `choice`.
///
/// `random` and `cycle` select a strategy; anything else must name a move
/// of `catalog`, which the computer then always plays. `move:<name>` always
/// names a move, for variants with moves called `random` or `cycle`.
#[instrument(skip(catalog))]
pub fn build_opponent(choice: &str, seed: Option<u64>, catalog: &Catalog) -> Result<Box<dyn Opponent>> {
    let choice = choice.trim().to_lowercase();
    let opponent: Box<dyn Opponent> = match choice.as_str() {
        "random" => match seed {
            Some(seed) => Box::new(RandomOpponent::seeded(seed)),
            None => Box::new(RandomOpponent::new()),
        },
        "cycle" => Box::new(CyclingOpponent::default()),
        other => {
            let name = other.strip_prefix(MOVE_PREFIX).unwrap_or(other);
            let fixed = catalog
                .parse(name)
                .with_context(|| format!("Unknown opponent {other:?}"))?;
            Box::new(FixedOpponent::new(fixed))
        }
    };
    info!(opponent = opponent.name(), "Opponent ready");
    Ok(opponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use strictly_rps::Variant;

    fn classic_args() -> GameArgs {
        GameArgs {
            variant: Variant::Classic,
            variant_file: None,
        }
    }

    #[test]
    fn test_fixed_opponent_by_name() {
        let catalog = load_catalog(&classic_args()).unwrap();
        let mut opponent = build_opponent("Paper", None, &catalog).unwrap();
        assert_eq!(opponent.name(), "fixed");
        assert_eq!(opponent.choose(&catalog), catalog.find("paper").unwrap());
    }

    #[test]
    fn test_unknown_opponent_fails() {
        let catalog = load_catalog(&classic_args()).unwrap();
        assert!(build_opponent("spock", None, &catalog).is_err());
    }

    #[test]
    fn test_move_prefix_reaches_shadowed_moves() {
        let catalog = Catalog::builder()
            .with_move("random")
            .with_move("cycle")
            .beats("random", "cycle", "breaks")
            .build()
            .unwrap();
        let random = catalog.find("random").unwrap();

        let mut strategy = build_opponent("random", Some(7), &catalog).unwrap();
        assert_eq!(strategy.name(), "random");

        let mut fixed = build_opponent("move:Random", None, &catalog).unwrap();
        assert_eq!(fixed.name(), "fixed");
        for _ in 0..5 {
            assert_eq!(fixed.choose(&catalog), random);
            assert!(catalog.contains(strategy.choose(&catalog)));
        }
    }

    #[test]
    fn test_missing_variant_file_fails() {
        let args = GameArgs {
            variant: Variant::Classic,
            variant_file: Some("definitely/not/here.toml".into()),
        };
        let err = load_catalog(&args).unwrap_err();
        assert!(err.to_string().contains("Invalid variant file"));
    }

    #[test]
    fn test_variant_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
            [[moves]]
            name = "fire"
            beats = [{ move = "grass", verb = "burns" }]

            [[moves]]
            name = "grass"
            beats = [{ move = "water", verb = "drinks" }]

            [[moves]]
            name = "water"
            beats = [{ move = "fire", verb = "douses" }]
            "#,
        )
        .unwrap();

        let args = GameArgs {
            variant: Variant::LizardSpock,
            variant_file: Some(file.path().to_path_buf()),
        };
        let catalog = load_catalog(&args).unwrap();
        assert_eq!(catalog.len(), 3);
        let fire = catalog.find("fire").unwrap();
        let grass = catalog.find("grass").unwrap();
        assert!(catalog.defeats(fire, grass));
        assert_eq!(catalog.verb(fire, grass), Some("burns"));
    }
}
